//! The eight named lunar phases and the classifier.

use std::str::FromStr;

use serde::Serialize;

use crate::error::PhaseError;

/// At or below this illumination percent the moon is classified as new.
pub const NEW_MAX_PERCENT: f64 = 1.0;
/// At or above this illumination percent the moon is classified as full.
pub const FULL_MIN_PERCENT: f64 = 99.0;
/// Lower edge (inclusive) of the quarter band.
pub const QUARTER_LOW_PERCENT: f64 = 49.0;
/// Upper edge (inclusive) of the quarter band.
pub const QUARTER_HIGH_PERCENT: f64 = 51.0;
/// Crescent/gibbous split outside the quarter band.
pub const HALF_PERCENT: f64 = 50.0;
/// Phase age separating the waxing half of the cycle from the waning half.
pub const WANING_FROM_AGE: f64 = 0.5;

/// One of the eight conventional lunar phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseCategory {
    /// Disc (almost) entirely dark.
    New,
    /// Less than half lit, growing.
    WaxingCrescent,
    /// Half lit, growing.
    FirstQuarter,
    /// More than half lit, growing.
    WaxingGibbous,
    /// Disc (almost) entirely lit.
    Full,
    /// More than half lit, shrinking.
    WaningGibbous,
    /// Half lit, shrinking.
    LastQuarter,
    /// Less than half lit, shrinking.
    WaningCrescent,
}

impl PhaseCategory {
    /// All phases in cycle order, starting from new moon.
    pub const ALL: [Self; 8] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Returns the stable snake_case key used for lookups and serialization.
    pub fn key(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::WaxingCrescent => "waxing_crescent",
            Self::FirstQuarter => "first_quarter",
            Self::WaxingGibbous => "waxing_gibbous",
            Self::Full => "full",
            Self::WaningGibbous => "waning_gibbous",
            Self::LastQuarter => "last_quarter",
            Self::WaningCrescent => "waning_crescent",
        }
    }

    /// Returns the position of this phase in [`PhaseCategory::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the phase at `index` in cycle order.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::InvalidPhaseIndex`] if `index >= 8`.
    pub fn from_index(index: usize) -> Result<Self, PhaseError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PhaseError::InvalidPhaseIndex { index })
    }

    /// Returns `true` for the phases between new and full.
    pub fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }

    /// Returns `true` for the phases between full and the next new moon.
    pub fn is_waning(self) -> bool {
        matches!(
            self,
            Self::WaningGibbous | Self::LastQuarter | Self::WaningCrescent
        )
    }
}

impl std::fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PhaseCategory {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| PhaseError::UnknownPhaseKey { key: s.to_string() })
    }
}

/// Maps an illumination percentage and a phase age to a phase category.
///
/// Rules are checked in order and the first match wins:
///
/// 1. `percent <= 1` is [`New`](PhaseCategory::New)
/// 2. `percent >= 99` is [`Full`](PhaseCategory::Full)
/// 3. `49 <= percent <= 51` is a quarter: first while `phase_age < 0.5`, last otherwise
/// 4. waxing half (`phase_age < 0.5`): crescent below 50%, gibbous from 50%
/// 5. waning half: crescent below 50%, gibbous from 50%
///
/// Total over `percent` in [0, 100] and `phase_age` in [0, 1).
pub fn classify(illumination_percent: f64, phase_age: f64) -> PhaseCategory {
    let waxing = phase_age < WANING_FROM_AGE;

    if illumination_percent <= NEW_MAX_PERCENT {
        return PhaseCategory::New;
    }
    if illumination_percent >= FULL_MIN_PERCENT {
        return PhaseCategory::Full;
    }
    if (QUARTER_LOW_PERCENT..=QUARTER_HIGH_PERCENT).contains(&illumination_percent) {
        return if waxing {
            PhaseCategory::FirstQuarter
        } else {
            PhaseCategory::LastQuarter
        };
    }

    let crescent = illumination_percent < HALF_PERCENT;
    match (waxing, crescent) {
        (true, true) => PhaseCategory::WaxingCrescent,
        (true, false) => PhaseCategory::WaxingGibbous,
        (false, true) => PhaseCategory::WaningCrescent,
        (false, false) => PhaseCategory::WaningGibbous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_points() {
        assert_eq!(classify(50.0, 0.25), PhaseCategory::FirstQuarter);
        assert_eq!(classify(50.0, 0.75), PhaseCategory::LastQuarter);
        assert_eq!(classify(30.0, 0.1), PhaseCategory::WaxingCrescent);
        assert_eq!(classify(70.0, 0.1), PhaseCategory::WaxingGibbous);
        assert_eq!(classify(30.0, 0.9), PhaseCategory::WaningCrescent);
        assert_eq!(classify(70.0, 0.9), PhaseCategory::WaningGibbous);
    }

    #[test]
    fn new_edge_is_inclusive() {
        assert_eq!(classify(1.0, 0.3), PhaseCategory::New);
        assert_eq!(classify(1.1, 0.3), PhaseCategory::WaxingCrescent);
        assert_eq!(classify(1.1, 0.7), PhaseCategory::WaningCrescent);
    }

    #[test]
    fn full_edge_is_inclusive() {
        assert_eq!(classify(99.0, 0.1), PhaseCategory::Full);
        assert_eq!(classify(98.9, 0.1), PhaseCategory::WaxingGibbous);
        assert_eq!(classify(98.9, 0.6), PhaseCategory::WaningGibbous);
    }

    #[test]
    fn quarter_band_edges_inclusive() {
        assert_eq!(classify(49.0, 0.2), PhaseCategory::FirstQuarter);
        assert_eq!(classify(51.0, 0.2), PhaseCategory::FirstQuarter);
        assert_eq!(classify(48.9, 0.2), PhaseCategory::WaxingCrescent);
        assert_eq!(classify(51.1, 0.2), PhaseCategory::WaxingGibbous);
        assert_eq!(classify(49.0, 0.8), PhaseCategory::LastQuarter);
        assert_eq!(classify(51.0, 0.8), PhaseCategory::LastQuarter);
        assert_eq!(classify(48.9, 0.8), PhaseCategory::WaningCrescent);
        assert_eq!(classify(51.1, 0.8), PhaseCategory::WaningGibbous);
    }

    #[test]
    fn phase_age_half_is_waning() {
        assert_eq!(classify(50.0, 0.5), PhaseCategory::LastQuarter);
        assert_eq!(classify(30.0, 0.5), PhaseCategory::WaningCrescent);
        assert_eq!(classify(30.0, 0.499), PhaseCategory::WaxingCrescent);
    }

    #[test]
    fn all_is_in_cycle_order() {
        for (i, phase) in PhaseCategory::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
            assert_eq!(PhaseCategory::from_index(i).unwrap(), *phase);
        }
        assert_eq!(
            PhaseCategory::from_index(8).unwrap_err(),
            PhaseError::InvalidPhaseIndex { index: 8 }
        );
    }

    #[test]
    fn waxing_and_waning_are_disjoint() {
        for phase in PhaseCategory::ALL {
            assert!(!(phase.is_waxing() && phase.is_waning()), "{phase}");
        }
        assert!(!PhaseCategory::New.is_waxing());
        assert!(!PhaseCategory::Full.is_waning());
    }

    #[test]
    fn key_round_trip() {
        for phase in PhaseCategory::ALL {
            assert_eq!(phase.key().parse::<PhaseCategory>().unwrap(), phase);
        }
        assert_eq!(
            "Waxing-Crescent".parse::<PhaseCategory>().unwrap(),
            PhaseCategory::WaxingCrescent
        );
        assert!("harvest".parse::<PhaseCategory>().is_err());
    }
}
