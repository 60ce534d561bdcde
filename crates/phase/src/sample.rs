//! Illumination samples and percent rounding.

use serde::Serialize;

use crate::category::{PhaseCategory, classify};
use crate::error::PhaseError;

/// Rounds an illuminated fraction to a percentage with one decimal place.
///
/// ```
/// use lunacal_phase::illumination_percent;
///
/// assert_eq!(illumination_percent(0.0), 0.0);
/// assert_eq!(illumination_percent(0.50049), 50.0);
/// assert_eq!(illumination_percent(0.98765), 98.8);
/// ```
pub fn illumination_percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

/// One oracle reading: how much of the disc is lit and how far through the
/// lunation the moon is.
///
/// `phase_age` is the fraction of the synodic cycle elapsed since the last
/// new moon: 0 is new, 0.5 is full, values approaching 1 lead into the next
/// new moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IlluminationSample {
    illuminated_fraction: f64,
    phase_age: f64,
}

impl IlluminationSample {
    /// Creates a validated sample.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::InvalidFraction`] unless `illuminated_fraction`
    /// is finite and in [0, 1], and [`PhaseError::InvalidPhaseAge`] unless
    /// `phase_age` is finite and in [0, 1).
    pub fn new(illuminated_fraction: f64, phase_age: f64) -> Result<Self, PhaseError> {
        if !illuminated_fraction.is_finite() || !(0.0..=1.0).contains(&illuminated_fraction) {
            return Err(PhaseError::InvalidFraction {
                fraction: illuminated_fraction,
            });
        }
        if !phase_age.is_finite() || !(0.0..1.0).contains(&phase_age) {
            return Err(PhaseError::InvalidPhaseAge { phase_age });
        }
        Ok(Self {
            illuminated_fraction,
            phase_age,
        })
    }

    /// Returns the illuminated fraction of the disc (0..=1).
    pub fn illuminated_fraction(&self) -> f64 {
        self.illuminated_fraction
    }

    /// Returns the phase age (0..1).
    pub fn phase_age(&self) -> f64 {
        self.phase_age
    }

    /// Returns the illumination as a percentage rounded to one decimal.
    pub fn percent(&self) -> f64 {
        illumination_percent(self.illuminated_fraction)
    }

    /// Classifies this sample using its rounded percent.
    pub fn category(&self) -> PhaseCategory {
        classify(self.percent(), self.phase_age)
    }

    /// Returns the distance of the phase age from full (0.5).
    pub fn distance_from_full(&self) -> f64 {
        (self.phase_age - 0.5).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn accepts_domain_edges() {
        assert!(IlluminationSample::new(0.0, 0.0).is_ok());
        assert!(IlluminationSample::new(1.0, 0.999_999).is_ok());
    }

    #[test]
    fn rejects_fraction_out_of_range() {
        assert_eq!(
            IlluminationSample::new(-0.01, 0.2).unwrap_err(),
            PhaseError::InvalidFraction { fraction: -0.01 }
        );
        assert!(IlluminationSample::new(1.01, 0.2).is_err());
        assert!(IlluminationSample::new(f64::NAN, 0.2).is_err());
    }

    #[test]
    fn rejects_phase_age_of_one() {
        assert_eq!(
            IlluminationSample::new(0.5, 1.0).unwrap_err(),
            PhaseError::InvalidPhaseAge { phase_age: 1.0 }
        );
        assert!(IlluminationSample::new(0.5, -0.1).is_err());
        assert!(IlluminationSample::new(0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_abs_diff_eq!(illumination_percent(0.123_44), 12.3, epsilon = 1e-12);
        assert_abs_diff_eq!(illumination_percent(0.123_46), 12.3, epsilon = 1e-12);
        assert_abs_diff_eq!(illumination_percent(0.123_56), 12.4, epsilon = 1e-12);
        assert_abs_diff_eq!(illumination_percent(1.0), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn category_uses_rounded_percent() {
        // 0.9896 rounds to 99.0 which is Full, even though the raw value is below 99
        let s = IlluminationSample::new(0.9896, 0.47).unwrap();
        assert_eq!(s.category(), PhaseCategory::Full);
    }

    #[test]
    fn distance_from_full() {
        let s = IlluminationSample::new(0.9, 0.48).unwrap();
        assert_abs_diff_eq!(s.distance_from_full(), 0.02, epsilon = 1e-12);
    }
}
