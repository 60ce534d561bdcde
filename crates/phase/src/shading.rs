//! Shadow overlay geometry for drawing a partially lit disc.

use serde::Serialize;

use crate::category::WANING_FROM_AGE;

/// The edge of the disc the shadow is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowSide {
    /// Shadow anchored on the left edge (waxing half of the cycle).
    Left,
    /// Shadow anchored on the right edge (waning half of the cycle).
    Right,
}

/// How much of the disc to darken and from which side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shading {
    /// Dark share of the disc, `100 - illumination_percent`.
    pub dark_percent: f64,
    /// Edge the shadow grows from.
    pub side: ShadowSide,
}

impl Shading {
    /// Derives the overlay from a rounded illumination percent and a phase age.
    pub fn new(illumination_percent: f64, phase_age: f64) -> Self {
        let side = if phase_age < WANING_FROM_AGE {
            ShadowSide::Left
        } else {
            ShadowSide::Right
        };
        Self {
            dark_percent: (100.0 - illumination_percent).clamp(0.0, 100.0),
            side,
        }
    }
}
