//! The analytic moon illumination oracle.

use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use tracing::trace;

use lunacal_phase::{IlluminationSample, MoonOracle, OracleError};

use crate::julian::days_since_j2000;
use crate::position::{moon_coords, sun_coords};

/// Raw illumination geometry at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    /// Illuminated fraction of the disc (0..=1).
    pub fraction: f64,
    /// Phase age in [0, 1): 0 new, 0.5 full.
    pub phase: f64,
    /// Position angle of the bright limb's midpoint (radians), eastward from north.
    pub angle: f64,
}

/// Computes the moon's illumination at `at`.
pub fn illumination(at: DateTime<Utc>) -> Illumination {
    let d = days_since_j2000(at);
    let s = sun_coords(d);
    let m = moon_coords(d);

    // geocentric elongation of the moon from the sun
    let phi = (s.dec.sin() * m.dec.sin() + s.dec.cos() * m.dec.cos() * (s.ra - m.ra).cos())
        .clamp(-1.0, 1.0)
        .acos();
    // selenocentric elongation of the earth from the sun
    let inc = (s.dist * phi.sin()).atan2(m.dist - s.dist * phi.cos());
    let angle = (s.dec.cos() * (s.ra - m.ra).sin()).atan2(
        s.dec.sin() * m.dec.cos() - s.dec.cos() * m.dec.sin() * (s.ra - m.ra).cos(),
    );

    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    let mut phase = 0.5 + 0.5 * inc * sign / PI;
    if phase >= 1.0 {
        phase -= 1.0;
    }

    Illumination {
        fraction: ((1.0 + inc.cos()) / 2.0).clamp(0.0, 1.0),
        phase: phase.max(0.0),
        angle,
    }
}

/// Moon oracle backed by the analytic sun/moon model.
///
/// Stateless and infallible for any representable instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SunCalcOracle;

impl MoonOracle for SunCalcOracle {
    fn sample(&self, at: DateTime<Utc>) -> Result<IlluminationSample, OracleError> {
        let ill = illumination(at);
        trace!(%at, fraction = ill.fraction, phase = ill.phase, "moon sampled");
        IlluminationSample::new(ill.fraction, ill.phase)
            .map_err(|e| OracleError::new(at, e.to_string()))
    }
}
