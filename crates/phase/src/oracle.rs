//! The moon illumination oracle contract.

use chrono::{DateTime, Utc};

use crate::sample::IlluminationSample;

/// Failure reported by an oracle for one instant.
///
/// Engines propagate this for the whole query instead of substituting a
/// default sample.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("moon oracle failed at {at}: {reason}")]
pub struct OracleError {
    at: DateTime<Utc>,
    reason: String,
}

impl OracleError {
    /// Creates an error for the instant `at`.
    pub fn new(at: DateTime<Utc>, reason: impl Into<String>) -> Self {
        Self {
            at,
            reason: reason.into(),
        }
    }

    /// Returns the instant that could not be sampled.
    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    /// Returns the reason given by the oracle.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A deterministic source of illumination samples.
///
/// Implementations must be pure: the same instant always yields the same
/// sample, and sampling has no side effects.
pub trait MoonOracle {
    /// Returns the illumination at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError`] if the instant cannot be sampled.
    fn sample(&self, at: DateTime<Utc>) -> Result<IlluminationSample, OracleError>;
}

impl<F> MoonOracle for F
where
    F: Fn(DateTime<Utc>) -> Result<IlluminationSample, OracleError>,
{
    fn sample(&self, at: DateTime<Utc>) -> Result<IlluminationSample, OracleError> {
        self(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 25, 12, 0, 0).unwrap()
    }

    #[test]
    fn closure_is_an_oracle() {
        let oracle = |t: DateTime<Utc>| {
            IlluminationSample::new(0.25, 0.1).map_err(|e| OracleError::new(t, e.to_string()))
        };
        let s = oracle.sample(at()).unwrap();
        assert_eq!(s.illuminated_fraction(), 0.25);
    }

    #[test]
    fn error_carries_instant_and_reason() {
        let err = OracleError::new(at(), "no ephemeris loaded");
        assert_eq!(err.at(), at());
        assert_eq!(err.reason(), "no ephemeris loaded");
        assert_eq!(
            err.to_string(),
            "moon oracle failed at 2024-01-25 12:00:00 UTC: no ephemeris loaded"
        );
    }

    #[test]
    fn trait_object_usable() {
        fn take(o: &dyn MoonOracle) -> f64 {
            o.sample(at()).unwrap().phase_age()
        }
        let oracle = |_: DateTime<Utc>| -> Result<IlluminationSample, OracleError> {
            Ok(IlluminationSample::new(1.0, 0.5).unwrap())
        };
        assert_eq!(take(&oracle), 0.5);
    }
}
