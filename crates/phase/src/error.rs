//! Error types for the lunacal-phase crate.

/// Error type for all fallible operations in the lunacal-phase crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhaseError {
    /// Returned when an illuminated fraction is not a finite value in [0, 1].
    #[error("illuminated fraction must be finite and in [0, 1], got {fraction}")]
    InvalidFraction {
        /// The invalid fraction.
        fraction: f64,
    },

    /// Returned when a phase age is not a finite value in [0, 1).
    #[error("phase age must be finite and in [0, 1), got {phase_age}")]
    InvalidPhaseAge {
        /// The invalid phase age.
        phase_age: f64,
    },

    /// Returned when a phase index is outside 0..8.
    #[error("invalid phase index: {index} (must be 0..8)")]
    InvalidPhaseIndex {
        /// The invalid index.
        index: usize,
    },

    /// Returned when a phase key does not name one of the eight phases.
    #[error("unknown phase key: {key:?}")]
    UnknownPhaseKey {
        /// The unrecognized key.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            PhaseError::InvalidFraction { fraction: 1.5 }.to_string(),
            "illuminated fraction must be finite and in [0, 1], got 1.5"
        );
        assert_eq!(
            PhaseError::InvalidPhaseAge { phase_age: 1.0 }.to_string(),
            "phase age must be finite and in [0, 1), got 1"
        );
        assert_eq!(
            PhaseError::InvalidPhaseIndex { index: 8 }.to_string(),
            "invalid phase index: 8 (must be 0..8)"
        );
        assert_eq!(
            PhaseError::UnknownPhaseKey {
                key: "blue".to_string()
            }
            .to_string(),
            "unknown phase key: \"blue\""
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<PhaseError>();
    }
}
