//! # lunacal-phase
//!
//! Lunar phase vocabulary shared by the engine and its consumers: the
//! illumination sample produced by a moon oracle, the eight phase
//! categories, and the classifier that maps one to the other.
//!
//! The crate never produces display text. [`PhaseCategory`] values are
//! categorical; mapping them to localized names and images is the
//! consumer's job.
//!
//! # Quick start
//!
//! ```
//! use lunacal_phase::{IlluminationSample, PhaseCategory, classify};
//!
//! assert_eq!(classify(50.0, 0.25), PhaseCategory::FirstQuarter);
//! assert_eq!(classify(30.0, 0.9), PhaseCategory::WaningCrescent);
//!
//! let sample = IlluminationSample::new(0.7234, 0.31).unwrap();
//! assert_eq!(sample.percent(), 72.3);
//! assert_eq!(sample.category(), PhaseCategory::WaxingGibbous);
//! ```
//!
//! # Oracles
//!
//! Anything that can turn an instant into an [`IlluminationSample`]
//! implements [`MoonOracle`]. Closures of the right shape implement it
//! directly, which keeps tests deterministic:
//!
//! ```
//! use chrono::{DateTime, Utc};
//! use lunacal_phase::{IlluminationSample, MoonOracle, OracleError};
//!
//! let always_full = |_at: DateTime<Utc>| -> Result<IlluminationSample, OracleError> {
//!     Ok(IlluminationSample::new(1.0, 0.5).unwrap())
//! };
//! let sample = always_full.sample(Utc::now()).unwrap();
//! assert_eq!(sample.percent(), 100.0);
//! ```

pub mod category;
pub mod error;
pub mod guide;
pub mod oracle;
pub mod sample;
pub mod shading;

pub use category::{PhaseCategory, classify};
pub use error::PhaseError;
pub use guide::PhaseGuide;
pub use oracle::{MoonOracle, OracleError};
pub use sample::{IlluminationSample, illumination_percent};
pub use shading::{Shading, ShadowSide};
