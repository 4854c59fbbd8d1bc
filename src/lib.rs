//! CCK-8 cell viability from OD450 absorbance readings.
//!
//! Readings are grouped by treatment, groups with a wide spread lose their
//! minimum and maximum replicate, and each treatment is expressed as a
//! percentage of the blank-subtracted control signal.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use model::params::ViabilityParams;
pub use model::reading::{OdValue, Reading};
pub use model::result::{ResultRow, TreatmentResult, ViabilityReport};
pub use pipeline::{ViabilityError, run_viability};
