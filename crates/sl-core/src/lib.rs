//! sl-core: stable foundation for starlabel.
//!
//! Contains:
//! - ids (compact vertex identifiers)
//! - params (immutable graph family configuration)
//! - timing (wall-clock measurement of construction runs)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod params;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SlError, SlResult};
pub use ids::*;
pub use params::{Family, StarParams};
