//! Handling category decision rule.
//!
//! Combines two independent flags computed from a validated
//! [`PackageSpec`]:
//!
//! - **Bulky**: the volume reaches [`VOLUME_LIMIT_CM3`] or any single
//!   dimension reaches [`DIMENSION_LIMIT_CM`].
//! - **Heavy**: the mass reaches [`MASS_LIMIT_KG`].
//!
//! Neither flag set yields [`Category::Standard`], exactly one yields
//! [`Category::Special`], both yield [`Category::Rejected`]. All limit
//! comparisons are inclusive: a value exactly at a limit qualifies.
//!
//! The rule is pure and deterministic. Identical inputs always produce
//! the identical category, and nothing here performs I/O or touches
//! shared state.

mod engine;
mod types;

pub use engine::{classify, classify_raw, DIMENSION_LIMIT_CM, MASS_LIMIT_KG, VOLUME_LIMIT_CM3};
pub use types::{Category, PackageSpec};
