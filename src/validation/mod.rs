//! Input validation for package measurements.
//!
//! Every measurement entering the classification rule passes through the
//! same four checks, in a fixed order, stopping at the first failure:
//!
//! - **Type**: the value must be numeric. Loosely-typed callers (CLI
//!   text, decoded JSON) supply a [`RawValue`]; statically-typed callers
//!   discharge this check at compile time.
//! - **Finiteness**: NaN and infinities are rejected.
//! - **Positivity**: zero and negative values are rejected.
//! - **Magnitude**: values above [`MAX_SAFE_MAGNITUDE`] are rejected to
//!   keep downstream volume arithmetic exact.
//!
//! A value that passes all four checks becomes a [`Measurement`], the
//! only currency the classification engine accepts.

mod error;
mod measurement;
mod types;

pub use error::ValidationError;
pub use measurement::Measurement;
pub use types::{Field, RawValue, MAX_SAFE_MAGNITUDE};
