//! Validation failure taxonomy.

use super::types::Field;

/// Why a measurement was rejected.
///
/// All variants are of equal severity and none is recoverable inside the
/// classification rule: the first offending field aborts the whole call
/// and the failure propagates to the caller unmodified.
///
/// Variants derive `Clone` and `PartialEq` so tests can assert the exact
/// failure, not just that one occurred.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// The value is not numeric.
    #[error("{field} must be a number, got {kind}")]
    TypeMismatch {
        /// Field being validated.
        field: Field,
        /// Type category of the encountered value.
        kind: &'static str,
    },

    /// The value is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite {
        /// Field being validated.
        field: Field,
        /// The offending value.
        value: f64,
    },

    /// The value is zero or negative.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive {
        /// Field being validated.
        field: Field,
        /// The offending value.
        value: f64,
    },

    /// The value exceeds [`MAX_SAFE_MAGNITUDE`](super::MAX_SAFE_MAGNITUDE).
    ///
    /// The offending literal is not echoed; anything past the bound is
    /// unwieldy to print.
    #[error("{field} exceeds the maximum supported magnitude")]
    TooLarge {
        /// Field being validated.
        field: Field,
    },
}

impl ValidationError {
    /// Returns the field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::TypeMismatch { field, .. }
            | ValidationError::NotFinite { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::TooLarge { field } => *field,
        }
    }
}
