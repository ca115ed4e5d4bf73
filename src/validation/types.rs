//! Measurement fields and loosely-typed input values.

use std::collections::HashMap;
use std::fmt;

/// Largest magnitude a measurement may take.
///
/// Equal to 2^53 - 1, the largest integer `f64` represents exactly.
/// Values above this bound would lose precision in volume arithmetic.
pub const MAX_SAFE_MAGNITUDE: f64 = 9_007_199_254_740_991.0;

/// Names the measurement being validated.
///
/// Used only in diagnostic text; carries no unit or ordering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Width,
    Height,
    Length,
    Mass,
}

impl Field {
    /// Returns the lowercase field name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Width => "width",
            Field::Height => "height",
            Field::Length => "length",
            Field::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measurement value as supplied by a loosely-typed caller.
///
/// Parsed CLI text and decoded JSON arrive here before any numeric
/// checks run. Only [`RawValue::Number`] can become a
/// [`Measurement`](super::Measurement); every other variant fails the
/// type check with a diagnostic naming its [`kind`](RawValue::kind).
///
/// With the `serde` feature, `RawValue` deserializes untagged from
/// arbitrary JSON, so whole documents flow straight into validation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawValue {
    /// Absent or explicitly-null value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Numeric value, the only variant that can pass validation.
    Number(f64),
    /// Textual value.
    Text(String),
    /// Sequence of values.
    List(Vec<RawValue>),
    /// String-keyed mapping.
    Map(HashMap<String, RawValue>),
}

impl RawValue {
    /// Returns the type category name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Number(_) => "number",
            RawValue::Text(_) => "text",
            RawValue::List(_) => "list",
            RawValue::Map(_) => "map",
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_owned())
    }
}
