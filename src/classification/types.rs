//! Package description and handling categories.

use std::fmt;

use crate::validation::Measurement;

/// The handling category assigned to a package.
///
/// Renders as the literal strings `STANDARD`, `SPECIAL`, and `REJECTED`.
/// There is no ordering between categories; the decision table in the
/// engine is the whole contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Category {
    /// Neither bulky nor heavy; normal handling.
    Standard,
    /// Bulky or heavy, but not both; special handling.
    Special,
    /// Both bulky and heavy; cannot be handled.
    Rejected,
}

impl Category {
    /// Returns the category label.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package's validated measurements.
///
/// Dimensions are centimeters, mass is kilograms. Ephemeral by design:
/// built per classification call from four [`Measurement`]s, read, and
/// discarded. Carries no identity and cannot be mutated after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PackageSpec {
    width: Measurement,
    height: Measurement,
    length: Measurement,
    mass: Measurement,
}

impl PackageSpec {
    /// Builds a package description from validated measurements.
    pub fn new(
        width: Measurement,
        height: Measurement,
        length: Measurement,
        mass: Measurement,
    ) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    /// Width in centimeters.
    pub fn width(&self) -> f64 {
        self.width.get()
    }

    /// Height in centimeters.
    pub fn height(&self) -> f64 {
        self.height.get()
    }

    /// Length in centimeters.
    pub fn length(&self) -> f64 {
        self.length.get()
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass.get()
    }

    /// Volume in cubic centimeters.
    pub fn volume(&self) -> f64 {
        self.width() * self.height() * self.length()
    }
}
