//! The decision rule.

use tracing::trace;

use super::types::{Category, PackageSpec};
use crate::validation::{Field, Measurement, RawValue, ValidationError};

/// A single dimension at or above this limit makes the package bulky (cm).
pub const DIMENSION_LIMIT_CM: f64 = 150.0;

/// A volume at or above this limit makes the package bulky (cm³).
pub const VOLUME_LIMIT_CM3: f64 = 1_000_000.0;

/// A mass at or above this limit makes the package heavy (kg).
pub const MASS_LIMIT_KG: f64 = 20.0;

impl PackageSpec {
    /// Whether the package is bulky.
    ///
    /// The volume is always computed, even when a single dimension is
    /// already at its limit, so the flag does not depend on the order
    /// the criteria are listed in.
    pub fn is_bulky(&self) -> bool {
        let volume = self.volume();
        volume >= VOLUME_LIMIT_CM3
            || self.width() >= DIMENSION_LIMIT_CM
            || self.height() >= DIMENSION_LIMIT_CM
            || self.length() >= DIMENSION_LIMIT_CM
    }

    /// Whether the package is heavy.
    pub fn is_heavy(&self) -> bool {
        self.mass() >= MASS_LIMIT_KG
    }

    /// Applies the decision table.
    ///
    /// Infallible: the measurements were validated at construction, and
    /// every (bulky, heavy) combination maps to a category.
    pub fn category(&self) -> Category {
        let bulky = self.is_bulky();
        let heavy = self.is_heavy();
        let category = match (bulky, heavy) {
            (false, false) => Category::Standard,
            (true, false) | (false, true) => Category::Special,
            (true, true) => Category::Rejected,
        };
        trace!(
            volume = self.volume(),
            bulky,
            heavy,
            category = category.as_str(),
            "package classified"
        );
        category
    }
}

/// Classifies a package from four numeric measurements.
///
/// Validates width, height, length, and mass in that order; the first
/// offending field aborts the call and its failure is returned
/// unmodified. On success the category is a pure function of the
/// inputs.
///
/// # Examples
///
/// ```
/// use u_parcel::classification::{classify, Category};
/// use u_parcel::validation::Field;
///
/// assert_eq!(classify(30.0, 20.0, 10.0, 4.5), Ok(Category::Standard));
/// assert_eq!(classify(150.0, 20.0, 10.0, 25.0), Ok(Category::Rejected));
///
/// let err = classify(-1.0, 20.0, 10.0, 4.5).unwrap_err();
/// assert_eq!(err.field(), Field::Width);
/// ```
pub fn classify(
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
) -> Result<Category, ValidationError> {
    let width = Measurement::new(Field::Width, width)?;
    let height = Measurement::new(Field::Height, height)?;
    let length = Measurement::new(Field::Length, length)?;
    let mass = Measurement::new(Field::Mass, mass)?;
    Ok(PackageSpec::new(width, height, length, mass).category())
}

/// Classifies a package from four loosely-typed measurements.
///
/// Same contract as [`classify`], with the type check in front: CLI
/// text and decoded JSON go through here so a non-numeric value is
/// reported as a type mismatch naming the field.
pub fn classify_raw(
    width: &RawValue,
    height: &RawValue,
    length: &RawValue,
    mass: &RawValue,
) -> Result<Category, ValidationError> {
    let width = Measurement::from_raw(Field::Width, width)?;
    let height = Measurement::from_raw(Field::Height, height)?;
    let length = Measurement::from_raw(Field::Length, length)?;
    let mass = Measurement::from_raw(Field::Mass, mass)?;
    Ok(PackageSpec::new(width, height, length, mass).category())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_when_neither_bulky_nor_heavy() {
        assert_eq!(classify(30.0, 20.0, 10.0, 4.5), Ok(Category::Standard));
        assert_eq!(classify(1.0, 1.0, 1.0, 0.001), Ok(Category::Standard));
    }

    #[test]
    fn test_special_when_bulky_only() {
        // Via a single dimension.
        assert_eq!(classify(150.0, 1.0, 1.0, 1.0), Ok(Category::Special));
        assert_eq!(classify(1.0, 150.0, 1.0, 1.0), Ok(Category::Special));
        assert_eq!(classify(1.0, 1.0, 150.0, 1.0), Ok(Category::Special));
        // Via volume alone, with every dimension under its own limit.
        assert_eq!(classify(100.0, 100.0, 100.0, 1.0), Ok(Category::Special));
    }

    #[test]
    fn test_special_when_heavy_only() {
        assert_eq!(classify(1.0, 1.0, 1.0, 20.0), Ok(Category::Special));
        assert_eq!(classify(1.0, 1.0, 1.0, 500.0), Ok(Category::Special));
    }

    #[test]
    fn test_rejected_when_bulky_and_heavy() {
        assert_eq!(classify(150.0, 150.0, 150.0, 20.0), Ok(Category::Rejected));
        // Bulky via one dimension, heavy via mass.
        assert_eq!(classify(150.0, 1.0, 1.0, 20.0), Ok(Category::Rejected));
        // Bulky via volume, heavy via mass.
        assert_eq!(classify(100.0, 100.0, 100.0, 20.0), Ok(Category::Rejected));
    }

    #[test]
    fn test_dimension_limit_is_inclusive() {
        assert_eq!(classify(150.0, 1.0, 1.0, 1.0), Ok(Category::Special));
        assert_eq!(classify(149.99, 1.0, 1.0, 1.0), Ok(Category::Standard));
    }

    #[test]
    fn test_mass_limit_is_inclusive() {
        assert_eq!(classify(1.0, 1.0, 1.0, 20.0), Ok(Category::Special));
        assert_eq!(classify(1.0, 1.0, 1.0, 19.99), Ok(Category::Standard));
    }

    #[test]
    fn test_volume_limit_is_inclusive() {
        // Exactly 1,000,000 cm³.
        assert_eq!(classify(100.0, 100.0, 100.0, 1.0), Ok(Category::Special));
        assert_eq!(classify(99.99, 100.0, 100.0, 1.0), Ok(Category::Standard));
    }

    #[test]
    fn test_first_offending_field_wins() {
        // A bad width is reported even when the other fields are fine.
        let err = classify(-1.0, 50.0, 50.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotPositive {
                field: Field::Width,
                value: -1.0
            }
        );

        // Every field is invalid; width is checked first and reported.
        let err = classify(-1.0, f64::NAN, 0.0, -5.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotPositive {
                field: Field::Width,
                value: -1.0
            }
        );

        // Width is valid, so height is the first reported.
        let err = classify(50.0, f64::NAN, 0.0, -5.0).unwrap_err();
        assert_eq!(err.field(), Field::Height);

        // Only the last field is invalid.
        let err = classify(50.0, 50.0, 50.0, 0.0).unwrap_err();
        assert_eq!(err.field(), Field::Mass);
    }

    #[test]
    fn test_each_failure_kind_is_reachable() {
        let err = classify_raw(
            &RawValue::from("wide"),
            &RawValue::Number(1.0),
            &RawValue::Number(1.0),
            &RawValue::Number(1.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::TypeMismatch {
                field: Field::Width,
                kind: "text"
            }
        );

        let err = classify(f64::INFINITY, 1.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { .. }));

        let err = classify(1.0, 1.0, 1.0, -2.0).unwrap_err();
        assert!(matches!(err, ValidationError::NotPositive { .. }));

        let err = classify(9_007_199_254_740_993.0, 1.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, ValidationError::TooLarge { field: Field::Width });
    }

    #[test]
    fn test_validation_failure_preempts_classification() {
        // An invalid mass aborts even when the dimensions alone would
        // already decide the category.
        let err = classify(150.0, 150.0, 150.0, f64::NAN).unwrap_err();
        assert_eq!(err.field(), Field::Mass);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let first = classify(120.0, 80.0, 110.0, 19.0);
        let second = classify(120.0, 80.0, 110.0, 19.0);
        assert_eq!(first, second);
        assert_eq!(first, Ok(Category::Special));
    }

    #[test]
    fn test_classify_raw_matches_classify() {
        let raw = classify_raw(
            &RawValue::Number(150.0),
            &RawValue::Number(1.0),
            &RawValue::Number(1.0),
            &RawValue::Number(20.0),
        );
        assert_eq!(raw, classify(150.0, 1.0, 1.0, 20.0));
    }

    #[test]
    fn test_predicates_expose_the_flags() {
        let spec = PackageSpec::new(
            Measurement::new(Field::Width, 150.0).unwrap(),
            Measurement::new(Field::Height, 1.0).unwrap(),
            Measurement::new(Field::Length, 1.0).unwrap(),
            Measurement::new(Field::Mass, 1.0).unwrap(),
        );
        assert!(spec.is_bulky());
        assert!(!spec.is_heavy());
        assert_eq!(spec.category(), Category::Special);
    }
}
