//! 범위 검증과 직렬화 경계 테스트.
use datarug::range::{BoundedRange, DoseRange, DurationRange, Range, RangeError, UnitRange};
use datarug::units::mass::{grams, mass, micrograms};
use datarug::units::time::minutes;
use datarug::units::{MassUnit, TimeUnit};

#[test]
fn inverted_bounds_are_rejected() {
    let err = DurationRange::new(Some(10), Some(5), TimeUnit::Minutes).unwrap_err();
    assert_eq!(
        err,
        RangeError::MinimumNotBelowMaximum {
            minimum: "10".to_string(),
            maximum: "5".to_string(),
        }
    );
    assert!(err.to_string().contains("min=10"));
}

#[test]
fn equal_bounds_are_rejected() {
    assert!(Range::new(Some(3), Some(3)).is_err());
    assert!(DoseRange::new(Some(1.0), Some(1.0), MassUnit::Grams).is_err());
}

#[test]
fn nan_bound_is_rejected() {
    assert!(Range::new(Some(f32::NAN), Some(1.0)).is_err());
}

#[test]
fn ordered_bounds_report_both() {
    let range = DurationRange::new(Some(5), Some(10), TimeUnit::Hours).unwrap();
    assert!(range.has_lower_bound());
    assert!(range.has_upper_bound());
    assert_eq!(range.minimum(), Some(5));
    assert_eq!(range.maximum(), Some(10));
    assert_eq!(range.unit(), TimeUnit::Hours);
}

#[test]
fn open_ranges_are_valid() {
    let upper_only = Range::new(None, Some(10)).unwrap();
    assert!(!upper_only.has_lower_bound());
    assert!(upper_only.has_upper_bound());

    let lower_only = UnitRange::new(Some(10.0_f32), None, MassUnit::Milligrams).unwrap();
    assert!(lower_only.has_lower_bound());
    assert!(!lower_only.has_upper_bound());

    let open = Range::<i32>::unbounded();
    assert!(!open.has_lower_bound() && !open.has_upper_bound());
    assert!(open.contains(&i32::MIN));
}

#[test]
fn contains_is_inclusive() {
    let range = Range::new(Some(5), Some(10)).unwrap();
    assert!(range.contains(&5));
    assert!(range.contains(&10));
    assert!(!range.contains(&4));
    assert!(!range.contains(&11));

    let upper_only = Range::new(None, Some(10)).unwrap();
    assert!(upper_only.contains(&-1000));
}

#[test]
fn bounds_as_quantities() {
    let dose = DoseRange::new(Some(10.0), Some(25.0), MassUnit::Milligrams).unwrap();
    let min = dose.min_quantity();
    assert_eq!(min.value(), Some(10.0));
    assert_eq!(min.unit(), MassUnit::Milligrams);
    assert_eq!(dose.max_quantity().value(), Some(25.0));

    let open = DoseRange::new(None, Some(25.0), MassUnit::Milligrams).unwrap();
    assert!(!open.min_quantity().is_present());
    assert_eq!(open.min_quantity().unit(), MassUnit::Milligrams);
    assert_eq!(open.bounds(), Range::new(None, Some(25.0)).unwrap());
}

#[test]
fn contains_quantity_converts_first() {
    let dose = DoseRange::new(Some(10.0), Some(25.0), MassUnit::Milligrams).unwrap();
    assert!(dose.contains_quantity(micrograms(15_000.0)));
    assert!(!dose.contains_quantity(grams(1.0)));
    assert!(!dose.contains_quantity(mass(None, MassUnit::Milligrams)));
    assert!(!dose.contains_quantity(mass(Some(12.0), MassUnit::Undefined)));

    let duration = DurationRange::new(Some(2), Some(4), TimeUnit::Hours).unwrap();
    assert!(duration.contains_quantity(minutes(180)));
}

#[test]
fn serializes_min_max_unit() {
    let dose = DoseRange::new(Some(10.0), None, MassUnit::Milligrams).unwrap();
    let json = serde_json::to_value(dose).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "min": 10.0, "max": null, "unit": "Milligrams" })
    );

    let range = Range::new(None, Some(3)).unwrap();
    assert_eq!(
        serde_json::to_value(range).unwrap(),
        serde_json::json!({ "min": null, "max": 3 })
    );
}

#[test]
fn deserializes_with_validation() {
    let duration: DurationRange =
        serde_json::from_str(r#"{ "min": 4, "max": 6, "unit": "Hours" }"#).unwrap();
    assert_eq!(duration, DurationRange::new(Some(4), Some(6), TimeUnit::Hours).unwrap());

    let open: DurationRange =
        serde_json::from_str(r#"{ "min": null, "max": 6, "unit": "Days" }"#).unwrap();
    assert!(!open.has_lower_bound());

    let inverted = serde_json::from_str::<DurationRange>(r#"{ "min": 6, "max": 4, "unit": "Hours" }"#);
    assert!(inverted.is_err());

    let missing_unit = serde_json::from_str::<DurationRange>(r#"{ "min": 1, "max": 2 }"#);
    assert!(missing_unit.is_err());

    let range: Range<i32> = serde_json::from_str(r#"{ "min": 1, "max": null }"#).unwrap();
    assert_eq!(range, Range::new(Some(1), None).unwrap());
}
