use super::*;

#[test]
fn every_key_maps_to_its_own_field() {
    for key in FieldKey::ALL {
        assert_eq!(key.field().key, key);
    }
    assert_eq!(fields().len(), FieldKey::COUNT);
}

#[test]
fn keys_round_trip_through_wire_names() {
    for key in FieldKey::ALL {
        assert_eq!(key.as_str().parse::<FieldKey>(), Ok(key));
    }
    assert_eq!(
        "lot_area".parse::<FieldKey>(),
        Err(UnknownFieldKey("lot_area".to_string()))
    );
}

#[test]
fn overall_quality_has_valid_default() {
    let field = overall_quality();
    assert_eq!((field.min, field.max), (1, 10));
    assert_eq!(field.normalize(&field.default_raw()), Ok(5));
}

#[test]
fn normalize_accepts_text_and_numbers() {
    let field = FieldKey::GrLivArea.field();
    assert_eq!(field.normalize(&RawValue::from(" 1500 ")), Ok(1500));
    assert_eq!(field.normalize(&RawValue::from("1,500")), Ok(1500));
    assert_eq!(field.normalize(&RawValue::from(1500.0)), Ok(1500));
    assert_eq!(field.normalize(&RawValue::from("1500.0")), Ok(1500));
}

#[test]
fn normalize_flags_unusable_input() {
    let field = FieldKey::GarageCars.field();
    assert_eq!(field.normalize(&RawValue::from("")), Err(FieldIssue::Missing));
    assert_eq!(field.normalize(&RawValue::from("   ")), Err(FieldIssue::Missing));
    assert_eq!(field.normalize(&RawValue::from("two")), Err(FieldIssue::NotNumeric));
    assert_eq!(field.normalize(&RawValue::from(f64::NAN)), Err(FieldIssue::NotNumeric));
    assert_eq!(
        field.normalize(&RawValue::from(f64::INFINITY)),
        Err(FieldIssue::NotNumeric)
    );
    assert_eq!(field.normalize(&RawValue::from("1.5")), Err(FieldIssue::NotInteger));
}

#[test]
fn bounds_are_inclusive_and_rejected_one_unit_outside() {
    for field in fields() {
        assert_eq!(field.normalize(&RawValue::from(field.min)), Ok(field.min));
        assert_eq!(field.normalize(&RawValue::from(field.max)), Ok(field.max));
        assert_eq!(
            field.normalize(&RawValue::from(field.min - 1)),
            Err(FieldIssue::BelowMin),
            "{}",
            field.key
        );
        assert_eq!(
            field.normalize(&RawValue::from(field.max + 1)),
            Err(FieldIssue::AboveMax),
            "{}",
            field.key
        );
    }
}

#[test]
fn range_hint_includes_unit_when_present() {
    assert_eq!(FieldKey::GrLivArea.field().range_hint(), "300–6000 sq ft");
    assert_eq!(FieldKey::YearBuilt.field().range_hint(), "1872–2010");
}

#[test]
fn raw_value_display_drops_integral_fraction() {
    assert_eq!(RawValue::from(1998.0).to_string(), "1998");
    assert_eq!(RawValue::from(2.5).to_string(), "2.5");
    assert_eq!(RawValue::from("abc").to_string(), "abc");
}
