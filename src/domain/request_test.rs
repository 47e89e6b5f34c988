use super::*;

fn filled_form() -> FormState {
    let mut form = FormState::default();
    form.set(FieldKey::OverallQual, 7_i64);
    form.set(FieldKey::GrLivArea, "1710");
    form.set(FieldKey::GarageCars, "2");
    form.set(FieldKey::TotalBsmtSf, "856");
    form.set(FieldKey::FullBath, "2");
    form.set(FieldKey::YearBuilt, "2003");
    form
}

#[test]
fn valid_form_builds_request_with_all_six_values() {
    let request = PredictionRequest::try_from(&filled_form()).expect("valid form");
    assert_eq!(
        request,
        PredictionRequest {
            overall_qual: 7,
            gr_liv_area: 1710,
            garage_cars: 2,
            total_bsmt_sf: 856,
            full_bath: 2,
            year_built: 2003,
        }
    );
    assert_eq!(request.value(FieldKey::TotalBsmtSf), 856);
}

#[test]
fn request_serializes_with_wire_keys() {
    let request = PredictionRequest::try_from(&filled_form()).expect("valid form");
    let json = serde_json::to_value(&request).expect("serialize");
    for key in FieldKey::ALL {
        assert_eq!(json[key.as_str()], serde_json::json!(request.value(key)));
    }
    assert_eq!(json.as_object().map(|obj| obj.len()), Some(6));
}

#[test]
fn invalid_fields_are_all_named() {
    let mut form = filled_form();
    form.set(FieldKey::GrLivArea, "");
    form.set(FieldKey::YearBuilt, "1700");
    form.set(FieldKey::GarageCars, "lots");

    let err = PredictionRequest::try_from(&form).expect_err("invalid form");
    let fields: Vec<_> = err.fields().collect();
    assert_eq!(
        fields,
        vec![FieldKey::GrLivArea, FieldKey::GarageCars, FieldKey::YearBuilt]
    );
    assert_eq!(err.issue(FieldKey::YearBuilt), Some(FieldIssue::BelowMin));
    assert_eq!(err.issue(FieldKey::FullBath), None);

    let message = err.to_string();
    assert!(message.contains("Above-ground living area is required"));
    assert!(message.contains("Garage capacity must be a number"));
    assert!(message.contains("Year built must be at least 1872"));
}
