use super::*;

#[test]
fn default_form_holds_every_key_once() {
    let form = FormState::default();
    let keys: Vec<_> = form.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, FieldKey::ALL.to_vec());
    assert_eq!(form.get(FieldKey::OverallQual), &RawValue::Number(5.0));
    assert_eq!(form.get(FieldKey::YearBuilt), &RawValue::Text(String::new()));
}

#[test]
fn set_replaces_only_the_target_field() {
    let mut form = FormState::default();
    form.set(FieldKey::GarageCars, "2");
    form.set(FieldKey::GarageCars, 3_i64);

    assert_eq!(form.get(FieldKey::GarageCars), &RawValue::Number(3.0));
    assert_eq!(form.get(FieldKey::OverallQual), &RawValue::Number(5.0));
    assert_eq!(form.iter().count(), FieldKey::COUNT);
}

#[test]
fn inputs_restore_known_keys_and_ignore_the_rest() {
    let mut form = FormState::default();
    form.set(FieldKey::GrLivArea, "1710");
    form.set(FieldKey::YearBuilt, 2003_i64);

    let mut inputs = form.to_inputs();
    assert_eq!(inputs.get("year_built").map(String::as_str), Some("2003"));
    inputs.insert("pool_area".to_string(), "12".to_string());
    inputs.remove("garage_cars");

    let restored = FormState::from_inputs(&inputs);
    assert_eq!(restored.get(FieldKey::GrLivArea), &RawValue::from("1710"));
    assert_eq!(restored.get(FieldKey::YearBuilt), &RawValue::from("2003"));
    assert_eq!(restored.get(FieldKey::GarageCars), &RawValue::default());
}

#[test]
fn invalid_persisted_quality_keeps_its_default() {
    for saved in ["", "15", "great"] {
        let inputs = BTreeMap::from([("overall_qual".to_string(), saved.to_string())]);
        let restored = FormState::from_inputs(&inputs);
        assert_eq!(
            restored.get(FieldKey::OverallQual),
            &RawValue::Number(5.0),
            "saved value {saved:?}"
        );
    }

    let inputs = BTreeMap::from([("overall_qual".to_string(), "8".to_string())]);
    assert_eq!(
        FormState::from_inputs(&inputs).get(FieldKey::OverallQual),
        &RawValue::from("8")
    );
}
