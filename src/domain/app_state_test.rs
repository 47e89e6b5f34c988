use super::*;
use crate::domain::fields::{FieldKey, RawValue};

fn settings_at(base_url: &str) -> ServiceSettings {
    ServiceSettings {
        base_url: base_url.to_string(),
        ..ServiceSettings::default()
    }
}

#[test]
fn persisted_state_round_trips_preferences() {
    let mut state = AppState::default();
    state.currency = CurrencySelection::Secondary;
    let applied = ServiceSettings {
        secondary_rate: 90.0,
        ..state.settings.clone()
    };
    state.apply_settings(&applied).expect("valid settings");
    state
        .saved_inputs
        .insert("gr_liv_area".to_string(), "1710".to_string());

    let json = serde_json::to_string(&state.to_persisted()).expect("serialize");
    let persisted: PersistedState = serde_json::from_str(&json).expect("deserialize");

    let mut restored = AppState::default();
    restored.apply_persisted(persisted);
    assert_eq!(restored.currency, CurrencySelection::Secondary);
    assert_eq!(restored.presenter().secondary_rate(), 90.0);
    assert_eq!(
        restored.saved_form().get(FieldKey::GrLivArea),
        &RawValue::from("1710")
    );
}

#[test]
fn older_files_without_optional_sections_still_load() {
    let persisted: PersistedState = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(persisted, PersistedState::default());
}

#[test]
fn saved_preferences_do_not_pin_environment_settings() {
    let first_run = AppState::new(ServiceSettings::default()).to_persisted();

    let mut next_run = AppState::new(settings_at("https://prod.example.com/"));
    next_run.apply_persisted(first_run);
    assert_eq!(next_run.settings.base_url, "https://prod.example.com/");
}

#[test]
fn applied_overrides_layer_over_a_changed_environment() {
    let mut first_run = AppState::new(ServiceSettings::default());
    let applied = ServiceSettings {
        secondary_rate: 88.5,
        ..first_run.settings.clone()
    };
    first_run.apply_settings(&applied).expect("valid settings");
    let persisted = first_run.to_persisted();
    assert_eq!(persisted.overrides.base_url, None);

    let mut next_run = AppState::new(settings_at("https://prod.example.com/"));
    next_run.apply_persisted(persisted);
    assert_eq!(next_run.settings.base_url, "https://prod.example.com/");
    assert_eq!(next_run.settings.secondary_rate, 88.5);

    next_run.clear_overrides();
    assert_eq!(next_run.settings, settings_at("https://prod.example.com/"));
    assert!(next_run.to_persisted().overrides.is_empty());
}

#[test]
fn invalid_persisted_overrides_are_ignored() {
    let mut state = AppState::default();
    state.apply_persisted(PersistedState {
        overrides: SettingsOverrides {
            base_url: Some("not a url".to_string()),
            ..SettingsOverrides::default()
        },
        ..PersistedState::default()
    });
    assert_eq!(state.settings, ServiceSettings::default());
    assert!(state.overrides.is_empty());
}
