use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::currency::{CurrencyPresenter, CurrencySelection};
use super::form::FormState;
use crate::config::{ConfigError, ServiceSettings, SettingsOverrides};

/// Session-wide UI state shared through context. The form and outcome are not
/// here: they belong to the estimate page's controller.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub currency: CurrencySelection,
    /// Effective settings: `overrides` layered over `base_settings`.
    pub settings: ServiceSettings,
    /// Settings derived from the environment at startup.
    pub base_settings: ServiceSettings,
    pub overrides: SettingsOverrides,
    /// Raw inputs from the last time the estimate page was open.
    pub saved_inputs: BTreeMap<String, String>,
}

impl AppState {
    pub fn new(settings: ServiceSettings) -> Self {
        Self {
            base_settings: settings.clone(),
            settings,
            ..Self::default()
        }
    }

    /// Keeps whatever in `applied` differs from the environment as a
    /// persisted override.
    pub fn apply_settings(&mut self, applied: &ServiceSettings) -> Result<(), ConfigError> {
        self.set_overrides(SettingsOverrides::between(&self.base_settings, applied))
    }

    pub fn clear_overrides(&mut self) {
        self.overrides = SettingsOverrides::default();
        self.settings = self.base_settings.clone();
    }

    fn set_overrides(&mut self, overrides: SettingsOverrides) -> Result<(), ConfigError> {
        self.settings = overrides.layer_over(&self.base_settings)?;
        self.overrides = overrides;
        Ok(())
    }

    pub fn presenter(&self) -> CurrencyPresenter {
        CurrencyPresenter::new(self.settings.secondary_rate)
    }

    pub fn saved_form(&self) -> FormState {
        FormState::from_inputs(&self.saved_inputs)
    }

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.currency = persisted.currency;
        self.saved_inputs = persisted.inputs;
        if let Err(err) = self.set_overrides(persisted.overrides) {
            tracing::warn!(%err, "ignoring persisted service settings");
        }
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            currency: self.currency,
            overrides: self.overrides.clone(),
            inputs: self.saved_inputs.clone(),
        }
    }
}

/// User preferences written to disk. Estimates are never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub currency: CurrencySelection,
    #[serde(default)]
    pub overrides: SettingsOverrides,
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
}

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;
