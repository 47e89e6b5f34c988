use std::collections::BTreeMap;

use super::fields::{FieldKey, RawValue};

/// Current raw value of every field, indexed by `FieldKey`.
///
/// Storage is a fixed array so a key can never be missing or duplicated.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    values: [RawValue; FieldKey::COUNT],
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: FieldKey::ALL.map(|key| key.field().default_raw()),
        }
    }
}

impl FormState {
    pub fn get(&self, key: FieldKey) -> &RawValue {
        &self.values[key.index()]
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<RawValue>) {
        self.values[key.index()] = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &RawValue)> {
        FieldKey::ALL.into_iter().zip(self.values.iter())
    }

    /// Snapshot used for persistence, keyed by wire name.
    pub fn to_inputs(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(key, value)| (key.as_str().to_string(), value.to_string()))
            .collect()
    }

    /// Rebuilds a form from persisted inputs. Unknown keys are ignored and
    /// absent keys keep their defaults. Fields with a default never load an
    /// invalid value.
    pub fn from_inputs(inputs: &BTreeMap<String, String>) -> Self {
        let mut form = Self::default();
        for (name, value) in inputs {
            let key = match name.parse::<FieldKey>() {
                Ok(key) => key,
                Err(err) => {
                    tracing::debug!(%err, "skipping persisted input");
                    continue;
                }
            };
            let raw = RawValue::from(value.as_str());
            let field = key.field();
            if field.default.is_some() {
                if let Err(issue) = field.normalize(&raw) {
                    tracing::debug!(field = %key, ?issue, "keeping default for persisted input");
                    continue;
                }
            }
            form.set(key, raw);
        }
        form
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
