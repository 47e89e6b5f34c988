//! Static description of the property attributes the estimator collects.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier for one input attribute. The serialized form matches the
/// prediction service's payload keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    OverallQual,
    GrLivArea,
    GarageCars,
    TotalBsmtSf,
    FullBath,
    YearBuilt,
}

impl FieldKey {
    /// Presentation order, which is also the storage order inside `FormState`.
    pub const ALL: [FieldKey; 6] = [
        FieldKey::OverallQual,
        FieldKey::GrLivArea,
        FieldKey::GarageCars,
        FieldKey::TotalBsmtSf,
        FieldKey::FullBath,
        FieldKey::YearBuilt,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::OverallQual => "overall_qual",
            FieldKey::GrLivArea => "gr_liv_area",
            FieldKey::GarageCars => "garage_cars",
            FieldKey::TotalBsmtSf => "total_bsmt_sf",
            FieldKey::FullBath => "full_bath",
            FieldKey::YearBuilt => "year_built",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    pub fn field(&self) -> &'static Field {
        &FIELDS[self.index()]
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field key: {0}")]
pub struct UnknownFieldKey(pub String);

impl FromStr for FieldKey {
    type Err = UnknownFieldKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFieldKey(s.to_string()))
    }
}

/// Contract for one input attribute. All fields are integer-valued.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub key: FieldKey,
    pub label: &'static str,
    pub description: &'static str,
    /// Display unit, empty for plain counts and scores.
    pub unit: &'static str,
    pub min: i64,
    pub max: i64,
    /// Initial raw input. `None` renders as an empty input.
    pub default: Option<i64>,
}

pub static FIELDS: [Field; FieldKey::COUNT] = [
    Field {
        key: FieldKey::OverallQual,
        label: "Overall quality",
        description: "Material and finish quality, from 1 (very poor) to 10 (excellent).",
        unit: "",
        min: 1,
        max: 10,
        default: Some(5),
    },
    Field {
        key: FieldKey::GrLivArea,
        label: "Above-ground living area",
        description: "Finished living area above grade, excluding the basement.",
        unit: "sq ft",
        min: 300,
        max: 6000,
        default: None,
    },
    Field {
        key: FieldKey::GarageCars,
        label: "Garage capacity",
        description: "Number of cars the garage holds.",
        unit: "cars",
        min: 0,
        max: 4,
        default: None,
    },
    Field {
        key: FieldKey::TotalBsmtSf,
        label: "Basement area",
        description: "Total basement area, 0 when there is no basement.",
        unit: "sq ft",
        min: 0,
        max: 6500,
        default: None,
    },
    Field {
        key: FieldKey::FullBath,
        label: "Full bathrooms",
        description: "Full bathrooms above grade.",
        unit: "",
        min: 0,
        max: 4,
        default: None,
    },
    Field {
        key: FieldKey::YearBuilt,
        label: "Year built",
        description: "Original construction year.",
        unit: "",
        min: 1872,
        max: 2010,
        default: None,
    },
];

/// Ordered field configuration for whatever renders the inputs.
pub fn fields() -> &'static [Field] {
    &FIELDS
}

/// The distinguished score field, rendered as a slider.
pub fn overall_quality() -> &'static Field {
    FieldKey::OverallQual.field()
}

/// Raw input as typed by the user (text) or produced by a numeric control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Text(String::new())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(number) if number.fract() == 0.0 && number.is_finite() => {
                write!(f, "{}", *number as i64)
            }
            RawValue::Number(number) => write!(f, "{number}"),
            RawValue::Text(text) => f.write_str(text),
        }
    }
}

/// Why a raw input could not be normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldIssue {
    Missing,
    NotNumeric,
    NotInteger,
    BelowMin,
    AboveMax,
}

impl FieldIssue {
    pub fn describe(&self, field: &Field) -> String {
        match self {
            FieldIssue::Missing => "is required".to_string(),
            FieldIssue::NotNumeric => "must be a number".to_string(),
            FieldIssue::NotInteger => "must be a whole number".to_string(),
            FieldIssue::BelowMin => format!("must be at least {}", field.min),
            FieldIssue::AboveMax => format!("must be at most {}", field.max),
        }
    }
}

impl Field {
    /// Converts raw input into the field's integer domain.
    ///
    /// Out-of-range values are rejected rather than clamped, for every field.
    pub fn normalize(&self, raw: &RawValue) -> Result<i64, FieldIssue> {
        let number = match raw {
            RawValue::Number(number) => *number,
            RawValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(FieldIssue::Missing);
                }
                trimmed
                    .replace(',', "")
                    .parse::<f64>()
                    .map_err(|_| FieldIssue::NotNumeric)?
            }
        };

        if !number.is_finite() {
            return Err(FieldIssue::NotNumeric);
        }
        if number.fract() != 0.0 {
            return Err(FieldIssue::NotInteger);
        }
        if number < self.min as f64 {
            return Err(FieldIssue::BelowMin);
        }
        if number > self.max as f64 {
            return Err(FieldIssue::AboveMax);
        }

        Ok(number as i64)
    }

    /// Bound hint for input placeholders, e.g. `300–6000 sq ft`.
    pub fn range_hint(&self) -> String {
        if self.unit.is_empty() {
            format!("{}–{}", self.min, self.max)
        } else {
            format!("{}–{} {}", self.min, self.max, self.unit)
        }
    }

    pub fn default_raw(&self) -> RawValue {
        self.default
            .map(RawValue::from)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
