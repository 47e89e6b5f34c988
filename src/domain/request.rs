use serde::Serialize;

use super::fields::{FieldIssue, FieldKey};
use super::form::FormState;

/// Validated snapshot of the form, serialized as the `/predict` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    pub overall_qual: i64,
    pub gr_liv_area: i64,
    pub garage_cars: i64,
    pub total_bsmt_sf: i64,
    pub full_bath: i64,
    pub year_built: i64,
}

impl PredictionRequest {
    pub fn value(&self, key: FieldKey) -> i64 {
        match key {
            FieldKey::OverallQual => self.overall_qual,
            FieldKey::GrLivArea => self.gr_liv_area,
            FieldKey::GarageCars => self.garage_cars,
            FieldKey::TotalBsmtSf => self.total_bsmt_sf,
            FieldKey::FullBath => self.full_bath,
            FieldKey::YearBuilt => self.year_built,
        }
    }
}

/// One or more fields could not be normalized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<(FieldKey, FieldIssue)>,
}

impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.issues.iter().map(|(key, _)| *key)
    }

    pub fn issue(&self, key: FieldKey) -> Option<FieldIssue> {
        self.issues
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, issue)| *issue)
    }
}

/// User-facing text naming every offending field by label.
fn summarize(issues: &[(FieldKey, FieldIssue)]) -> String {
    let parts = issues
        .iter()
        .map(|(key, issue)| {
            let field = key.field();
            format!("{} {}", field.label, issue.describe(field))
        })
        .collect::<Vec<_>>();
    format!("Please check your inputs: {}.", parts.join("; "))
}

impl TryFrom<&FormState> for PredictionRequest {
    type Error = ValidationError;

    fn try_from(form: &FormState) -> Result<Self, Self::Error> {
        let mut values = [0_i64; FieldKey::COUNT];
        let mut issues = Vec::new();

        for (key, raw) in form.iter() {
            match key.field().normalize(raw) {
                Ok(value) => values[key.index()] = value,
                Err(issue) => issues.push((key, issue)),
            }
        }

        if !issues.is_empty() {
            return Err(ValidationError { issues });
        }

        let [overall_qual, gr_liv_area, garage_cars, total_bsmt_sf, full_bath, year_built] =
            values;
        Ok(Self {
            overall_qual,
            gr_liv_area,
            garage_cars,
            total_bsmt_sf,
            full_bath,
            year_built,
        })
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod tests;
