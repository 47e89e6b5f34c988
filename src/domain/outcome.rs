/// What the estimate panel should show for the latest submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PredictionOutcome {
    #[default]
    Idle,
    Pending,
    Succeeded(f64),
    Failed(String),
}

impl PredictionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, PredictionOutcome::Pending)
    }

    /// Raw estimate, present only after a successful response. A prediction
    /// of exactly zero is still a result.
    pub fn value(&self) -> Option<f64> {
        match self {
            PredictionOutcome::Succeeded(value) => Some(*value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PredictionOutcome::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}
