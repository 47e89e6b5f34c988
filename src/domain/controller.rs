//! Submission state machine: `Idle → Pending → Succeeded | Failed`.
//!
//! The controller owns the form and the outcome. A submission is split around
//! its only suspension point so UI code can keep the controller in a signal:
//! `begin_submit` snapshots the form into a `PredictionRequest`, the caller
//! performs the call, and `settle` applies the result if it is still current.

use super::fields::{FieldKey, RawValue};
use super::form::FormState;
use super::outcome::PredictionOutcome;
use super::request::PredictionRequest;
use crate::infra::predict::{PredictionService, TransportError};

/// Shown for every transport failure; the cause only goes to the log.
pub const FAILURE_MESSAGE: &str = "We couldn't get an estimate right now. Please try again.";

/// Identifies one dispatched request. Results carrying an older ticket are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    pub ticket: Ticket,
    pub request: PredictionRequest,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestController {
    form: FormState,
    outcome: PredictionOutcome,
    generation: u64,
}

impl RequestController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: FormState) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn outcome(&self) -> &PredictionOutcome {
        &self.outcome
    }

    /// Updates one field. A displayed error is cleared; a pending request is left alone.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<RawValue>) {
        self.form.set(key, value);
        if matches!(self.outcome, PredictionOutcome::Failed(_)) {
            self.outcome = PredictionOutcome::Idle;
        }
    }

    /// Restores every field default. The outcome returns to `Idle` unless a
    /// request is in flight.
    pub fn reset_form(&mut self) {
        for key in FieldKey::ALL {
            self.set_field(key, key.field().default_raw());
        }
        if !self.outcome.is_pending() {
            self.outcome = PredictionOutcome::Idle;
        }
    }

    /// Starts a submission.
    ///
    /// Returns `None` when a request is already pending (the call is ignored)
    /// or when the form fails validation (the outcome becomes `Failed`).
    pub fn begin_submit(&mut self) -> Option<Dispatch> {
        if self.outcome.is_pending() {
            tracing::debug!("submission ignored; request already pending");
            return None;
        }

        self.generation += 1;
        self.outcome = PredictionOutcome::Pending;

        match PredictionRequest::try_from(&self.form) {
            Ok(request) => Some(Dispatch {
                ticket: Ticket(self.generation),
                request,
            }),
            Err(err) => {
                tracing::info!(fields = ?err.fields().collect::<Vec<_>>(), "form rejected");
                self.outcome = PredictionOutcome::Failed(err.to_string());
                None
            }
        }
    }

    /// Applies a finished call. Returns `false` if the ticket is stale and the
    /// result was discarded.
    pub fn settle(&mut self, ticket: Ticket, result: Result<f64, TransportError>) -> bool {
        if ticket.0 != self.generation || !self.outcome.is_pending() {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale prediction result"
            );
            return false;
        }

        self.outcome = match result {
            Ok(value) => PredictionOutcome::Succeeded(value),
            Err(err) => {
                tracing::warn!(error = %err, "prediction request failed");
                PredictionOutcome::Failed(FAILURE_MESSAGE.to_string())
            }
        };
        true
    }

    /// Abandons the in-flight request, if any. Its result will be discarded.
    pub fn cancel(&mut self) -> bool {
        if !self.outcome.is_pending() {
            return false;
        }
        self.generation += 1;
        self.outcome = PredictionOutcome::Idle;
        true
    }

    /// Runs a full submission against `service`.
    pub async fn submit<S>(&mut self, service: &S)
    where
        S: PredictionService + ?Sized,
    {
        let Some(dispatch) = self.begin_submit() else {
            return;
        };
        let result = service.predict(&dispatch.request).await;
        self.settle(dispatch.ticket, result);
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
