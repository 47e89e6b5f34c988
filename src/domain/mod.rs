//! Estimator domain: field contract, form, submission state machine and
//! currency display.

pub mod app_state;
pub mod controller;
pub mod currency;
pub mod fields;
pub mod form;
pub mod outcome;
pub mod request;

pub use app_state::AppState;
pub use controller::RequestController;
pub use currency::{CurrencyPresenter, CurrencySelection};
pub use fields::{fields, overall_quality, FieldIssue, FieldKey, RawValue};
pub use outcome::PredictionOutcome;
pub use request::PredictionRequest;
