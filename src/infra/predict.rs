//! Thin asynchronous client for the house price prediction service.
//!
//! - `POST /predict` with the six-field payload, answered by `{predicted_price}`.
//! - `GET /` health probe answered by `{status}`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::config::{ConfigError, ServiceSettings};
use crate::domain::PredictionRequest;
use crate::util::version::user_agent;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request timed out")]
    Timeout,
    #[error("http request error: {0}")]
    Http(reqwest::Error),
    #[error("service responded with status {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status(status)
        } else {
            TransportError::Http(err)
        }
    }
}

/// Anything that can turn a validated request into a raw estimate.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, TransportError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct PredictionDto {
    predicted_price: f64,
}

#[derive(Clone)]
pub struct PredictionClient {
    http: Client,
    base_url: Url,
}

impl PredictionClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self, TransportError> {
        let base_url = settings.service_url()?;
        let http = Client::builder()
            .user_agent(user_agent())
            .timeout(settings.request_timeout())
            .connect_timeout(settings.connect_timeout())
            .build()?;
        Ok(Self { http, base_url })
    }

    pub async fn health(&self) -> Result<ServiceStatus, TransportError> {
        let url = self.base_url.clone();
        tracing::debug!(%url, "probing prediction service");
        self.fetch_json(self.http.get(url)).await
    }

    async fn fetch_json<T>(&self, builder: reqwest::RequestBuilder) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| TransportError::Decode(err.to_string()))
    }
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict(&self, request: &PredictionRequest) -> Result<f64, TransportError> {
        let url = self.base_url.join("predict")?;
        tracing::info!(%url, ?request, "requesting price estimate");

        let dto: PredictionDto = self.fetch_json(self.http.post(url).json(request)).await?;
        if !dto.predicted_price.is_finite() {
            return Err(TransportError::Decode(
                "predicted_price is not a finite number".to_string(),
            ));
        }

        tracing::info!(predicted_price = dto.predicted_price, "estimate received");
        Ok(dto.predicted_price)
    }
}

#[cfg(test)]
#[path = "predict_test.rs"]
mod tests;
