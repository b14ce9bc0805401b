// furncart/src/services/api.rs

//! The recommendation backend seam and its `reqwest` implementation.

use crate::config::ShopConfig;
use crate::error::{Result, ShopError};
use crate::models::{RecommendRequest, RecommendationResponse};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tracing::{info, instrument, warn};

/// What the client needs from the backend.
#[async_trait]
pub trait RecommendationApi: Send + Sync {
  /// `true` only when `GET /status` answers with a 2xx. Never fails.
  async fn probe(&self) -> bool;

  /// Sends one `POST /recommend` and decodes the bundle.
  async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendationResponse>;
}

#[derive(Debug, Clone)]
pub struct HttpRecommendationApi {
  client: reqwest::Client,
  config: ShopConfig,
}

impl HttpRecommendationApi {
  pub fn new(config: ShopConfig) -> Result<Self> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder
      .build()
      .map_err(|e| ShopError::Config(format!("Failed to build HTTP client: {}", e)))?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &ShopConfig {
    &self.config
  }
}

/// Picks the user-facing message out of an error body, preferring `detail`.
fn error_message(status: StatusCode, body: &[u8]) -> String {
  let detail = serde_json::from_slice::<serde_json::Value>(body)
    .ok()
    .and_then(|v| v.get("detail").cloned())
    .and_then(|detail| match detail {
      serde_json::Value::String(s) if !s.is_empty() => Some(s),
      serde_json::Value::String(_) | serde_json::Value::Null | serde_json::Value::Bool(false) => None,
      serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
      other => Some(other.to_string()),
    });
  detail.unwrap_or_else(|| {
    format!("Error {}: {}", status.as_u16(), status.canonical_reason().unwrap_or(""))
      .trim_end()
      .to_string()
  })
}

#[async_trait]
impl RecommendationApi for HttpRecommendationApi {
  #[instrument(name = "api::probe", skip_all, fields(url = %self.config.status_url()))]
  async fn probe(&self) -> bool {
    match self.client.get(self.config.status_url()).send().await {
      Ok(response) if response.status().is_success() => true,
      Ok(response) => {
        warn!(status = %response.status(), "Status probe answered with a non-success status.");
        false
      }
      Err(e) => {
        warn!(error = %e, "Error checking server connection.");
        false
      }
    }
  }

  #[instrument(name = "api::recommend", skip_all, fields(url = %self.config.recommend_url()))]
  async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendationResponse> {
    info!("Sending recommendation request.");
    let response = self
      .client
      .post(self.config.recommend_url())
      .header(ACCEPT, "application/json")
      .json(request)
      .send()
      .await
      .map_err(|e| {
        warn!(error = %e, "Recommendation request could not reach the server.");
        ShopError::connectivity()
      })?;

    let status = response.status();
    let body = response.bytes().await.map_err(|e| ShopError::Response {
      status: status.as_u16(),
      message: format!("Failed to read response body: {}", e),
    })?;

    if !status.is_success() {
      let message = error_message(status, &body);
      warn!(%status, %message, "Recommendation request rejected.");
      return Err(ShopError::Response {
        status: status.as_u16(),
        message,
      });
    }

    serde_json::from_slice::<RecommendationResponse>(&body).map_err(|e| ShopError::Response {
      status: status.as_u16(),
      message: format!("Malformed response body: {}", e),
    })
  }
}
