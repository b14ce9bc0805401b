// furncart/src/recommender.rs

use crate::config::ShopConfig;
use crate::core::context_data::ContextData;
use crate::error::{FlowError, Result};
use crate::models::{PreferenceInput, RecommendationResponse};
use crate::pipeline::Pipeline;
use crate::pipelines::{build_submission_pipeline, SubmissionCtxData};
use crate::services::{HttpRecommendationApi, RecommendationApi};
use crate::ShopError;
use std::sync::Arc;
use tracing::instrument;

/// Turns preferences into a recommendation bundle by running the submission pipeline.
///
/// Cheap to clone; clones share the API client and the pipeline.
#[derive(Clone)]
pub struct Recommender {
  api: Arc<dyn RecommendationApi>,
  pipeline: Arc<Pipeline<SubmissionCtxData, ShopError>>,
}

impl Recommender {
  pub fn new(api: Arc<dyn RecommendationApi>) -> Self {
    let pipeline = Arc::new(build_submission_pipeline(api.clone()));
    Self { api, pipeline }
  }

  /// A recommender talking HTTP to `config.api_base_url`.
  pub fn from_config(config: ShopConfig) -> Result<Self> {
    Ok(Self::new(Arc::new(HttpRecommendationApi::new(config)?)))
  }

  /// Reachability of the backend. Never fails.
  pub async fn probe(&self) -> bool {
    self.api.probe().await
  }

  /// Probes, encodes any local image, sends the request and validates the bundle.
  #[instrument(name = "Recommender::request", skip_all, fields(room_type = %prefs.room_type, budget = prefs.budget))]
  pub async fn request(&self, prefs: PreferenceInput) -> Result<RecommendationResponse> {
    let ctx = ContextData::new(SubmissionCtxData::new(prefs));
    let outcome = self.pipeline.run(ctx.clone()).await?;
    let response = ctx.write().response.take();
    match response {
      Some(bundle) if outcome.is_completed() => Ok(bundle),
      _ => Err(
        FlowError::Incomplete {
          expected: "recommendation bundle".to_string(),
        }
        .into(),
      ),
    }
  }
}
