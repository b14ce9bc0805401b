// furncart/src/pipelines/contexts.rs

//! Underlying data structs for pipelines. Handlers receive them wrapped in `ContextData`.

use crate::models::{PreferenceInput, RecommendRequest, RecommendationResponse};

#[derive(Debug, Clone)]
pub struct SubmissionCtxData {
  pub preferences: PreferenceInput,
  /// Wire body, built once the image (if any) is encoded.
  pub request: Option<RecommendRequest>,
  /// Decoded bundle; present after `request_recommendations`.
  pub response: Option<RecommendationResponse>,
}

impl SubmissionCtxData {
  pub fn new(preferences: PreferenceInput) -> Self {
    Self {
      preferences,
      request: None,
      response: None,
    }
  }
}
