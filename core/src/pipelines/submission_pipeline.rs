// furncart/src/pipelines/submission_pipeline.rs

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use crate::error::{FlowError, ShopError};
use crate::models::ImageSource;
use crate::pipeline::Pipeline;
use crate::pipelines::contexts::SubmissionCtxData;
use crate::services::{encode_image_file, RecommendationApi};
use std::sync::Arc;
use tracing::{info, warn};

pub mod steps {
  pub const CHECK_CONNECTIVITY: &str = "check_connectivity";
  pub const ENCODE_ROOM_IMAGE: &str = "encode_room_image";
  pub const REQUEST_RECOMMENDATIONS: &str = "request_recommendations";
  pub const VALIDATE_BUNDLE: &str = "validate_bundle";
}

/// Probe → encode image → POST → validate.
///
/// The probe failing ends the run with `ShopError::Connectivity` before any
/// request body is built, so `/recommend` is never hit for an unreachable server.
pub fn build_submission_pipeline(api: Arc<dyn RecommendationApi>) -> Pipeline<SubmissionCtxData, ShopError> {
  let mut p = Pipeline::<SubmissionCtxData, ShopError>::new(&[
    (steps::CHECK_CONNECTIVITY, false, None),
    (
      steps::ENCODE_ROOM_IMAGE,
      false,
      Some(Arc::new(|ctx: ContextData<SubmissionCtxData>| {
        !ctx.with(|d| d.preferences.needs_encoding())
      })),
    ),
    (steps::REQUEST_RECOMMENDATIONS, false, None),
    (steps::VALIDATE_BUNDLE, false, None),
  ]);

  // Step 1: the server must answer the status probe.
  let probe_api = api.clone();
  p.on_root(steps::CHECK_CONNECTIVITY, move |_ctx: ContextData<SubmissionCtxData>| {
    let api = probe_api.clone();
    Box::pin(async move {
      if !api.probe().await {
        warn!("Submission Pipeline: server unreachable, not sending the request.");
        return Err(ShopError::connectivity());
      }
      info!("Submission Pipeline: server reachable.");
      Ok(PipelineControl::Continue)
    })
  });

  // Step 2: replace a local file with its inline data URL.
  p.on_root(steps::ENCODE_ROOM_IMAGE, |ctx: ContextData<SubmissionCtxData>| {
    Box::pin(async move {
      let path = match ctx.with(|d| d.preferences.image.clone()) {
        Some(ImageSource::LocalFile(path)) => path,
        _ => return Ok(PipelineControl::Continue),
      };
      let encoded = encode_image_file(&path).await?;
      info!("Submission Pipeline: room image '{}' encoded inline.", path.display());
      ctx.write().preferences.image = Some(ImageSource::Inline(encoded));
      Ok::<_, ShopError>(PipelineControl::Continue)
    })
  });

  // Step 3: build the body, then send it.
  p.before_root(steps::REQUEST_RECOMMENDATIONS, |ctx: ContextData<SubmissionCtxData>| {
    Box::pin(async move {
      let request = ctx.with(|d| d.preferences.to_request())?;
      ctx.write().request = Some(request);
      Ok::<_, ShopError>(PipelineControl::Continue)
    })
  });

  let request_api = api;
  p.on_root(steps::REQUEST_RECOMMENDATIONS, move |ctx: ContextData<SubmissionCtxData>| {
    let api = request_api.clone();
    Box::pin(async move {
      let request = ctx
        .with(|d| d.request.clone())
        .ok_or_else(|| FlowError::Internal("request body missing".to_string()))?;
      info!(
        "Submission Pipeline: requesting {} / {} / {} bundle within {}.",
        request.room_type, request.style, request.size, request.budget
      );
      let response = api.recommend(&request).await?;
      ctx.write().response = Some(response);
      Ok::<_, ShopError>(PipelineControl::Continue)
    })
  });

  // Step 4: refuse bundles the cart could not hold.
  p.on_root(steps::VALIDATE_BUNDLE, |ctx: ContextData<SubmissionCtxData>| {
    Box::pin(async move {
      let verdict = ctx.with(|d| d.response.as_ref().map(|r| r.validate()));
      match verdict {
        Some(Ok(())) => Ok(PipelineControl::Continue),
        Some(Err(defect)) => {
          warn!("Submission Pipeline: rejecting bundle: {}", defect);
          Err(ShopError::Response {
            status: 200,
            message: format!("Malformed response body: {}", defect),
          })
        }
        None => Err(FlowError::Incomplete {
          expected: "recommendation bundle".to_string(),
        }
        .into()),
      }
    })
  });

  p.after_root(steps::VALIDATE_BUNDLE, |ctx: ContextData<SubmissionCtxData>| {
    Box::pin(async move {
      let (count, total) = ctx.with(|d| {
        d.response
          .as_ref()
          .map_or((0, 0.0), |r| (r.products.len(), r.total_price))
      });
      info!("Submission Pipeline: received {} products totalling {:.2}.", count, total);
      Ok::<_, ShopError>(PipelineControl::Continue)
    })
  });

  p
}
