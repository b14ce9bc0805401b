// furncart/src/pipeline/execution.rs

//! `Pipeline::run()`: executes steps and their handlers in order.

use crate::core::context::Handler;
use crate::core::context_data::ContextData;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::error::FlowError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Instrument, Level};

/// What a phase decided: carry on with the step, or halt the pipeline.
enum PhaseOutcome {
  Continue,
  Stopped,
}

async fn run_phase<TData, Err>(
  phase: &'static str,
  handlers: Option<&Vec<Handler<TData, Err>>>,
  ctx_data: &ContextData<TData>,
) -> Result<PhaseOutcome, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + Send + Sync + 'static,
{
  let Some(handlers) = handlers else {
    return Ok(PhaseOutcome::Continue);
  };
  for (handler_idx, handler_fn) in handlers.iter().enumerate() {
    let handler_span = span!(Level::DEBUG, "handler", phase, handler_index = handler_idx);
    match handler_fn(ctx_data.clone()).instrument(handler_span).await {
      Ok(PipelineControl::Continue) => {}
      Ok(PipelineControl::Stop) => {
        event!(Level::INFO, phase, "Pipeline stopped by a handler.");
        return Ok(PhaseOutcome::Stopped);
      }
      Err(e) => {
        event!(Level::ERROR, phase, error = %e, "Handler failed.");
        return Err(e);
      }
    }
  }
  Ok(PhaseOutcome::Continue)
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Executes the pipeline against the shared context `ctx_data`.
  ///
  /// Skipped steps are not visited at all. An optional step with no handlers
  /// is passed over; a non-optional one fails with `FlowError::HandlerMissing`.
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            context_type = %std::any::type_name::<TData>(),
            num_steps = self.steps.len(),
        ),
        err(Display)
    )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_span = span!(Level::INFO, "pipeline_step", step_name = %step_def.name, step_index = step_idx);
      if let PhaseOutcome::Stopped = self.run_step(step_idx, &ctx_data).instrument(step_span).await? {
        return Ok(PipelineResult::Stopped);
      }
    }

    event!(Level::DEBUG, "Pipeline execution completed.");
    Ok(PipelineResult::Completed)
  }

  async fn run_step(&self, step_idx: usize, ctx_data: &ContextData<TData>) -> Result<PhaseOutcome, Err> {
    let step_def = &self.steps[step_idx];
    let step_name = step_def.name.as_str();

    if let Some(skip_cond_fn) = &step_def.skip_if {
      if skip_cond_fn(ctx_data.clone()) {
        event!(Level::INFO, "Step skipped due to 'skip_if' condition.");
        return Ok(PhaseOutcome::Continue);
      }
    }

    let has_handlers = [&self.before, &self.on, &self.after]
      .iter()
      .any(|phase| phase.get(step_name).is_some_and(|v| !v.is_empty()));
    if !has_handlers {
      if step_def.optional {
        event!(Level::DEBUG, "Optional step has no handlers, skipping.");
        return Ok(PhaseOutcome::Continue);
      }
      event!(Level::ERROR, "Non-optional step has no handlers.");
      return Err(Err::from(FlowError::HandlerMissing {
        step_name: step_def.name.clone(),
      }));
    }

    for (phase, handlers) in [
      ("before", self.before.get(step_name)),
      ("on", self.on.get(step_name)),
      ("after", self.after.get(step_name)),
    ] {
      if let PhaseOutcome::Stopped = run_phase(phase, handlers, ctx_data).await? {
        return Ok(PhaseOutcome::Stopped);
      }
    }
    event!(Level::DEBUG, "Step finished.");
    Ok(PhaseOutcome::Continue)
  }
}
