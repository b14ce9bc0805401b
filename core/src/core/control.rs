// furncart/src/core/control.rs

//! Signals for controlling pipeline flow and the outcome of a pipeline run.

/// Returned by every handler: keep going, or halt the whole pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineControl {
  /// Continue with the remaining handlers of this step and the following steps.
  Continue,
  /// Halt immediately. No further handlers in this or later steps run.
  Stop,
}

/// Outcome of a full pipeline execution that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  /// Every step that was not skipped ran to completion.
  Completed,
  /// A handler returned `PipelineControl::Stop`.
  Stopped,
}

impl PipelineResult {
  pub fn is_completed(self) -> bool {
    self == PipelineResult::Completed
  }
}
