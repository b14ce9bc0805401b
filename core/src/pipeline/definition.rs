// furncart/src/pipeline/definition.rs

//! `Pipeline<TData, Err>` definition.

use crate::core::context::Handler;
use crate::core::step::{SkipCondition, StepDef};
use crate::error::FlowError;
use std::collections::HashMap;

/// Ordered named steps, each with `before`, `on` and `after` handler lists,
/// all operating on one shared `ContextData<TData>`.
///
/// `Err` is what handlers fail with; it must absorb `FlowError` so that
/// configuration problems found while running (a non-optional step without
/// handlers) surface through the same channel.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<StepDef<TData>>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a pipeline from `(name, optional, skip_if)` step tuples.
  pub fn new(step_defs: &[(&str, bool, Option<SkipCondition<TData>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional, skip_if)| StepDef::new(*name, *optional, skip_if.clone()))
      .collect();

    Self {
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  /// Step names in execution order.
  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  fn position(&self, step_name: &str) -> Option<usize> {
    self.steps.iter().position(|s| s.name == step_name)
  }

  /// Panics when `step_name` is unknown. Registering against a misspelled
  /// step is a setup bug, not a runtime condition.
  pub(crate) fn ensure_step_exists(&self, step_name: &str) {
    if self.position(step_name).is_none() {
      panic!("Pipeline setup error: Step '{}' not found in pipeline definition.", step_name);
    }
  }
}
