// furncart/src/core/step.rs

//! A single named step within a pipeline.

use super::ContextData;
use std::sync::Arc;

/// Evaluated against the shared context right before a step runs; `true` skips the step.
pub type SkipCondition<TData> = Arc<dyn Fn(ContextData<TData>) -> bool + Send + Sync + 'static>;

/// Definition of a pipeline step: its name, whether it may run without
/// handlers, and an optional skip condition.
#[derive(Clone)]
pub struct StepDef<T: 'static + Send + Sync> {
  pub name: String,
  pub optional: bool,
  pub skip_if: Option<SkipCondition<T>>,
}

impl<T: 'static + Send + Sync> StepDef<T> {
  pub fn new(name: impl Into<String>, optional: bool, skip_if: Option<SkipCondition<T>>) -> Self {
    Self {
      name: name.into(),
      optional,
      skip_if,
    }
  }
}

// SkipCondition has no Debug, so only report whether one is present.
impl<T: 'static + Send + Sync> std::fmt::Debug for StepDef<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("skip_if_present", &self.skip_if.is_some())
      .finish()
  }
}
