// furncart/src/pipelines/mod.rs

//! Pipelines the client runs. There is one today: turning a preference
//! snapshot into a validated recommendation bundle.

pub mod contexts;
pub mod submission_pipeline;

pub use contexts::SubmissionCtxData;
pub use submission_pipeline::{build_submission_pipeline, steps};
