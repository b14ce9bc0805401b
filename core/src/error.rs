// furncart/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures raised by the pipeline machinery itself, independent of any shop logic.
#[derive(Debug, Error)]
pub enum FlowError {
  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Pipeline halted before producing '{expected}'")]
  Incomplete { expected: String },

  #[error("Internal pipeline error: {0}")]
  Internal(String),
}

pub type FlowResult<T, E = FlowError> = std::result::Result<T, E>;

/// Application error for everything the client surfaces to a user.
///
/// `Connectivity` and `Response` are the two kinds a submission can end in.
/// The `Display` of `Response` is the bare server message so that a `detail`
/// field reaches the user verbatim.
#[derive(Debug, Error)]
pub enum ShopError {
  #[error("{0}")]
  Connectivity(String),

  #[error("{message}")]
  Response { status: u16, message: String },

  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Room image could not be read from '{path}': {source}")]
  Image {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

/// Message shown when the probe fails or the POST never reaches the backend.
pub const CONNECTIVITY_MESSAGE: &str =
  "Cannot connect to the server. Please check your internet connection or try again later.";

impl ShopError {
  pub fn connectivity() -> Self {
    ShopError::Connectivity(CONNECTIVITY_MESSAGE.to_string())
  }

  pub fn is_connectivity(&self) -> bool {
    matches!(self, ShopError::Connectivity(_))
  }

  pub fn is_response(&self) -> bool {
    matches!(self, ShopError::Response { .. })
  }
}

impl From<AnyhowError> for ShopError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<ShopError>() {
      Ok(shop_err) => shop_err,
      Err(other) => match other.downcast::<FlowError>() {
        Ok(flow_err) => ShopError::Workflow { source: flow_err },
        Err(other) => ShopError::Internal(other.to_string()),
      },
    }
  }
}

pub type Result<T, E = ShopError> = std::result::Result<T, E>;
