// furncart/src/lib.rs

//! FurnCart: client side of a furniture recommendation service.
//!
//! A shopper fills in room preferences, the backend answers with a bundle of
//! products, and the shopper builds a cart out of it.
//!  - `PreferenceForm` holds the editable choices (room, style, size, budget, image).
//!  - `Recommender` probes the backend, encodes a local room picture, posts the
//!    preferences and validates the returned bundle, as a step pipeline.
//!  - `Cart` keeps unique entries with positive quantities and derives totals.
//!  - `ShopSession` ties them together and only honors the latest submission.

pub mod cart;
pub mod config;
pub mod core;
pub mod error;
pub mod form;
pub mod models;
pub mod pipeline;
pub mod pipelines;
pub mod recommender;
pub mod services;
pub mod session;

// --- Re-exports for the Public API ---

pub use crate::core::context::Handler;
pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::step::{SkipCondition, StepDef};
pub use crate::pipeline::definition::Pipeline;

pub use crate::cart::Cart;
pub use crate::config::{BudgetRange, ShopConfig, DEFAULT_API_URL};
pub use crate::error::{FlowError, FlowResult, Result, ShopError, CONNECTIVITY_MESSAGE};
pub use crate::form::PreferenceForm;
pub use crate::models::{
  CartItem, ImageSource, PreferenceInput, Product, RecommendRequest, RecommendationResponse, RoomSize, RoomStyle,
  RoomType,
};
pub use crate::recommender::Recommender;
pub use crate::services::{HttpRecommendationApi, RecommendationApi};
pub use crate::session::{ShopSession, SubmissionOutcome, SubmissionTicket};
