// furncart/src/services/mod.rs

//! Collaborators the submission pipeline talks to: the HTTP API and the local image encoder.

pub mod api;
pub mod image;

pub use api::{HttpRecommendationApi, RecommendationApi};
pub use image::{encode_image_file, to_data_url};
