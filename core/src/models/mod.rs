// furncart/src/models/mod.rs

//! Data exchanged with the recommendation backend and held by the client.

pub mod cart_item;
pub mod preferences;
pub mod product;
pub mod recommendation;

pub use cart_item::CartItem;
pub use preferences::{ImageSource, PreferenceInput, RoomSize, RoomStyle, RoomType};
pub use product::Product;
pub use recommendation::{RecommendRequest, RecommendationResponse};
