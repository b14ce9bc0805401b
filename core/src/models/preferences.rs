// furncart/src/models/preferences.rs

use super::RecommendRequest;
use crate::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoomType {
  #[default]
  #[strum(to_string = "living_room", serialize = "living-room")]
  LivingRoom,
  Bedroom,
  #[strum(to_string = "dining_room", serialize = "dining-room")]
  DiningRoom,
  Office,
}

impl RoomType {
  pub fn label(self) -> &'static str {
    match self {
      RoomType::LivingRoom => "Living Room",
      RoomType::Bedroom => "Bedroom",
      RoomType::DiningRoom => "Dining Room",
      RoomType::Office => "Home Office",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoomStyle {
  #[default]
  Modern,
  Classic,
  Scandinavian,
  Industrial,
}

impl RoomStyle {
  pub fn label(self) -> &'static str {
    match self {
      RoomStyle::Modern => "Modern",
      RoomStyle::Classic => "Classic",
      RoomStyle::Scandinavian => "Scandinavian",
      RoomStyle::Industrial => "Industrial",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoomSize {
  Small,
  #[default]
  Medium,
  Large,
}

impl RoomSize {
  pub fn label(self) -> &'static str {
    match self {
      RoomSize::Small => "Small",
      RoomSize::Medium => "Medium",
      RoomSize::Large => "Large",
    }
  }
}

/// Where the optional room picture comes from.
///
/// `LocalFile` never goes over the wire: the submission pipeline reads it
/// and replaces it with `Inline` before the request body is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
  Url(String),
  LocalFile(PathBuf),
  /// A `data:<mime>;base64,<payload>` string.
  Inline(String),
}

/// A snapshot of the form, ready to be submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceInput {
  pub room_type: RoomType,
  pub style: RoomStyle,
  pub size: RoomSize,
  pub budget: u32,
  pub image: Option<ImageSource>,
}

impl PreferenceInput {
  pub fn needs_encoding(&self) -> bool {
    matches!(self.image, Some(ImageSource::LocalFile(_)))
  }

  /// Builds the JSON body. Fails if a local file has not been encoded yet.
  pub fn to_request(&self) -> Result<RecommendRequest> {
    let (image_url, image_data) = match &self.image {
      None => (None, None),
      Some(ImageSource::Url(url)) => (Some(url.clone()), None),
      Some(ImageSource::Inline(data)) => (None, Some(data.clone())),
      Some(ImageSource::LocalFile(path)) => {
        return Err(ShopError::Internal(format!(
          "room image '{}' must be encoded before the request is built",
          path.display()
        )))
      }
    };
    Ok(RecommendRequest {
      room_type: self.room_type.to_string(),
      style: self.style.to_string(),
      size: self.size.to_string(),
      budget: self.budget,
      image_url,
      image_data,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;
  use strum::IntoEnumIterator;

  #[test]
  fn enums_parse_wire_names_and_dashed_forms() {
    assert_eq!(RoomType::from_str("living_room").unwrap(), RoomType::LivingRoom);
    assert_eq!(RoomType::from_str("Dining-Room").unwrap(), RoomType::DiningRoom);
    assert_eq!(RoomStyle::from_str("SCANDINAVIAN").unwrap(), RoomStyle::Scandinavian);
    assert!(RoomSize::from_str("huge").is_err());
  }

  #[test]
  fn enums_display_as_wire_names() {
    let names: Vec<String> = RoomType::iter().map(|r| r.to_string()).collect();
    assert_eq!(names, vec!["living_room", "bedroom", "dining_room", "office"]);
    assert_eq!(serde_json::to_value(RoomType::DiningRoom).unwrap(), "dining_room");
    assert_eq!(RoomType::Office.label(), "Home Office");
  }

  #[test]
  fn to_request_maps_image_variants() {
    let mut input = PreferenceInput {
      room_type: RoomType::Office,
      style: RoomStyle::Industrial,
      size: RoomSize::Large,
      budget: 2000,
      image: Some(ImageSource::Url("https://img.example/room.jpg".into())),
    };
    let req = input.to_request().unwrap();
    assert_eq!(req.image_url.as_deref(), Some("https://img.example/room.jpg"));
    assert!(req.image_data.is_none());
    assert_eq!(req.room_type, "office");

    input.image = Some(ImageSource::Inline("data:image/png;base64,AAAA".into()));
    let req = input.to_request().unwrap();
    assert!(req.image_url.is_none());
    assert_eq!(req.image_data.as_deref(), Some("data:image/png;base64,AAAA"));

    input.image = Some(ImageSource::LocalFile(PathBuf::from("room.png")));
    assert!(input.needs_encoding());
    assert!(matches!(input.to_request(), Err(ShopError::Internal(_))));
  }
}
