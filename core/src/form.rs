// furncart/src/form.rs

//! Editable preference state behind the "find your furniture bundle" form.

use crate::config::BudgetRange;
use crate::error::{Result, ShopError};
use crate::models::{ImageSource, PreferenceInput, RoomSize, RoomStyle, RoomType};
use std::path::PathBuf;

/// The current form values.
///
/// The room image is a single slot, so choosing a URL drops a previously
/// chosen file and vice versa, whatever order the user picks them in.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceForm {
  pub room_type: RoomType,
  pub style: RoomStyle,
  pub size: RoomSize,
  budget: u32,
  range: BudgetRange,
  image: Option<ImageSource>,
}

impl Default for PreferenceForm {
  fn default() -> Self {
    Self::new(BudgetRange::default())
  }
}

impl PreferenceForm {
  pub fn new(range: BudgetRange) -> Self {
    Self {
      room_type: RoomType::default(),
      style: RoomStyle::default(),
      size: RoomSize::default(),
      budget: range.clamp(range.default),
      range,
      image: None,
    }
  }

  pub fn budget(&self) -> u32 {
    self.budget
  }

  pub fn budget_range(&self) -> BudgetRange {
    self.range
  }

  /// Sets the budget; values outside the configured range are rejected.
  pub fn set_budget(&mut self, budget: u32) -> Result<()> {
    if !self.range.contains(budget) {
      return Err(ShopError::Validation(format!(
        "Budget must be between {} and {}, got {}.",
        self.range.min, self.range.max, budget
      )));
    }
    self.budget = budget;
    Ok(())
  }

  /// Moves the budget by `steps` slider steps, stopping at the bounds.
  pub fn nudge_budget(&mut self, steps: i64) -> u32 {
    let moved = i64::from(self.budget).saturating_add(steps.saturating_mul(i64::from(self.range.step)));
    let bounded = moved.clamp(i64::from(self.range.min), i64::from(self.range.max));
    self.budget = u32::try_from(bounded).unwrap_or(self.range.max);
    self.budget
  }

  pub fn image(&self) -> Option<&ImageSource> {
    self.image.as_ref()
  }

  /// Uses a remote picture. An empty string clears the image slot.
  pub fn set_image_url(&mut self, url: impl Into<String>) {
    let url = url.into();
    let url = url.trim();
    self.image = if url.is_empty() {
      None
    } else {
      Some(ImageSource::Url(url.to_string()))
    };
  }

  /// Uses a local picture; it is encoded inline when the form is submitted.
  pub fn set_image_file(&mut self, path: impl Into<PathBuf>) {
    self.image = Some(ImageSource::LocalFile(path.into()));
  }

  /// Uses an already encoded `data:` URL.
  pub fn set_image_data(&mut self, data_url: impl Into<String>) {
    self.image = Some(ImageSource::Inline(data_url.into()));
  }

  pub fn clear_image(&mut self) {
    self.image = None;
  }

  pub fn snapshot(&self) -> PreferenceInput {
    PreferenceInput {
      room_type: self.room_type,
      style: self.style,
      size: self.size,
      budget: self.budget,
      image: self.image.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_are_living_room_modern_medium() {
    let form = PreferenceForm::default();
    let snap = form.snapshot();
    assert_eq!(snap.room_type, RoomType::LivingRoom);
    assert_eq!(snap.style, RoomStyle::Modern);
    assert_eq!(snap.size, RoomSize::Medium);
    assert_eq!(snap.budget, 1500);
    assert!(snap.image.is_none());
  }

  #[test]
  fn image_url_and_file_are_mutually_exclusive() {
    let mut form = PreferenceForm::default();
    form.set_image_file("room.png");
    form.set_image_url("https://img.example/room.jpg");
    assert_eq!(form.image(), Some(&ImageSource::Url("https://img.example/room.jpg".into())));

    form.set_image_file("room.png");
    assert_eq!(form.image(), Some(&ImageSource::LocalFile(PathBuf::from("room.png"))));

    form.set_image_data("data:image/png;base64,AA==");
    form.set_image_url("https://img.example/other.jpg");
    let req = form.snapshot().to_request().unwrap();
    assert!(req.image_data.is_none());
    assert!(req.image_url.is_some());
  }

  #[test]
  fn blank_url_clears_the_slot() {
    let mut form = PreferenceForm::default();
    form.set_image_file("room.png");
    form.set_image_url("   ");
    assert!(form.image().is_none());
  }

  #[test]
  fn budget_is_bounded() {
    let mut form = PreferenceForm::default();
    assert!(form.set_budget(100).is_err());
    assert!(form.set_budget(6000).is_err());
    assert_eq!(form.budget(), 1500);
    form.set_budget(250).unwrap();
    assert_eq!(form.nudge_budget(-3), 250);
    assert_eq!(form.nudge_budget(2), 350);
    form.set_budget(4990).unwrap();
    assert_eq!(form.nudge_budget(1), 5000);
  }

  #[test]
  fn extreme_nudges_stop_at_the_bounds() {
    let mut form = PreferenceForm::default();
    assert_eq!(form.nudge_budget(i64::MAX), 5000);
    assert_eq!(form.nudge_budget(i64::MIN), 250);
  }
}
