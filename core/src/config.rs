// furncart/src/config.rs

use crate::error::{Result, ShopError};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Inclusive budget bounds, the slider step and the initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
  pub min: u32,
  pub max: u32,
  pub step: u32,
  pub default: u32,
}

impl BudgetRange {
  pub fn contains(&self, budget: u32) -> bool {
    (self.min..=self.max).contains(&budget)
  }

  pub fn clamp(&self, budget: u32) -> u32 {
    budget.clamp(self.min, self.max)
  }
}

impl Default for BudgetRange {
  fn default() -> Self {
    Self {
      min: 250,
      max: 5000,
      step: 50,
      default: 1500,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
  /// Base URL of the recommendation API, without a trailing slash.
  pub api_base_url: String,
  pub budget: BudgetRange,
  /// `None` leaves requests without a timeout.
  pub request_timeout: Option<Duration>,
}

impl Default for ShopConfig {
  fn default() -> Self {
    Self::new(DEFAULT_API_URL)
  }
}

impl ShopConfig {
  pub fn new(api_base_url: impl Into<String>) -> Self {
    Self {
      api_base_url: normalize_base_url(api_base_url.into()),
      budget: BudgetRange::default(),
      request_timeout: None,
    }
  }

  pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
    self.api_base_url = normalize_base_url(api_base_url.into());
    self
  }

  /// Loads `.env` if present, then reads the `FURNCART_*` variables.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let api_base_url = lookup("FURNCART_API_URL")
      .filter(|v| !v.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let defaults = BudgetRange::default();
    let min = parse_var(&lookup, "FURNCART_BUDGET_MIN", defaults.min)?;
    let max = parse_var(&lookup, "FURNCART_BUDGET_MAX", defaults.max)?;
    if min > max {
      return Err(ShopError::Config(format!(
        "FURNCART_BUDGET_MIN ({}) is greater than FURNCART_BUDGET_MAX ({})",
        min, max
      )));
    }
    let step = parse_var(&lookup, "FURNCART_BUDGET_STEP", defaults.step)?;
    if step == 0 {
      return Err(ShopError::Config("FURNCART_BUDGET_STEP must be positive".to_string()));
    }
    let default = parse_var(&lookup, "FURNCART_DEFAULT_BUDGET", defaults.default)?.clamp(min, max);

    let request_timeout = match lookup("FURNCART_REQUEST_TIMEOUT_SECS") {
      Some(raw) => Some(Duration::from_secs(parse_value("FURNCART_REQUEST_TIMEOUT_SECS", &raw)?)),
      None => None,
    };

    let config = Self {
      api_base_url: normalize_base_url(api_base_url),
      budget: BudgetRange { min, max, step, default },
      request_timeout,
    };
    tracing::info!(api_base_url = %config.api_base_url, "Shop configuration loaded.");
    Ok(config)
  }

  pub fn status_url(&self) -> String {
    format!("{}/status", self.api_base_url)
  }

  pub fn recommend_url(&self) -> String {
    format!("{}/recommend", self.api_base_url)
  }
}

fn normalize_base_url(url: String) -> String {
  url.trim().trim_end_matches('/').to_string()
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T>
where
  T::Err: std::fmt::Display,
{
  match lookup(name) {
    Some(raw) => parse_value(name, &raw),
    None => Ok(default),
  }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T>
where
  T::Err: std::fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| ShopError::Config(format!("Invalid {} value '{}': {}", name, raw, e)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    let config = ShopConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.api_base_url, DEFAULT_API_URL);
    assert_eq!(config.budget, BudgetRange::default());
    assert!(config.request_timeout.is_none());
    assert_eq!(config.status_url(), "http://localhost:8000/api/status");
  }

  #[test]
  fn reads_overrides_and_trims_trailing_slash() {
    let config = ShopConfig::from_lookup(lookup_from(&[
      ("FURNCART_API_URL", "https://shop.example/api/"),
      ("FURNCART_BUDGET_MIN", "50"),
      ("FURNCART_BUDGET_MAX", "1000"),
      ("FURNCART_DEFAULT_BUDGET", "1500"),
      ("FURNCART_REQUEST_TIMEOUT_SECS", "12"),
    ]))
    .unwrap();
    assert_eq!(config.recommend_url(), "https://shop.example/api/recommend");
    assert_eq!(config.budget.min, 50);
    assert_eq!(config.budget.max, 1000);
    assert_eq!(config.budget.default, 1000);
    assert_eq!(config.request_timeout, Some(Duration::from_secs(12)));
  }

  #[test]
  fn rejects_bad_numbers_and_inverted_range() {
    let err = ShopConfig::from_lookup(lookup_from(&[("FURNCART_BUDGET_MAX", "lots")])).unwrap_err();
    assert!(matches!(err, ShopError::Config(ref m) if m.contains("FURNCART_BUDGET_MAX")));

    let err = ShopConfig::from_lookup(lookup_from(&[("FURNCART_BUDGET_MIN", "900"), ("FURNCART_BUDGET_MAX", "100")]))
      .unwrap_err();
    assert!(matches!(err, ShopError::Config(_)));

    assert!(ShopConfig::from_lookup(lookup_from(&[("FURNCART_BUDGET_STEP", "0")])).is_err());
  }

  #[test]
  #[serial]
  fn from_env_reads_process_environment() {
    env::set_var("FURNCART_API_URL", "http://10.0.0.5:9000/api");
    let config = ShopConfig::from_env();
    env::remove_var("FURNCART_API_URL");
    assert_eq!(config.unwrap().api_base_url, "http://10.0.0.5:9000/api");
  }
}
