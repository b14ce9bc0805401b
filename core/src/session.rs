// furncart/src/session.rs

//! One shopper's session: the form, the last bundle, the cart, and the
//! bookkeeping around submissions.

use crate::cart::Cart;
use crate::config::ShopConfig;
use crate::error::{Result, ShopError};
use crate::form::PreferenceForm;
use crate::models::{PreferenceInput, RecommendationResponse};
use crate::recommender::Recommender;
use tracing::{debug, info, warn};

/// Identifies one submission. Only the most recently issued ticket may
/// change session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionTicket(u64);

/// What happened to a finished submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
  /// The bundle is now the session's recommendations.
  Applied,
  /// The submission failed; see `ShopSession::error`.
  Failed,
  /// A newer submission was started meanwhile; the result was dropped.
  Superseded,
}

pub struct ShopSession {
  pub form: PreferenceForm,
  recommender: Recommender,
  recommendations: Option<RecommendationResponse>,
  cart: Cart,
  loading: bool,
  error: Option<String>,
  issued: u64,
}

impl ShopSession {
  pub fn new(config: &ShopConfig, recommender: Recommender) -> Self {
    Self {
      form: PreferenceForm::new(config.budget),
      recommender,
      recommendations: None,
      cart: Cart::new(),
      loading: false,
      error: None,
      issued: 0,
    }
  }

  /// A session with an HTTP recommender built from `config`.
  pub fn from_config(config: &ShopConfig) -> Result<Self> {
    Ok(Self::new(config, Recommender::from_config(config.clone())?))
  }

  pub fn recommender(&self) -> &Recommender {
    &self.recommender
  }

  pub fn recommendations(&self) -> Option<&RecommendationResponse> {
    self.recommendations.as_ref()
  }

  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  /// The last user-visible failure message.
  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  /// Marks a submission as in flight and snapshots the form for it.
  pub fn begin_submission(&mut self) -> (SubmissionTicket, PreferenceInput) {
    self.issued += 1;
    self.error = None;
    self.loading = true;
    debug!(ticket = self.issued, "Submission started.");
    (SubmissionTicket(self.issued), self.form.snapshot())
  }

  /// Applies a finished submission unless a newer one has been started since.
  pub fn complete_submission(
    &mut self,
    ticket: SubmissionTicket,
    result: Result<RecommendationResponse>,
  ) -> SubmissionOutcome {
    if ticket.0 != self.issued {
      info!(ticket = ticket.0, latest = self.issued, "Discarding result of a superseded submission.");
      return SubmissionOutcome::Superseded;
    }
    self.loading = false;
    match result {
      Ok(bundle) => {
        info!(products = bundle.products.len(), "Recommendations received.");
        self.recommendations = Some(bundle);
        SubmissionOutcome::Applied
      }
      Err(e) => {
        warn!(error = %e, "Error fetching recommendations.");
        self.recommendations = None;
        self.error = Some(e.to_string());
        SubmissionOutcome::Failed
      }
    }
  }

  /// Submits the current form and waits for the outcome.
  pub async fn submit(&mut self) -> SubmissionOutcome {
    let (ticket, prefs) = self.begin_submission();
    let recommender = self.recommender.clone();
    let result = recommender.request(prefs).await;
    self.complete_submission(ticket, result)
  }

  /// Adds one unit of a product from the current bundle.
  pub fn add_to_cart(&mut self, product_id: &str) -> Result<u32> {
    let product = self
      .recommendations
      .as_ref()
      .and_then(|r| r.find(product_id))
      .ok_or_else(|| ShopError::Validation(format!("No recommended product with id '{}'.", product_id)))?;
    Ok(self.cart.add(product))
  }

  /// The "Add All to Cart" action. Returns how many products were added.
  pub fn add_all_to_cart(&mut self) -> usize {
    match &self.recommendations {
      Some(bundle) => {
        self.cart.add_all(&bundle.products);
        bundle.products.len()
      }
      None => 0,
    }
  }

  pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
    self.cart.remove(product_id)
  }

  pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
    self.cart.set_quantity(product_id, quantity);
  }

  pub fn increment(&mut self, product_id: &str) {
    self.cart.increment(product_id);
  }

  pub fn decrement(&mut self, product_id: &str) {
    self.cart.decrement(product_id);
  }

  pub fn clear_cart(&mut self) {
    self.cart.clear();
  }

  pub fn cart_item_count(&self) -> u32 {
    self.cart.item_count()
  }

  pub fn cart_total(&self) -> f64 {
    self.cart.total()
  }
}
