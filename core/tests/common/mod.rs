// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset.

use async_trait::async_trait;
use furncart::{
  ContextData, FlowError, PipelineControl, Product, RecommendRequest, RecommendationApi, RecommendationResponse,
  ShopError,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::Level;

// --- Generic pipeline fixtures ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Flow error: {0}")]
  Flow(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<FlowError> for TestError {
  fn from(fe: FlowError) -> Self {
    TestError::Flow(format!("{:?}", fe))
  }
}

pub fn create_simple_handler(
  step_name: &'static str,
  message_to_append: &'static str,
) -> furncart::Handler<TestContext, TestError> {
  Box::new(move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.message.push_str(message_to_append);
      guard.steps_executed.push(step_name.to_string());
      if guard.should_stop_at.as_deref() == Some(step_name) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  })
}

pub fn create_failing_handler(
  step_name: &'static str,
  error_message: &'static str,
) -> furncart::Handler<TestContext, TestError> {
  Box::new(move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      Err(TestError::Handler(error_message.to_string()))
    })
  })
}

// --- Tracing setup (once per test binary) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Shop fixtures ---
pub fn product(id: &str, price: f64) -> Product {
  Product {
    id: id.to_string(),
    name: format!("Product {id}"),
    price,
    image_url: format!("https://img.example/{id}.jpg"),
    description: format!("Description of {id}"),
    category: "Living".to_string(),
  }
}

pub fn bundle(products: Vec<Product>) -> RecommendationResponse {
  let total_price = products.iter().map(|p| p.price).sum();
  RecommendationResponse { products, total_price }
}

type Reply = Box<dyn Fn(&RecommendRequest) -> Result<RecommendationResponse, ShopError> + Send + Sync>;

/// In-memory backend that records what it was asked.
pub struct FakeApi {
  pub reachable: AtomicBool,
  pub probes: AtomicUsize,
  pub recommends: AtomicUsize,
  pub requests: Mutex<Vec<RecommendRequest>>,
  reply: Reply,
}

impl FakeApi {
  pub fn new(
    reachable: bool,
    reply: impl Fn(&RecommendRequest) -> Result<RecommendationResponse, ShopError> + Send + Sync + 'static,
  ) -> Self {
    Self {
      reachable: AtomicBool::new(reachable),
      probes: AtomicUsize::new(0),
      recommends: AtomicUsize::new(0),
      requests: Mutex::new(Vec::new()),
      reply: Box::new(reply),
    }
  }

  /// Always answers with `products`.
  pub fn serving(products: Vec<Product>) -> Self {
    Self::new(true, move |_| Ok(bundle(products.clone())))
  }

  pub fn unreachable() -> Self {
    Self::new(false, |_| panic!("recommend must not be called when the probe fails"))
  }

  pub fn recommend_calls(&self) -> usize {
    self.recommends.load(Ordering::SeqCst)
  }

  pub fn last_request(&self) -> Option<RecommendRequest> {
    self.requests.lock().last().cloned()
  }
}

#[async_trait]
impl RecommendationApi for FakeApi {
  async fn probe(&self) -> bool {
    self.probes.fetch_add(1, Ordering::SeqCst);
    self.reachable.load(Ordering::SeqCst)
  }

  async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendationResponse, ShopError> {
    self.recommends.fetch_add(1, Ordering::SeqCst);
    self.requests.lock().push(request.clone());
    (self.reply)(request)
  }
}
