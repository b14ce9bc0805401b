// tests/session_tests.rs
mod common;

use common::*;
use furncart::{Recommender, RoomType, ShopConfig, ShopError, ShopSession, SubmissionOutcome};
use std::sync::Arc;

fn session_with(api: FakeApi) -> (ShopSession, Arc<FakeApi>) {
  let api = Arc::new(api);
  let session = ShopSession::new(&ShopConfig::default(), Recommender::new(api.clone()));
  (session, api)
}

#[tokio::test]
async fn test_submit_then_build_cart() {
  setup_tracing();
  let (mut session, api) = session_with(FakeApi::serving(vec![product("a", 10.0), product("b", 5.0)]));
  session.form.room_type = RoomType::DiningRoom;

  assert_eq!(session.submit().await, SubmissionOutcome::Applied);
  assert!(!session.is_loading());
  assert!(session.error().is_none());
  assert_eq!(api.last_request().unwrap().room_type, "dining_room");

  session.add_to_cart("a").unwrap();
  session.add_to_cart("a").unwrap();
  session.add_to_cart("b").unwrap();
  assert_eq!(session.cart_total(), 25.0);
  assert_eq!(session.cart_item_count(), 3);

  session.decrement("a");
  session.update_quantity("b", 0);
  assert_eq!(session.cart_total(), 10.0);
  assert!(session.cart().get("b").is_none());

  assert!(matches!(session.add_to_cart("nope"), Err(ShopError::Validation(_))));
}

#[tokio::test]
async fn test_add_all_uses_current_bundle() {
  setup_tracing();
  let (mut session, _api) = session_with(FakeApi::serving(vec![product("a", 10.0), product("b", 5.0)]));
  assert_eq!(session.add_all_to_cart(), 0);
  session.submit().await;
  assert_eq!(session.add_all_to_cart(), 2);
  assert_eq!(session.add_all_to_cart(), 2);
  assert_eq!(session.cart().quantity_of("a"), Some(2));
  assert_eq!(session.cart_total(), 30.0);
  session.clear_cart();
  assert!(session.cart().is_empty());
}

#[tokio::test]
async fn test_failure_clears_previous_bundle_and_keeps_cart() {
  setup_tracing();
  let (mut session, api) = session_with(FakeApi::serving(vec![product("a", 10.0)]));
  session.submit().await;
  session.add_to_cart("a").unwrap();

  api.reachable.store(false, std::sync::atomic::Ordering::SeqCst);
  assert_eq!(session.submit().await, SubmissionOutcome::Failed);

  assert!(session.recommendations().is_none());
  assert_eq!(session.error(), Some(furncart::CONNECTIVITY_MESSAGE));
  assert_eq!(session.cart().len(), 1);

  api.reachable.store(true, std::sync::atomic::Ordering::SeqCst);
  assert_eq!(session.submit().await, SubmissionOutcome::Applied);
  assert!(session.error().is_none());
}

#[tokio::test]
async fn test_only_latest_submission_is_honored() {
  setup_tracing();
  let (mut session, _api) = session_with(FakeApi::serving(vec![]));
  let recommender = session.recommender().clone();

  let (first, first_prefs) = session.begin_submission();
  session.form.set_budget(3000).unwrap();
  let (second, second_prefs) = session.begin_submission();
  assert!(second > first);
  assert_eq!(second_prefs.budget, 3000);

  // The second submission finishes first.
  let second_result = Ok(bundle(vec![product("new", 1.0)]));
  assert_eq!(session.complete_submission(second, second_result), SubmissionOutcome::Applied);
  assert!(!session.is_loading());

  // The late answer to the first one must not overwrite it.
  let first_result = recommender.request(first_prefs).await;
  assert_eq!(session.complete_submission(first, first_result), SubmissionOutcome::Superseded);
  assert_eq!(session.recommendations().unwrap().products[0].id, "new");
}

#[tokio::test]
async fn test_stale_failure_does_not_set_error() {
  setup_tracing();
  let (mut session, _api) = session_with(FakeApi::serving(vec![]));
  let (first, _) = session.begin_submission();
  let (_second, _) = session.begin_submission();
  let outcome = session.complete_submission(first, Err(ShopError::connectivity()));
  assert_eq!(outcome, SubmissionOutcome::Superseded);
  assert!(session.error().is_none());
  assert!(session.is_loading());
}
