//! Shared application state for the HTTP handlers.

use intake_engine::{Credentials, IntakeCoordinator};
use tokio::sync::Mutex;

/// Everything a handler needs. The coordinator sits behind one lock so each
/// request applies as a single step against all of its views.
pub struct AppState {
  pub engine: Mutex<IntakeCoordinator>,
  pub credentials: Credentials,
}

impl AppState {
  pub fn new(engine: IntakeCoordinator, credentials: Credentials) -> Self {
    Self {
      engine: Mutex::new(engine),
      credentials,
    }
  }
}
