//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use dfi_checker_core::ports::DatabaseService;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
///
/// The store handle is safe for concurrent use; handlers never lock anything.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn DatabaseService>,
    /// Source of "now" for default start dates and the active-interaction check.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    pub fn new(db: Arc<dyn DatabaseService>) -> Self {
        Self {
            db,
            clock: Arc::new(DefaultClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }
}
