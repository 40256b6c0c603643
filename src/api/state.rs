//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RosterLoader;

/// Shared application state.
///
/// Holds the roster served by `GET /roster`. The roster is immutable; every
/// request builds its own organization from it, so no store is shared
/// between requests.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<RosterLoader>,
}

impl AppState {
    /// Creates a new application state with the given roster.
    pub fn new(roster: RosterLoader) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }

    /// Returns a reference to the roster loader.
    pub fn roster(&self) -> &RosterLoader {
        &self.roster
    }
}
