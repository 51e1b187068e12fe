// Application state (AppState)

use crate::stores::user_store::UserStore;
use crate::utils::time::current_timestamp;
use std::sync::Arc;

/// Shared application state
///
/// Cloned into every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// System of record for users
    pub users: Arc<UserStore>,

    /// Unix timestamp of process start, used for uptime reporting
    pub started_at: i64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            started_at: current_timestamp(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
