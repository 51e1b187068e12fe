// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{fallback, health, root, users};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root::root_handler))
        .route("/health", get(health::health_handler))
        // User resource
        .route(
            "/users",
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route(
            "/users/{id}",
            get(users::get_user_handler)
                .put(users::update_user_handler)
                .delete(users::delete_user_handler),
        )
        // JSON error envelopes for unmatched paths and methods
        .fallback(fallback::fallback_handler)
        .method_not_allowed_fallback(fallback::method_not_allowed_handler)
        .with_state(state)
}
