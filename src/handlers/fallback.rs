use crate::core::error::ApiError;
use crate::validation::payload::parse_user_id;
use axum::http::{Method, Uri};
use tracing::debug;

/// 404 for every path no route matches
pub async fn fallback_handler(method: Method, uri: Uri) -> ApiError {
    debug!(method = %method, path = %uri.path(), "No route matched");
    ApiError::RouteNotFound
}

/// 405 for a known path requested with an unsupported method
///
/// `/users/{id}` with a non-numeric id is not a known path, so it stays a 404
/// whatever the method.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiError {
    if let Some(segment) = uri.path().strip_prefix("/users/") {
        if parse_user_id(segment).is_none() {
            debug!(method = %method, path = %uri.path(), "No route matched");
            return ApiError::RouteNotFound;
        }
    }

    debug!(method = %method, path = %uri.path(), "Method not allowed");
    ApiError::MethodNotAllowed
}
