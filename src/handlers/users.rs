use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::user::User;
use crate::validation::payload::{decode_object, parse_user_id, CreateUserParams, UpdateUserParams};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

// A non-numeric `{id}` behaves like an unmatched route.
fn user_id(raw_id: &str) -> Result<u64, ApiError> {
    parse_user_id(raw_id).ok_or_else(|| {
        debug!(raw_id = %raw_id, "Path segment is not a user id");
        ApiError::RouteNotFound
    })
}

/// List all users in creation order
///
/// GET /users
pub async fn list_users_handler(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.users.list())
}

/// Fetch a single user
///
/// GET /users/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = user_id(&raw_id)?;

    let user = state.users.get(id).ok_or_else(|| {
        debug!(user_id = id, "User not found");
        ApiError::UserNotFound
    })?;

    Ok(Json(user))
}

/// Create a user
///
/// POST /users with a JSON object containing `name` and `email`, and
/// optionally `age` and `bio`. Responds 201 with a `Location` header.
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let object = decode_object(&headers, &body).inspect_err(|e| {
        warn!(error = %e, "Rejected create request");
    })?;

    let new_user = CreateUserParams::from_object(object)
        .and_then(CreateUserParams::validate)
        .inspect_err(|e| {
            warn!(error = %e, "Rejected create request");
        })?;

    let user = state.users.create(new_user);

    info!(user_id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, user.location())],
        Json(user),
    )
        .into_response())
}

/// Update a user in place
///
/// PUT /users/{id}. Only the fields present in the body are replaced; the
/// user must exist before the body is looked at.
pub async fn update_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let id = user_id(&raw_id)?;

    if !state.users.contains(id) {
        debug!(user_id = id, "User not found");
        return Err(ApiError::UserNotFound);
    }

    let patch = decode_object(&headers, &body)
        .and_then(UpdateUserParams::from_object)
        .and_then(UpdateUserParams::validate)
        .inspect_err(|e| {
            warn!(user_id = id, error = %e, "Rejected update request");
        })?;

    // Deleted between the existence check and here.
    let user = state.users.update(id, patch).ok_or(ApiError::UserNotFound)?;

    info!(user_id = id, "User updated");

    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /users/{id}. Responds 204 with an empty body.
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = user_id(&raw_id)?;

    if state.users.delete(id).is_none() {
        debug!(user_id = id, "User not found");
        return Err(ApiError::UserNotFound);
    }

    info!(user_id = id, remaining = state.users.len(), "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
