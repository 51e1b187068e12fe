// Centralized error handling for the user API

use crate::models::api::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors returned to HTTP callers
///
/// The first four variants are payload problems and map to 400. Every
/// variant renders as `{"error": "<message>"}`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request body must be JSON")]
    BodyNotJson,

    #[error("Both 'name' and 'email' are required")]
    MissingRequiredFields,

    #[error("No valid fields to update")]
    NoValidFields,

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BodyNotJson
            | ApiError::MissingRequiredFields
            | ApiError::NoValidFields
            | ApiError::InvalidField(_) => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
