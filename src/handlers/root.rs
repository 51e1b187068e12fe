use crate::models::api::RootInfo;
use axum::Json;

/// Service description and known top-level routes
///
/// GET /
pub async fn root_handler() -> Json<RootInfo> {
    Json(RootInfo::default())
}
