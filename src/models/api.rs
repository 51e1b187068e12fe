use serde::{Deserialize, Serialize};

/// Top-level resource paths advertised by `GET /`
pub const ROOT_ROUTES: &[&str] = &["/users", "/health"];

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct RootInfo {
    pub message: &'static str,
    pub routes: &'static [&'static str],
}

impl Default for RootInfo {
    fn default() -> Self {
        Self {
            message: "User API",
            routes: ROOT_ROUTES,
        }
    }
}
