//! HTTP 请求处理器

pub mod analyze;
pub mod health;

pub use analyze::handle_analyze;
pub use health::handle_health;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// 错误响应体：`{"error": ..., "details"?: ...}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// 未匹配路由
pub async fn handle_not_found() -> axum::response::Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found"))).into_response()
}
