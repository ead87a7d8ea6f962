//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use vetslot_core::errors::VetError;

/// Application error wrapper that provides HTTP status code mapping
///
/// Handlers return `Result<_, AppError>`; `?` works on both `VetResult` and
/// `eyre::Result` through the `From` impls below.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use vetslot_api::middleware::error_handling::AppError;
/// use vetslot_core::errors::VetError;
///
/// async fn handler(name: String) -> Result<Json<String>, AppError> {
///     if name.is_empty() {
///         return Err(AppError(VetError::Validation("name is required".to_string())));
///     }
///     Ok(Json(name))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub VetError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            VetError::NotFound(_) => StatusCode::NOT_FOUND,
            VetError::Validation(_) => StatusCode::BAD_REQUEST,
            VetError::Conflict(_) => StatusCode::CONFLICT,
            VetError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            VetError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<VetError> for AppError {
    fn from(err: VetError) -> Self {
        AppError(err)
    }
}

/// Infrastructure failures surface as `VetError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(VetError::Database(err))
    }
}

/// Maps a VetError to an HTTP response
pub fn map_error(err: VetError) -> Response {
    AppError(err).into_response()
}
