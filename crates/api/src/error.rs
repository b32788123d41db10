//! JSON rendering of application errors.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tabula_core::layout::LayoutError;
use tabula_shared::AppError;

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        tracing::warn!(code = self.0.error_code(), error = %self.0, "Request rejected");
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<LayoutError> for ApiError {
    fn from(error: LayoutError) -> Self {
        match error {
            LayoutError::NoTables | LayoutError::NoRows => {
                Self(AppError::Validation(error.to_string()))
            }
            LayoutError::TooManyTables { .. } | LayoutError::TooManyRows { .. } => {
                Self(AppError::LimitExceeded(error.to_string()))
            }
        }
    }
}
