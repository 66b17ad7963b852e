use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use haven_core::{CoreError, ValidationErrorSet};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Field-level rejection of a booking.
    ValidationError(ValidationErrorSet),
    NotFoundError(String),
    BadRequestError(String),
    MethodNotAllowed,
    /// `public` is sent to the caller, `detail` only reaches the logs.
    InternalServerError { public: &'static str, detail: String },
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn internal(public: &'static str, detail: impl ToString) -> Self {
        AppError::InternalServerError { public, detail: detail.to_string() }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ValidationError(errors) => {
                let body = Json(json!({ "errors": errors }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequestError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
            }
            AppError::InternalServerError { public, detail } => {
                tracing::error!("Internal Server Error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => AppError::ValidationError(errors),
            CoreError::NotFound(msg) => AppError::NotFoundError(msg),
            CoreError::BadRequest(msg) => AppError::BadRequestError(msg),
            CoreError::Internal(msg) => AppError::Anyhow(anyhow::anyhow!(msg)),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}

/// Fallback for routes hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFoundError("Not found".to_string())
}
