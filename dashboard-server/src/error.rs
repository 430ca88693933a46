//! Error handling

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gridguard_core::GridGuardError;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Input errors
    #[error("{0}")]
    ValidationError(String),

    // Prediction pipeline errors
    #[error(transparent)]
    Prediction(#[from] GridGuardError),

    // Generic errors
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// HTTP status and the message shown to the user
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Prediction(err) => {
                let status = match err {
                    GridGuardError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
                    GridGuardError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    GridGuardError::SchemaMismatch(_)
                    | GridGuardError::Inference(_)
                    | GridGuardError::InvalidCapacity(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    tracing::error!(kind = err.kind(), "Prediction aborted: {}", err);
                }
                (status, err.to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(format!("Invalid input: {}", err))
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::ValidationError(format!("Invalid input: {}", rejection.body_text()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(format!("Invalid input: {}", rejection.body_text()))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Prediction task failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (GridGuardError::UnknownCategory("Farm".into()), StatusCode::BAD_REQUEST),
            (GridGuardError::ModelUnavailable("gone".into()), StatusCode::SERVICE_UNAVAILABLE),
            (GridGuardError::SchemaMismatch("order".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (GridGuardError::Inference("nan".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            let (status, message) = AppError::from(err).status_and_message();
            assert_eq!(status, expected);
            assert!(!message.is_empty());
        }
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let (_, message) = AppError::InternalError("secret path".into()).status_and_message();
        assert_eq!(message, "Internal server error");
    }
}
