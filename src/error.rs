use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

impl AppError {
    /// Whether the underlying store rejected a write for violating a unique
    /// or foreign-key constraint (duplicate email, dangling user_id).
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            AppError::Database(SqlxError::Database(db_err)) => matches!(
                db_err.kind(),
                ErrorKind::UniqueViolation | ErrorKind::ForeignKeyViolation
            ),
            _ => false,
        }
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = if self.is_constraint_violation() {
            (
                StatusCode::CONFLICT,
                ErrorBody {
                    code: "CONSTRAINT_VIOLATION".to_string(),
                    message: "The record conflicts with an existing one.".to_string(),
                },
            )
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            )
        };
        (status, Json(ErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}
