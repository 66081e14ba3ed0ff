use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing token";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// True for failures the caller did not cause (collaborator or configuration errors).
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::InternalError(_))
    }

    /// The message sent to the client. Internal detail never leaves the process.
    fn client_message(&self) -> String {
        match self {
            AppError::NotFound(message) => message.clone(),
            AppError::Unauthorized(_) => UNAUTHORIZED_MESSAGE.to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.client_message(),
        })
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
