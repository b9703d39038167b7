use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failure of a request. The payload is detail for the logs only; clients see
/// the fixed message for the status code.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Gone: {0}")]
    Gone(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Static message placed in the error envelope.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "The server did not understand the request.",
            AppError::Forbidden(_) => "forbidden",
            AppError::NotFound(_) => "resource not found",
            AppError::MethodNotAllowed(_) => {
                "The method specified in the request is not allowed."
            }
            AppError::Timeout(_) => "request timeout",
            AppError::Gone(_) => "gone",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::DatabaseError(_) | AppError::InternalError(_) => "internal server error",
        }
    }

    /// Converts this error into the fixed failure of an endpoint, keeping the
    /// original text as detail.
    pub fn reclassify(self, into: fn(String) -> AppError) -> AppError {
        let mapped = into(self.to_string());
        if mapped.status_code().is_server_error() {
            log::error!("{}", mapped);
        } else {
            log::warn!("{}", mapped);
        }
        mapped
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            AppError::Gone(_) => StatusCode::GONE,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: self.status_code().as_u16(),
            message: self.message(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
