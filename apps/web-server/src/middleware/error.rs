//! Error handling - HTML error pages.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use askama::Template;
use std::fmt;

use crate::templates::ErrorTemplate;

/// Application-level error type that renders the HTML error page.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (status, message) = match self {
            AppError::NotFound(detail) => (StatusCode::NOT_FOUND, detail.clone()),
            AppError::Internal(detail) => {
                // Log internal errors, keep the page generic
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong.".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };

        match page.render() {
            Ok(body) => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(err) => {
                tracing::error!("Error page failed to render: {}", err);
                HttpResponse::build(status).finish()
            }
        }
    }
}

// Conversion from domain errors
impl From<gazette_core::error::DomainError> for AppError {
    fn from(err: gazette_core::error::DomainError) -> Self {
        match err {
            gazette_core::error::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            gazette_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<gazette_core::error::RepoError> for AppError {
    fn from(err: gazette_core::error::RepoError) -> Self {
        match err {
            gazette_core::error::RepoError::Constraint(msg) => {
                tracing::error!("Database constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            gazette_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            gazette_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("Template rendering failed: {}", err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
