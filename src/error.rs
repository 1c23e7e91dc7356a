use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::constants::API_NAME;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API key is required")]
    Unauthorized(String),

    #[error("Invalid API key")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{resource} not found: {message}")]
    NotFound {
        resource: &'static str,
        message: String,
    },

    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn car_not_found(id: &str) -> Self {
        AppError::NotFound {
            resource: "Car",
            message: format!("No car found with id {}", id),
        }
    }

    pub fn route_not_found(method: &str, path: &str) -> Self {
        AppError::NotFound {
            resource: "Route",
            message: format!("Cannot {} {}", method, path),
        }
    }
}

/// Failure envelope shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Unauthorized(msg) => {
                tracing::warn!("{} Unauthorized: {}", API_NAME, msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorBody {
                        error: "Unauthorized".to_string(),
                        message: Some(msg),
                        details: None,
                    },
                )
            }
            AppError::Forbidden(msg) => {
                tracing::warn!("{} Forbidden: {}", API_NAME, msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorBody {
                        error: "Forbidden".to_string(),
                        message: Some(msg),
                        details: None,
                    },
                )
            }
            AppError::Validation(msg) => {
                tracing::warn!("{} Validation error: {}", API_NAME, msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorBody {
                        error: "Invalid input".to_string(),
                        message: Some(msg),
                        details: None,
                    },
                )
            }
            AppError::NotFound { resource, message } => {
                tracing::warn!("{} Not found: {}", API_NAME, message);
                (
                    StatusCode::NOT_FOUND,
                    ErrorBody {
                        error: format!("{} not found", resource),
                        message: Some(message),
                        details: None,
                    },
                )
            }
            AppError::Json(rejection) => {
                tracing::warn!("{} JSON error: {}", API_NAME, rejection);
                (
                    rejection.status(),
                    ErrorBody {
                        error: "Invalid JSON body".to_string(),
                        message: None,
                        details: Some(rejection.body_text()),
                    },
                )
            }
            AppError::Database(e) => {
                tracing::error!("{} Database error: {}", API_NAME, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Database error".to_string(),
                        message: None,
                        details: Some(e.to_string()),
                    },
                )
            }
            AppError::Internal(e) => {
                tracing::error!("{} Internal error: {}", API_NAME, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal server error".to_string(),
                        message: None,
                        details: Some(e.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
