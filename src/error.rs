//! Request error kinds and their HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidQueryParameter { name: &'static str, reason: String },

    #[error("Malformed query string: {0}")]
    MalformedQuery(String),

    #[error("MP with id {0} not found")]
    RecordNotFound(i64),
}

impl AppError {
    pub fn invalid_param(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidQueryParameter {
            name,
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidQueryParameter { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            AppError::RecordNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!("Request rejected with {}: {}", status, self);

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
