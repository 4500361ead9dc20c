use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::ErrorResponse;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::ValidationError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Car ID is required")]
    MissingId,

    #[error("{0}")]
    BadRequest(String),

    #[error("Car not found")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MissingId | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Validation(e) => {
                tracing::warn!(field = e.field(), "validation error: {}", e);
                e.to_string()
            }
            ApiError::NotFound(id) => {
                tracing::warn!(%id, "car not found");
                self.to_string()
            }
            ApiError::Internal(detail) => {
                tracing::error!("internal error: {}", detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            ApiError::MissingId | ApiError::BadRequest(_) => {
                tracing::warn!("bad request: {}", self);
                self.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
