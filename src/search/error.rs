use super::types::{ErrorBody, ValidationError};
use crate::elastic::error::BackendError;
use crate::projection::types::ProjectedResult;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Everything that can go wrong while serving an autocomplete request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Existing clients read this payload from a 200 response
            ApiError::Validation(ValidationError::Missing) => StatusCode::OK,
            ApiError::Validation(ValidationError::Unknown(_) | ValidationError::InvalidIndex(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Backend(BackendError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(err) => {
                tracing::debug!("Rejected autocomplete request: {}", err);
                (status, Json(vec![ProjectedResult::new(err.to_string())])).into_response()
            }
            ApiError::Backend(err) => {
                tracing::error!("Search backend failed: {}", err);
                let body = ErrorBody {
                    error: err.code().to_string(),
                    message: err.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
