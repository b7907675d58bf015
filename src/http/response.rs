//! Response bodies and error mapping.
//!
//! # Design Decisions
//! - Every error is a 400 with a single `error` string field, not-found included
//! - The message text is the `Display` of `ApiError`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::projects::StoreError;

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn hello_world() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}

/// JSON shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid Project ID.")]
    InvalidProjectId,

    #[error("Project not found.")]
    ProjectNotFound,

    #[error("Malformed request body.")]
    MalformedBody,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidProjectId | ApiError::ProjectNotFound | ApiError::MalformedBody => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::ProjectNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::ProjectId;

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::InvalidProjectId.to_string(), "Invalid Project ID.");
        assert_eq!(ApiError::ProjectNotFound.to_string(), "Project not found.");
    }

    #[test]
    fn test_not_found_maps_to_bad_request() {
        let err = ApiError::from(StoreError::NotFound(ProjectId::generate()));
        assert_eq!(err, ApiError::ProjectNotFound);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
