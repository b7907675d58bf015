//! Guard for routes carrying a `{id}` parameter.

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::response::ApiError;
use crate::projects::ProjectId;

/// Reject malformed ids before the handler runs. On success the parsed
/// `ProjectId` is stored in the request extensions.
pub async fn validate_project_id(
    Path(raw): Path<String>,
    mut request: Request,
    next: Next,
) -> Response {
    match raw.parse::<ProjectId>() {
        Ok(id) => {
            request.extensions_mut().insert(id);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejecting request");
            ApiError::InvalidProjectId.into_response()
        }
    }
}
