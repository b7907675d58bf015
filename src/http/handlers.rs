//! Route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::http::request::{LenientJson, ListQuery};
use crate::http::response::{ApiError, Greeting};
use crate::http::server::AppState;
use crate::projects::{Project, ProjectId, ProjectPayload};

pub async fn hello() -> Json<Greeting> {
    Json(Greeting::hello_world())
}

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Project>> {
    let projects = state.store.list(query.title.as_deref());
    tracing::debug!(count = projects.len(), filter = ?query.title, "Listing projects");
    Json(projects)
}

pub async fn create_project(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson<ProjectPayload>,
) -> Json<Project> {
    Json(state.store.create(payload))
}

/// `id` was validated and parsed by the route guard.
pub async fn update_project(
    State(state): State<AppState>,
    Extension(id): Extension<ProjectId>,
    LenientJson(payload): LenientJson<ProjectPayload>,
) -> Result<Json<Project>, ApiError> {
    let project = state.store.update(id, payload)?;
    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Extension(id): Extension<ProjectId>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
