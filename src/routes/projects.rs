use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;

use crate::error::AppError;
use crate::models::{NewProject, ProjectDto};
use crate::state::SharedState;

type ProjectId = WithRejection<Path<i64>, AppError>;
type ProjectBody = WithRejection<Json<ProjectDto>, AppError>;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<ProjectDto>>, AppError> {
    let projects = state.store.list_all().await?;
    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

pub async fn get(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): ProjectId,
) -> Result<Json<ProjectDto>, AppError> {
    let project = state.store.get_by_id(id).await?;
    Ok(Json(project.into()))
}

pub async fn create(
    State(state): State<SharedState>,
    WithRejection(Json(req), _): ProjectBody,
) -> Result<(StatusCode, Json<ProjectDto>), AppError> {
    let project = NewProject::try_from(req)?;
    let created = state.store.create(project).await?;

    tracing::info!(id = created.id, "Project created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn update(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): ProjectId,
    WithRejection(Json(req), _): ProjectBody,
) -> Result<Json<ProjectDto>, AppError> {
    let project = NewProject::try_from(req)?;
    let updated = state.store.update(id, project).await?;

    tracing::info!(id, "Project updated");

    Ok(Json(updated.into()))
}

pub async fn delete(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): ProjectId,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;

    tracing::info!(id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
