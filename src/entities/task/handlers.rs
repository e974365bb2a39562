//! Task HTTP handlers

use super::model::{NewTask, Task, TaskPatch, TaskStatus};
use crate::core::entity::Entity;
use crate::core::error::{EntityError, TaskboardError, TaskboardResult, ValidationError};
use crate::core::service::TaskService;
use crate::core::validation::ValidatedJson;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Task-specific AppState
#[derive(Clone)]
pub struct TaskAppState {
    pub service: Arc<dyn TaskService>,
}

/// `GET /tasks` query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksParams {
    pub status: Option<String>,
}

fn parse_id(raw: &str) -> TaskboardResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        ValidationError::InvalidUuid {
            value: raw.to_string(),
        }
        .into()
    })
}

pub async fn list_tasks(
    State(state): State<TaskAppState>,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<Vec<Task>>, TaskboardError> {
    let status = match params.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<TaskStatus>().map_err(|message| {
            ValidationError::FieldError {
                field: "status".to_string(),
                message,
            }
        })?),
    };

    let tasks = state.service.list(status).await?;
    tracing::debug!(count = tasks.len(), status = ?status, "listed tasks");
    Ok(Json(tasks))
}

pub async fn get_task(
    State(state): State<TaskAppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, TaskboardError> {
    let id = parse_id(&id)?;
    state
        .service
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

pub async fn create_task(
    State(state): State<TaskAppState>,
    ValidatedJson(input): ValidatedJson<NewTask>,
) -> Result<(StatusCode, Json<Task>), TaskboardError> {
    let task = state.service.create(input).await?;
    tracing::info!(task_id = %task.id, title = %task.title, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<TaskAppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<TaskPatch>,
) -> Result<Json<Task>, TaskboardError> {
    let id = parse_id(&id)?;
    let task = state.service.update(&id, patch).await?;
    tracing::info!(task_id = %task.id, status = %task.status, "task updated");
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<TaskAppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, TaskboardError> {
    let id = parse_id(&id)?;
    let task = state.service.delete(&id).await?;
    tracing::info!(task_id = %task.id, "task deleted");
    Ok(Json(task))
}

fn not_found(id: Uuid) -> TaskboardError {
    EntityError::NotFound {
        entity_type: Task::resource_name_singular().to_string(),
        id,
    }
    .into()
}
