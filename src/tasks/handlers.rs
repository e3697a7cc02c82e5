use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    extract::Json,
    state::AppState,
    tasks::{
        dto::{CreateTaskRequest, EditTaskRequest, SetStatusRequest},
        repo::{self, NewTask, Task},
    },
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_pending))
        .route("/taskschange", get(list_completed))
        .route("/remindertasks", get(list_reminders))
}

pub fn write_routes() -> Router<AppState> {
    // The three PATCH paths are aliases kept for wire compatibility; the
    // clients use them to mark done, archive, and undo respectively.
    Router::new()
        .route("/tasks", post(create_task))
        .route("/tasks/:id", patch(set_status).put(edit_content))
        .route("/dtasks/:id", patch(set_status))
        .route("/taskschange/:id", patch(set_status))
}

#[instrument(skip(state, user))]
pub async fn list_pending(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    let rows = repo::list_pending(&state.db, user.id).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, user))]
pub async fn list_completed(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    let rows = repo::list_completed(&state.db, user.id).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, user))]
pub async fn list_reminders(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    let rows = repo::list_upcoming_reminders(&state.db, user.id).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, user, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let remindertime = match payload.remindertime {
        Some(t) if !payload.task.is_empty() && !payload.task_type.is_empty() => t,
        _ => {
            warn!(user_id = %user.id, "create task with missing fields");
            return Err(ApiError::Validation(
                "Task, type and remindertime are required".into(),
            ));
        }
    };

    let new = NewTask {
        task: payload.task,
        task_type: payload.task_type,
        timeofentry: payload.timeofentry.unwrap_or_else(OffsetDateTime::now_utc),
        remindertime,
        completestatus: payload.completestatus,
        currentstatus: payload.currentstatus,
    };

    let task = repo::create(&state.db, user.id, &new).await?;
    info!(user_id = %user.id, task_id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

#[instrument(skip(state, user, payload))]
pub async fn set_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = repo::set_status(
        &state.db,
        user.id,
        id,
        payload.completestatus,
        payload.currentstatus,
    )
    .await?
    .ok_or_else(|| {
        warn!(user_id = %user.id, task_id = %id, "status change on unknown task");
        ApiError::NotFound("Task not found".into())
    })?;

    info!(
        user_id = %user.id,
        task_id = %id,
        completestatus = payload.completestatus,
        currentstatus = payload.currentstatus,
        "task status updated"
    );
    Ok(Json(task))
}

#[instrument(skip(state, user, payload))]
pub async fn edit_content(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<EditTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    if payload.editedtask.is_empty() {
        warn!(user_id = %user.id, task_id = %id, "edit with empty task text");
        return Err(ApiError::Validation("Edited task is required".into()));
    }

    let task_type = payload.editedtype.unwrap_or_default();
    let task = repo::edit_content(&state.db, user.id, id, &payload.editedtask, &task_type)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %user.id, task_id = %id, "edit on unknown task");
            ApiError::NotFound("Task not found".into())
        })?;

    info!(user_id = %user.id, task_id = %id, "task content updated");
    Ok(Json(task))
}
