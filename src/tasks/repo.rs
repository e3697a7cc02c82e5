use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// Task record in the `post` table. Every query below is scoped by
/// `user_id`, so a row owned by someone else is indistinguishable from a
/// missing one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub user_id: i64,
    pub task: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub task_type: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timeofentry: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub remindertime: OffsetDateTime,
    pub completestatus: bool,
    pub currentstatus: bool,
}

#[derive(Debug)]
pub struct NewTask {
    pub task: String,
    pub task_type: String,
    pub timeofentry: OffsetDateTime,
    pub remindertime: OffsetDateTime,
    pub completestatus: bool,
    pub currentstatus: bool,
}

pub async fn create(db: &PgPool, user_id: i64, new: &NewTask) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO post (user_id, task, "type", timeofentry, remindertime, completestatus, currentstatus)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, task, "type", timeofentry, remindertime, completestatus, currentstatus
        "#,
    )
    .bind(user_id)
    .bind(&new.task)
    .bind(&new.task_type)
    .bind(new.timeofentry)
    .bind(new.remindertime)
    .bind(new.completestatus)
    .bind(new.currentstatus)
    .fetch_one(db)
    .await
}

pub async fn list_pending(db: &PgPool, user_id: i64) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, task, "type", timeofentry, remindertime, completestatus, currentstatus
        FROM post
        WHERE user_id = $1 AND completestatus = FALSE AND currentstatus = FALSE
        ORDER BY timeofentry DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn list_completed(db: &PgPool, user_id: i64) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, task, "type", timeofentry, remindertime, completestatus, currentstatus
        FROM post
        WHERE user_id = $1 AND completestatus = TRUE AND currentstatus = FALSE
        ORDER BY timeofentry DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

const UPCOMING_REMINDERS_SQL: &str = r#"
        SELECT id, user_id, task, "type", timeofentry, remindertime, completestatus, currentstatus
        FROM post
        WHERE user_id = $1 AND remindertime < now() + INTERVAL '30 minutes'
        ORDER BY timeofentry DESC
        LIMIT 5
        "#;

/// Reminders firing within the next 30 minutes. The window has no lower
/// bound, so overdue reminders keep qualifying until acted on.
pub async fn list_upcoming_reminders(db: &PgPool, user_id: i64) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(UPCOMING_REMINDERS_SQL)
        .bind(user_id)
        .fetch_all(db)
        .await
}

pub async fn set_status(
    db: &PgPool,
    user_id: i64,
    task_id: i64,
    completestatus: bool,
    currentstatus: bool,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE post
        SET completestatus = $3, currentstatus = $4
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, task, "type", timeofentry, remindertime, completestatus, currentstatus
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .bind(completestatus)
    .bind(currentstatus)
    .fetch_optional(db)
    .await
}

pub async fn edit_content(
    db: &PgPool,
    user_id: i64,
    task_id: i64,
    task: &str,
    task_type: &str,
) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(
        r#"
        UPDATE post
        SET task = $3, "type" = $4
        WHERE id = $1 AND user_id = $2
        RETURNING id, user_id, task, "type", timeofentry, remindertime, completestatus, currentstatus
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .bind(task)
    .bind(task_type)
    .fetch_optional(db)
    .await
}
