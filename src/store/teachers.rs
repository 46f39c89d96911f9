// src/store/teachers.rs

use sqlx::{PgConnection, PgExecutor};

use crate::{error::AppError, models::teacher::Teacher};

const TEACHER_COLUMNS: &str =
    "id, telegram_id, username, full_name, role, test_limit, tests_created, created_at";

/// Looks a teacher up by telegram id.
pub async fn find_teacher(
    executor: impl PgExecutor<'_>,
    telegram_id: i64,
) -> Result<Option<Teacher>, AppError> {
    let teacher = sqlx::query_as::<_, Teacher>(&format!(
        "SELECT {} FROM teachers WHERE telegram_id = $1",
        TEACHER_COLUMNS
    ))
    .bind(telegram_id)
    .fetch_optional(executor)
    .await?;

    Ok(teacher)
}

/// Atomically claims one unit of the teacher's creation quota.
///
/// The check and the increment are a single conditional UPDATE, so two
/// concurrent creations by the same teacher cannot both pass the limit check.
/// Runs on the caller's transaction; rolling back releases the slot.
///
/// Fails with `QuotaExceeded` when the limit is reached and `NotFound` when
/// there is no such teacher.
pub async fn reserve_test_slot(
    conn: &mut PgConnection,
    telegram_id: i64,
) -> Result<Teacher, AppError> {
    let reserved = sqlx::query_as::<_, Teacher>(&format!(
        r#"
        UPDATE teachers
        SET tests_created = tests_created + 1
        WHERE telegram_id = $1
          AND (test_limit = -1 OR tests_created < test_limit)
        RETURNING {}
        "#,
        TEACHER_COLUMNS
    ))
    .bind(telegram_id)
    .fetch_optional(&mut *conn)
    .await?;

    match reserved {
        Some(teacher) => Ok(teacher),
        // Zero rows means either no such teacher or an exhausted quota.
        None => match find_teacher(&mut *conn, telegram_id).await? {
            Some(_) => Err(AppError::QuotaExceeded(
                "Test creation limit reached".to_string(),
            )),
            None => Err(AppError::NotFound("Teacher not found".to_string())),
        },
    }
}

/// Inserts a new teacher row with the 'teacher' role.
pub async fn insert_teacher(
    executor: impl PgExecutor<'_>,
    telegram_id: i64,
    username: &str,
    full_name: &str,
    test_limit: i32,
) -> Result<Teacher, AppError> {
    let teacher = sqlx::query_as::<_, Teacher>(&format!(
        r#"
        INSERT INTO teachers (telegram_id, username, full_name, role, test_limit)
        VALUES ($1, $2, $3, 'teacher', $4)
        RETURNING {}
        "#,
        TEACHER_COLUMNS
    ))
    .bind(telegram_id)
    .bind(username)
    .bind(full_name)
    .bind(test_limit)
    .fetch_one(executor)
    .await
    .map_err(|e| {
        // Postgres error code for unique violation is 23505
        if e.to_string().contains("unique constraint") || e.to_string().contains("23505") {
            AppError::Conflict(format!("Teacher '{}' already exists", telegram_id))
        } else {
            AppError::from(e)
        }
    })?;

    Ok(teacher)
}
