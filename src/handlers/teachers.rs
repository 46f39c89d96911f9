// src/handlers/teachers.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    config::DEFAULT_TEST_LIMIT,
    error::AppError,
    models::teacher::AddTeacherRequest,
    store,
};

/// Adds a new teacher.
///
/// The caller must be a registered admin; everyone else gets 403. The new
/// teacher starts with the requested limit (or the default) and zero tests.
pub async fn add_teacher(
    State(pool): State<PgPool>,
    Json(payload): Json<AddTeacherRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Validation(validation_errors.to_string()));
    }

    let caller = store::teachers::find_teacher(&pool, payload.admin_id)
        .await?
        .ok_or(AppError::Forbidden(
            "Only an admin can add teachers".to_string(),
        ))?;

    if !caller.is_admin() {
        return Err(AppError::Forbidden(
            "Only an admin can add teachers".to_string(),
        ));
    }

    let teacher = store::teachers::insert_teacher(
        &pool,
        payload.telegram_id,
        &payload.username,
        &payload.full_name,
        payload.test_limit.unwrap_or(DEFAULT_TEST_LIMIT),
    )
    .await?;

    tracing::info!(
        "Admin {} added teacher {} with limit {}",
        payload.admin_id,
        teacher.telegram_id,
        teacher.test_limit
    );

    Ok((StatusCode::CREATED, Json(teacher)))
}
