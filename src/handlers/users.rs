// src/handlers/users.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{RegisterRequest, User},
};

/// Registers a new bot user.
///
/// Returns 201 Created and the user row. A telegram id can register once;
/// duplicates get 409.
pub async fn register(
    State(pool): State<PgPool>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Validation(validation_errors.to_string()));
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (telegram_id, username, full_name)
        VALUES ($1, $2, $3)
        RETURNING id, telegram_id, username, full_name, created_at
        "#,
    )
    .bind(payload.telegram_id)
    .bind(&payload.username)
    .bind(&payload.full_name)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        // Postgres error code for unique violation is 23505
        if e.to_string().contains("unique constraint") || e.to_string().contains("23505") {
            AppError::Conflict(format!("User '{}' already registered", payload.telegram_id))
        } else {
            tracing::error!("Failed to register user: {:?}", e);
            AppError::from(e)
        }
    })?;

    Ok((StatusCode::CREATED, Json(user)))
}
