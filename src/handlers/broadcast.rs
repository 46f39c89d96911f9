// src/handlers/broadcast.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::broadcast::{Broadcast, BroadcastRequest},
    store,
};

/// Queues a broadcast message for the bot to deliver.
/// Admin only.
pub async fn send_broadcast(
    State(pool): State<PgPool>,
    Json(payload): Json<BroadcastRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Validation(validation_errors.to_string()));
    }

    let sender = store::teachers::find_teacher(&pool, payload.sender_id)
        .await?
        .ok_or(AppError::Forbidden(
            "Only an admin can broadcast".to_string(),
        ))?;

    if !sender.is_admin() {
        return Err(AppError::Forbidden(
            "Only an admin can broadcast".to_string(),
        ));
    }

    let broadcast = sqlx::query_as::<_, Broadcast>(
        r#"
        INSERT INTO broadcasts (sender_id, message)
        VALUES ($1, $2)
        RETURNING id, sender_id, message, created_at
        "#,
    )
    .bind(payload.sender_id)
    .bind(&payload.message)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to queue broadcast: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(broadcast)))
}
