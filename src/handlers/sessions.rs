// src/handlers/sessions.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::session::{ClaimedSession, OpenSessionRequest},
    store,
};

/// Opens a quiz session once the bot has collected the user's choices.
///
/// Replaces any earlier session for the same user, so a wandering bot
/// conversation never leaves more than one live row behind.
pub async fn open_session(
    State(pool): State<PgPool>,
    Json(payload): Json<OpenSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Validation(validation_errors.to_string()));
    }

    let session = store::sessions::open_session(&pool, &payload).await?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// Claims a session when the web front end picks the flow up.
///
/// Single-use: a second claim, or a claim after the TTL, gets 404 and the
/// user has to start over in the bot.
pub async fn consume_session(
    State(pool): State<PgPool>,
    Path(session_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let session = store::sessions::consume_session(&pool, session_id)
        .await?
        .ok_or(AppError::NotFound(
            "Session expired or already used".to_string(),
        ))?;

    Ok(Json(ClaimedSession {
        test_code: session.test_code,
        question_count: session.question_count,
        scoring_method: session.scoring_method,
    }))
}
