// src/store/sessions.rs

use chrono::{Duration, Utc};
use sqlx::PgExecutor;

use crate::{
    config::SESSION_TTL_MINUTES,
    error::AppError,
    models::session::{OpenSessionRequest, QuizSession},
};

const SESSION_COLUMNS: &str = "id, user_id, test_code, question_count, scoring_method, \
                               created_at, expires_at, consumed_at";

/// Opens a quiz session for the user, replacing any earlier one.
///
/// A user has at most one session; re-opening resets the clock and clears any
/// previous consumption. The row expires after a fixed TTL, so abandoned bot
/// conversations don't accumulate.
pub async fn open_session(
    executor: impl PgExecutor<'_>,
    req: &OpenSessionRequest,
) -> Result<QuizSession, AppError> {
    let expires_at = Utc::now() + Duration::minutes(SESSION_TTL_MINUTES);

    let session = sqlx::query_as::<_, QuizSession>(&format!(
        r#"
        INSERT INTO quiz_sessions (user_id, test_code, question_count, scoring_method, expires_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id) DO UPDATE SET
            test_code = EXCLUDED.test_code,
            question_count = EXCLUDED.question_count,
            scoring_method = EXCLUDED.scoring_method,
            created_at = NOW(),
            expires_at = EXCLUDED.expires_at,
            consumed_at = NULL
        RETURNING {}
        "#,
        SESSION_COLUMNS
    ))
    .bind(req.user_id)
    .bind(&req.test_code)
    .bind(req.question_count)
    .bind(req.scoring_method.as_str())
    .bind(expires_at)
    .fetch_one(executor)
    .await?;

    Ok(session)
}

/// Claims a session: single-use, and only while unexpired.
///
/// The guard and the consumption are one conditional UPDATE, so a session
/// handed to two browser tabs is only honored once. Returns `None` for a
/// session that is missing, expired, or already consumed.
pub async fn consume_session(
    executor: impl PgExecutor<'_>,
    session_id: i64,
) -> Result<Option<QuizSession>, AppError> {
    let session = sqlx::query_as::<_, QuizSession>(&format!(
        r#"
        UPDATE quiz_sessions
        SET consumed_at = NOW()
        WHERE id = $1
          AND consumed_at IS NULL
          AND expires_at > NOW()
        RETURNING {}
        "#,
        SESSION_COLUMNS
    ))
    .bind(session_id)
    .fetch_optional(executor)
    .await?;

    Ok(session)
}
