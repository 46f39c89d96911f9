// src/models/session.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::test::{TEST_CODE_RE, validate_question_count};
use crate::scoring::ScoringMethod;

/// Represents the 'quiz_sessions' table in the database.
///
/// One row per user, replaced on re-open. A session is claimable until it is
/// consumed or its `expires_at` passes, whichever comes first.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: i64,
    pub user_id: i64,
    pub test_code: String,
    pub question_count: i32,

    /// Persisted as its wire form ('general' / 'special').
    pub scoring_method: String,

    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub consumed_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for opening a quiz session once the bot has collected the
/// code / count / scoring choices.
#[derive(Debug, Deserialize, Validate)]
pub struct OpenSessionRequest {
    pub user_id: i64,
    #[validate(regex(path = *TEST_CODE_RE, message = "test_code must be exactly 2 digits"))]
    pub test_code: String,
    #[validate(custom(function = validate_session_count))]
    pub question_count: i32,
    pub scoring_method: ScoringMethod,
}

fn validate_session_count(count: i32) -> Result<(), validator::ValidationError> {
    if count < 0 {
        return Err(validator::ValidationError::new(
            "question_count_out_of_range",
        ));
    }
    validate_question_count(count as usize)
}

/// What the web front end gets back when it claims a session.
#[derive(Debug, Serialize)]
pub struct ClaimedSession {
    pub test_code: String,
    pub question_count: i32,
    pub scoring_method: String,
}
