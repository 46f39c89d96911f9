// src/models/result.rs

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use validator::Validate;

use crate::scoring::ScoringMethod;

/// Represents the 'results' table in the database.
/// Append-only; a row is never mutated after the scorer writes it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    pub test_id: i64,
    pub user_id: i64,
    pub username: String,
    pub full_name: String,

    /// The submitted option indices, one per question.
    pub answers: Json<Vec<i32>>,

    pub score: f64,

    /// 1-based indices of missed questions, ascending.
    pub wrong_questions: Json<Vec<i32>>,

    pub completed_at: chrono::DateTime<chrono::Utc>,
}

/// A scored submission ready to be appended to the store.
#[derive(Debug, Clone)]
pub struct NewResult {
    pub test_id: i64,
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub answers: Vec<i32>,
    pub score: f64,
    pub wrong_questions: Vec<i32>,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    pub test_id: i64,
    pub user_id: i64,
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub full_name: String,
    /// Option index chosen for each question, in question order.
    pub answers: Vec<i32>,
    pub scoring_method: ScoringMethod,
}
