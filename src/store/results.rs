// src/store/results.rs

use sqlx::{PgExecutor, types::Json};

use crate::{
    error::AppError,
    models::result::{NewResult, QuizResult},
};

const RESULT_COLUMNS: &str =
    "id, test_id, user_id, username, full_name, answers, score, wrong_questions, completed_at";

/// Appends a scored submission.
///
/// Strictly an insert: existing results are never touched, and the caller
/// must not retry on failure (a replay would record the attempt twice).
pub async fn save_result(
    executor: impl PgExecutor<'_>,
    new: NewResult,
) -> Result<QuizResult, AppError> {
    let result = sqlx::query_as::<_, QuizResult>(&format!(
        r#"
        INSERT INTO results
        (test_id, user_id, username, full_name, answers, score, wrong_questions)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {}
        "#,
        RESULT_COLUMNS
    ))
    .bind(new.test_id)
    .bind(new.user_id)
    .bind(&new.username)
    .bind(&new.full_name)
    .bind(Json(&new.answers))
    .bind(new.score)
    .bind(Json(&new.wrong_questions))
    .fetch_one(executor)
    .await?;

    Ok(result)
}

/// All results for a test, best first.
///
/// Ordering is part of the contract: score descending, ties broken by
/// `completed_at` ascending so the earlier submission ranks higher.
pub async fn ranked_results(
    executor: impl PgExecutor<'_>,
    test_id: i64,
) -> Result<Vec<QuizResult>, AppError> {
    let results = sqlx::query_as::<_, QuizResult>(&format!(
        r#"
        SELECT {}
        FROM results
        WHERE test_id = $1
        ORDER BY score DESC, completed_at ASC
        "#,
        RESULT_COLUMNS
    ))
    .bind(test_id)
    .fetch_all(executor)
    .await?;

    Ok(results)
}
