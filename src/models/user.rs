// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
/// Anyone who registered through the bot, teacher or not.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    pub username: String,
    pub full_name: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for registering a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub telegram_id: i64,
    #[validate(length(
        min = 1,
        max = 64,
        message = "Username length must be between 1 and 64 characters."
    ))]
    pub username: String,
    #[validate(length(
        min = 1,
        max = 128,
        message = "Full name length must be between 1 and 128 characters."
    ))]
    pub full_name: String,
}
