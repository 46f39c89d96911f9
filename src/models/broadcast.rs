// src/models/broadcast.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'broadcasts' table in the database.
/// The bot polls this table and fans the message out to subscribers.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Broadcast {
    pub id: i64,
    pub sender_id: i64,
    pub message: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for queuing a broadcast.
#[derive(Debug, Deserialize, Validate)]
pub struct BroadcastRequest {
    pub sender_id: i64,
    #[validate(length(min = 1, max = 4000))]
    pub message: String,
}
