// src/config.rs

use dotenvy::dotenv;
use std::env;

/// Lower bound for the number of questions in a test.
pub const MIN_QUESTION_COUNT: usize = 10;
/// Upper bound for the number of questions in a test.
pub const MAX_QUESTION_COUNT: usize = 90;

/// Tests a newly added teacher may create when no explicit limit is given.
pub const DEFAULT_TEST_LIMIT: i32 = 5;

/// How long an opened quiz session stays claimable.
pub const SESSION_TTL_MINUTES: i64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub port: u16,
    /// Seeded at startup as an unlimited admin teacher, if set.
    pub admin_telegram_id: Option<i64>,
    pub admin_username: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let admin_telegram_id = env::var("ADMIN_TELEGRAM_ID")
            .ok()
            .and_then(|v| v.parse().ok());
        let admin_username = env::var("ADMIN_USERNAME").ok();

        Self {
            database_url,
            rust_log,
            port,
            admin_telegram_id,
            admin_username,
        }
    }
}
