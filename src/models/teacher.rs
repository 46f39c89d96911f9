// src/models/teacher.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'teachers' table in the database.
///
/// `test_limit` of -1 means unlimited; otherwise `tests_created` never
/// exceeds it (enforced by the conditional update in the store, backed by a
/// table check constraint).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub telegram_id: i64,
    pub username: String,
    pub full_name: String,

    /// 'admin' or 'teacher'.
    pub role: String,

    pub test_limit: i32,
    pub tests_created: i32,

    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Teacher {
    /// Whether this teacher still has quota for another test.
    pub fn can_create_test(&self) -> bool {
        self.test_limit == -1 || self.tests_created < self.test_limit
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// DTO for an admin adding a new teacher.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTeacherRequest {
    /// Telegram id of the caller, checked against the admin role.
    pub admin_id: i64,
    pub telegram_id: i64,
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub full_name: String,
    /// -1 for unlimited; omitted means the default limit.
    #[validate(custom(function = validate_test_limit))]
    pub test_limit: Option<i32>,
}

fn validate_test_limit(limit: i32) -> Result<(), validator::ValidationError> {
    if limit < -1 {
        return Err(validator::ValidationError::new("test_limit_out_of_range"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(test_limit: i32, tests_created: i32) -> Teacher {
        Teacher {
            id: 1,
            telegram_id: 42,
            username: "t".to_string(),
            full_name: "Teacher".to_string(),
            role: "teacher".to_string(),
            test_limit,
            tests_created,
            created_at: None,
        }
    }

    #[test]
    fn quota_allows_below_limit() {
        assert!(teacher(5, 4).can_create_test());
    }

    #[test]
    fn quota_blocks_at_limit() {
        assert!(!teacher(5, 5).can_create_test());
        assert!(!teacher(0, 0).can_create_test());
    }

    #[test]
    fn negative_one_means_unlimited() {
        assert!(teacher(-1, 1000).can_create_test());
    }
}
