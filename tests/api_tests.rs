// tests/api_tests.rs

use sqlx::postgres::{PgPool, PgPoolOptions};
use testbot_backend::{config::Config, routes, state::AppState};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    // Note: For Postgres, you must have a running database.
    // We'll read from DATABASE_URL environment variable.
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    // 1. Create a pool
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing. Make sure DATABASE_URL is set.");

    // 2. Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    // 3. Create test configuration and state
    let config = Config {
        database_url: database_url.clone(),
        rust_log: "error".to_string(),
        port: 0,
        admin_telegram_id: None,
        admin_username: None,
    };

    let state = AppState { pool, config };

    // 4. Create the router with the app state
    let app = routes::create_router(state);

    // 5. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 6. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn test_pool() -> PgPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test DB")
}

/// Telegram ids must be unique per test run.
fn unique_id() -> i64 {
    (uuid::Uuid::new_v4().as_u128() >> 67) as i64
}

async fn seed_teacher(pool: &PgPool, telegram_id: i64, role: &str, test_limit: i32) {
    sqlx::query(
        "INSERT INTO teachers (telegram_id, username, full_name, role, test_limit)
         VALUES ($1, $2, $2, $3, $4)",
    )
    .bind(telegram_id)
    .bind(format!("t_{}", telegram_id))
    .bind(role)
    .bind(test_limit)
    .execute(pool)
    .await
    .expect("Failed to seed teacher");
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn register_works() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let telegram_id = unique_id();

    // Act
    let response = client
        .post(&format!("{}/api/register", address))
        .json(&serde_json::json!({
            "telegram_id": telegram_id,
            "username": "aziz",
            "full_name": "Aziz Karimov"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn register_twice_conflicts() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let body = serde_json::json!({
        "telegram_id": unique_id(),
        "username": "aziz",
        "full_name": "Aziz Karimov"
    });

    // Act
    client
        .post(&format!("{}/api/register", address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    let second = client
        .post(&format!("{}/api/register", address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
async fn add_teacher_requires_admin() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let pool = test_pool().await;

    let admin_id = unique_id();
    let plain_teacher_id = unique_id();
    seed_teacher(&pool, admin_id, "admin", -1).await;
    seed_teacher(&pool, plain_teacher_id, "teacher", 5).await;

    // Act: a plain teacher tries to add someone
    let forbidden = client
        .post(&format!("{}/api/teachers/add", address))
        .json(&serde_json::json!({
            "admin_id": plain_teacher_id,
            "telegram_id": unique_id(),
            "username": "newbie",
            "full_name": "New Teacher"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(forbidden.status().as_u16(), 403);

    // Act: the admin does the same
    let created = client
        .post(&format!("{}/api/teachers/add", address))
        .json(&serde_json::json!({
            "admin_id": admin_id,
            "telegram_id": unique_id(),
            "username": "newbie",
            "full_name": "New Teacher",
            "test_limit": 3
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(created.status().as_u16(), 201);
    let teacher: serde_json::Value = created.json().await.unwrap();
    assert_eq!(teacher["role"], "teacher");
    assert_eq!(teacher["test_limit"], 3);
    assert_eq!(teacher["tests_created"], 0);
}

#[tokio::test]
async fn add_teacher_defaults_the_limit() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let pool = test_pool().await;

    let admin_id = unique_id();
    seed_teacher(&pool, admin_id, "admin", -1).await;

    // Act: no test_limit in the payload
    let created = client
        .post(&format!("{}/api/teachers/add", address))
        .json(&serde_json::json!({
            "admin_id": admin_id,
            "telegram_id": unique_id(),
            "username": "limitless",
            "full_name": "Default Limit"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(created.status().as_u16(), 201);
    let teacher: serde_json::Value = created.json().await.unwrap();
    assert_eq!(teacher["test_limit"], 5);
}

#[tokio::test]
async fn broadcast_is_admin_only() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    let pool = test_pool().await;

    let admin_id = unique_id();
    let outsider_id = unique_id();
    seed_teacher(&pool, admin_id, "admin", -1).await;

    // Act
    let forbidden = client
        .post(&format!("{}/api/broadcast", address))
        .json(&serde_json::json!({
            "sender_id": outsider_id,
            "message": "Yangi test chiqdi!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let queued = client
        .post(&format!("{}/api/broadcast", address))
        .json(&serde_json::json!({
            "sender_id": admin_id,
            "message": "Yangi test chiqdi!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(forbidden.status().as_u16(), 403);
    assert_eq!(queued.status().as_u16(), 201);
}
