// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{broadcast, sessions, teachers, tests, users};
use crate::state::AppState;

/// Assembles the main application router.
///
/// * Mounts the bot/web API under /api.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/register", post(users::register))
        .route("/tests/create", post(tests::create_test))
        .route("/tests/check", post(tests::check_test))
        .route("/tests/{id}/results", get(tests::get_results))
        .route("/teachers/add", post(teachers::add_teacher))
        .route("/broadcast", post(broadcast::send_broadcast))
        .route("/sessions", post(sessions::open_session))
        .route("/sessions/{id}/consume", post(sessions::consume_session));

    Router::new()
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
