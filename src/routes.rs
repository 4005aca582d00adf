// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{questions, submissions};

/// Assembles the main application router.
///
/// * Wires the four quiz endpoints.
/// * Applies global middleware (Trace, permissive CORS).
/// * Injects global state (Database Pool).
pub fn create_router(pool: SqlitePool) -> Router {
    // All origins are allowed
    let cors = CorsLayer::permissive();

    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/submit", post(submissions::submit_answers))
        .route("/leaderboard", get(submissions::get_leaderboard))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(pool)
}
