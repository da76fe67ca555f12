pub mod health;
pub mod home;

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};

use crate::matching::handlers as matching_handlers;
use crate::profile::handlers as profile_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

/// POST /api/v1/session
/// Opens a fresh session; all page routes require the returned id.
async fn create_session(State(state): State<AppState>) -> Json<Value> {
    let session_id = state.sessions.create();
    Json(json!({ "session_id": session_id }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/home", get(home::home_handler))
        .route("/api/v1/session", post(create_session))
        // Profile page
        .route(
            "/api/v1/profile",
            put(profile_handlers::handle_put_profile).get(profile_handlers::handle_get_profile),
        )
        // Recommendations page
        .route(
            "/api/v1/recommendations",
            post(matching_handlers::handle_recommendations),
        )
        .route(
            "/api/v1/recommendations/feedback",
            post(matching_handlers::handle_feedback),
        )
        .route(
            "/api/v1/recommendations/applied",
            post(matching_handlers::handle_mark_applied),
        )
        .route(
            "/api/v1/recommendations/activity",
            get(matching_handlers::handle_activity),
        )
        .route("/api/v1/history", get(matching_handlers::handle_history))
        // Resume page
        .route(
            "/api/v1/resume",
            post(resume_handlers::handle_generate_resume),
        )
        .route(
            "/api/v1/resume/pdf",
            get(resume_handlers::handle_download_pdf),
        )
        .with_state(state)
}
