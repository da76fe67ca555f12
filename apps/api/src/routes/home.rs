use axum::Json;
use serde_json::{json, Value};

/// GET /api/v1/home
/// Static welcome payload for the landing page.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "title": "Inclusive Careers: Empowering Job Seekers with Disabilities",
        "body": "Welcome to the inclusive job recommender, built to help people \
with disabilities find roles in organizations that truly support inclusion.\n\n\
Here's what you can do:\n\
- Fill out a detailed profile form\n\
- Get personalized job recommendations\n\
- Download a resume customized to your profile\n\
- Use voice-enabled accessibility features (optional)\n\n\
Over 60% of people with disabilities want to work but face systemic barriers. \
Employers with inclusive practices see 28% higher revenue, and remote work has \
created more opportunities than ever for talent with accessibility needs.",
        "pages": ["home", "profile", "recommendations", "resume"]
    }))
}
