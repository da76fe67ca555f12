use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::profile::validation::validate_profile;
use crate::session::SessionIdQuery;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileSavedResponse {
    pub saved: bool,
    /// Echo of the combined skill list, for the post-save preview.
    pub skills: Vec<String>,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: Option<Profile>,
}

/// PUT /api/v1/profile
/// Validates everything first, then overwrites the session's profile
/// wholesale. Nothing is saved while any validation error remains.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
    Json(profile): Json<Profile>,
) -> Result<Json<ProfileSavedResponse>, AppError> {
    let errors = validate_profile(&profile);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let skills = profile.skills.clone();
    state
        .sessions
        .with_mut(params.session_id, |session| {
            session.profile = Some(profile);
        })
        .ok_or(AppError::SessionNotFound)?;

    Ok(Json(ProfileSavedResponse {
        saved: true,
        skills,
    }))
}

/// GET /api/v1/profile
/// Returns the stored profile (or null) so the form can prefill.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state
        .sessions
        .with(params.session_id, |session| session.profile.clone())
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(ProfileResponse { profile }))
}
