//! Recommendation pipeline — the one place the forward data flow is wired
//! together: profile → filter → rank → prompt → LLM → segment → session.
//!
//! The session lock is never held across the LLM await: the profile is
//! copied out up front and results are written back afterwards.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::GenerationConfig;
use crate::matching::filter::{filter_listings, FilterBranch};
use crate::matching::prompts::build_recommendation_prompt;
use crate::matching::ranking::rank_listings;
use crate::matching::segmenter::{segment, split_cards};
use crate::models::job_match::MatchedJob;
use crate::session::{FeedbackChoice, HistoryTurn, SessionIdQuery};
use crate::speech::speak_in_background;
use crate::state::AppState;

/// Bounds on how many ranked listings are forwarded to the model.
const MIN_LIMIT: usize = 10;
const MAX_LIMIT: usize = 100;

fn default_limit() -> usize {
    50
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// How many top-ranked listings to consider for matching.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub branch: FilterBranch,
    /// Candidate count after filtering and ranking.
    pub filtered_count: usize,
    /// Count actually forwarded to the model (≤ limit).
    pub considered_count: usize,
    /// Job section split into display cards on `---` separators. Feedback
    /// and applied records are keyed by position in this list.
    pub cards: Vec<String>,
    pub job_section: String,
    pub interview_section: String,
    pub matches: Vec<MatchedJob>,
    pub unparsed_blocks: usize,
    /// The unsegmented model output, for callers that need to fall back.
    pub raw_response: String,
}

/// POST /api/v1/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&request.limit) {
        return Err(AppError::BadRequest(format!(
            "limit must be between {MIN_LIMIT} and {MAX_LIMIT}"
        )));
    }

    let profile = state
        .sessions
        .with(params.session_id, |session| {
            session.recommendations_gate().map(|p| p.clone())
        })
        .ok_or(AppError::SessionNotFound)?
        .map_err(AppError::Gate)?;

    let outcome = filter_listings(&state.catalog, &profile);
    let ranked = rank_listings(outcome.listings, &profile);
    let filtered_count = ranked.len();
    let top: Vec<_> = ranked.into_iter().take(request.limit).collect();
    info!(
        "Considering {} of {} listings after filtering (branch: {:?})",
        top.len(),
        filtered_count,
        outcome.branch
    );

    let prompt = build_recommendation_prompt(&profile, &top);
    let response = state
        .llm
        .generate(&prompt, &GenerationConfig::default())
        .await?;

    let segmented = segment(&response);
    let cards = split_cards(&segmented.job_section);
    info!(
        "Segmented response: {} matches, {} unparsed blocks",
        segmented.matches.len(),
        segmented.unparsed_blocks
    );

    state
        .sessions
        .with_mut(params.session_id, |session| {
            session.record_history(&profile.name, &response);
            session.job_section = Some(segmented.job_section.clone());
            session.job_matches = segmented.matches.clone();
        })
        .ok_or(AppError::SessionNotFound)?;

    if profile.tts_enabled {
        speak_in_background(state.speech.clone(), response.clone());
    }

    Ok(Json(RecommendResponse {
        branch: outcome.branch,
        filtered_count,
        considered_count: top.len(),
        cards,
        job_section: segmented.job_section,
        interview_section: segmented.interview_section,
        matches: segmented.matches,
        unparsed_blocks: segmented.unparsed_blocks,
        raw_response: response,
    }))
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub card_index: usize,
    pub choice: FeedbackChoice,
}

/// POST /api/v1/recommendations/feedback
/// Append-only; indices refer to the card list of the most recent
/// recommendation render and are not re-validated after a re-filter.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
    Json(request): Json<FeedbackRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .with_mut(params.session_id, |session| {
            session.feedback.insert(request.card_index, request.choice);
        })
        .ok_or(AppError::SessionNotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct AppliedRequest {
    pub card_index: usize,
}

/// POST /api/v1/recommendations/applied
pub async fn handle_mark_applied(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
    Json(request): Json<AppliedRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .with_mut(params.session_id, |session| {
            session.applied.push(request.card_index);
        })
        .ok_or(AppError::SessionNotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    /// Cards of the most recent recommendation render, for re-display.
    pub cards: Vec<String>,
    pub feedback: HashMap<usize, FeedbackChoice>,
    pub applied: Vec<usize>,
}

/// GET /api/v1/recommendations/activity
/// The stored cards plus the session's feedback and applied records, so the
/// page can re-render marks without re-running the pipeline.
pub async fn handle_activity(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
) -> Result<Json<ActivityResponse>, AppError> {
    let response = state
        .sessions
        .with(params.session_id, |session| ActivityResponse {
            cards: session
                .job_section
                .as_deref()
                .map(split_cards)
                .unwrap_or_default(),
            feedback: session.feedback.clone(),
            applied: session.applied.clone(),
        })
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(response))
}

/// GET /api/v1/history
/// The session's conversation log, oldest first.
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
) -> Result<Json<Vec<HistoryTurn>>, AppError> {
    let history = state
        .sessions
        .with(params.session_id, |session| session.history.clone())
        .ok_or(AppError::SessionNotFound)?;
    Ok(Json(history))
}
