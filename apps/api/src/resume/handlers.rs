use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::GenerationConfig;
use crate::resume::latex::{render_pdf, resume_filename};
use crate::resume::prompts::{build_resume_prompt, ResumeFields};
use crate::session::{GateReason, SessionIdQuery};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ResumeResponse {
    pub resume_text: String,
    pub pdf_filename: String,
}

/// POST /api/v1/resume
/// Gate: completed profile plus at least one extracted job match. The
/// generated text is stored on the session and passed through unvalidated.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
    Json(fields): Json<ResumeFields>,
) -> Result<Json<ResumeResponse>, AppError> {
    let (profile, matches) = state
        .sessions
        .with(params.session_id, |session| {
            session
                .resume_gate()
                .map(|profile| (profile.clone(), session.job_matches.clone()))
        })
        .ok_or(AppError::SessionNotFound)?
        .map_err(AppError::Gate)?;

    let prompt = build_resume_prompt(&profile, &fields, &matches);
    let resume_text = state
        .llm
        .generate(&prompt, &GenerationConfig::default())
        .await?;
    info!(
        "Resume generated for {} against {} matched jobs",
        profile.name,
        matches.len()
    );

    state
        .sessions
        .with_mut(params.session_id, |session| {
            session.resume_text = Some(resume_text.clone());
        })
        .ok_or(AppError::SessionNotFound)?;

    Ok(Json(ResumeResponse {
        resume_text,
        pdf_filename: resume_filename(&profile.name),
    }))
}

/// GET /api/v1/resume/pdf
/// Compiles the stored resume text to PDF and returns it as a download.
pub async fn handle_download_pdf(
    State(state): State<AppState>,
    Query(params): Query<SessionIdQuery>,
) -> Result<Response, AppError> {
    let (name, resume_text) = state
        .sessions
        .with(params.session_id, |session| {
            let name = session.profile.as_ref().map(|p| p.name.clone());
            name.zip(session.resume_text.clone())
        })
        .ok_or(AppError::SessionNotFound)?
        .ok_or(AppError::Gate(GateReason::ResumeNotGenerated))?;

    let pdf = render_pdf(&resume_text).await?;
    let filename = resume_filename(&name);

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
