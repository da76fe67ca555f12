//! Session-scoped state — profile, extracted matches, feedback, applied
//! records, and the conversation history.
//!
//! One `SessionState` exists per session id, created at session start and
//! discarded with the store. Nothing here is shared across sessions and no
//! lock is ever held across an LLM await: handlers copy what they need out,
//! call the model, then re-lock to write results back.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::job_match::MatchedJob;
use crate::models::profile::Profile;

/// Feedback choice attached to a rendered job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackChoice {
    Helpful,
    NotHelpful,
    Maybe,
}

/// One entry of the append-only conversation history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryTurn {
    /// User label the response was generated for.
    pub label: String,
    pub response: String,
    pub at: DateTime<Utc>,
}

/// Reason a page precondition failed. Returned with a 409 so the caller can
/// redirect deterministically instead of guessing from an ad hoc flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateReason {
    ProfileMissing,
    RecommendationsOptedOut,
    NoJobMatches,
    ResumeNotGenerated,
}

impl GateReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::ProfileMissing => "Please complete your profile first.",
            Self::RecommendationsOptedOut => "You opted out of job recommendations.",
            Self::NoJobMatches => {
                "Please complete your profile and view job recommendations first."
            }
            Self::ResumeNotGenerated => "Generate a resume before downloading it.",
        }
    }
}

/// Query parameter carried by every session-scoped route.
#[derive(Debug, Deserialize)]
pub struct SessionIdQuery {
    pub session_id: Uuid,
}

#[derive(Debug, Default)]
pub struct SessionState {
    pub profile: Option<Profile>,
    /// Job section of the most recent recommendation response, kept for
    /// card re-rendering. Overwritten on every request.
    pub job_section: Option<String>,
    pub job_matches: Vec<MatchedJob>,
    /// Card index → feedback choice. Append-only; indices are NOT
    /// re-validated against later candidate sets.
    pub feedback: HashMap<usize, FeedbackChoice>,
    /// Card indices marked as applied, in marking order.
    pub applied: Vec<usize>,
    pub history: Vec<HistoryTurn>,
    pub resume_text: Option<String>,
}

impl SessionState {
    /// Recommendations page gate: completed profile, not opted out.
    pub fn recommendations_gate(&self) -> Result<&Profile, GateReason> {
        let profile = self.profile.as_ref().ok_or(GateReason::ProfileMissing)?;
        if !profile.wants_recommendations {
            return Err(GateReason::RecommendationsOptedOut);
        }
        Ok(profile)
    }

    /// Resume page gate: completed profile plus at least one extracted match.
    pub fn resume_gate(&self) -> Result<&Profile, GateReason> {
        let profile = self.profile.as_ref().ok_or(GateReason::ProfileMissing)?;
        if self.job_matches.is_empty() {
            return Err(GateReason::NoJobMatches);
        }
        Ok(profile)
    }

    pub fn record_history(&mut self, label: &str, response: &str) {
        self.history.push(HistoryTurn {
            label: label.to_string(),
            response: response.to_string(),
            at: Utc::now(),
        });
    }
}

/// In-memory session registry shared across handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(id, SessionState::default());
        id
    }

    /// Runs `f` against the session's state. `None` if the session is unknown.
    pub fn with<R>(&self, id: Uuid, f: impl FnOnce(&SessionState) -> R) -> Option<R> {
        let guard = self.inner.read().expect("session store lock poisoned");
        guard.get(&id).map(f)
    }

    /// Runs `f` against the session's mutable state. `None` if unknown.
    pub fn with_mut<R>(&self, id: Uuid, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        let mut guard = self.inner.write().expect("session store lock poisoned");
        guard.get_mut(&id).map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{
        DisabilityCategory, EducationLevel, ExperienceBucket, SchedulePreference,
    };

    fn profile(wants_recommendations: bool) -> Profile {
        Profile {
            name: "Kai Morgan".to_string(),
            email: "kai@example.com".to_string(),
            phone: None,
            disabilities: vec![DisabilityCategory::ChronicIllness],
            other_disability: None,
            accommodations: vec![],
            education: EducationLevel::Vocational,
            skills: vec!["Retail".to_string()],
            work_setups: vec![],
            schedule: SchedulePreference::PartTime,
            experience_level: ExperienceBucket::OneToThree,
            preferred_role: String::new(),
            wants_resume: true,
            wants_recommendations,
            tts_enabled: false,
        }
    }

    fn matched_job() -> MatchedJob {
        MatchedJob {
            title: "Clerk".to_string(),
            company: "ShopRight".to_string(),
            company_overview: "grocery".to_string(),
            description: "stock".to_string(),
            fit_reason: "entry level".to_string(),
            link: "http://apply".to_string(),
        }
    }

    #[test]
    fn test_store_create_and_lookup() {
        let store = SessionStore::new();
        let id = store.create();
        assert!(store.with(id, |s| s.profile.is_none()).unwrap());
        assert!(store.with(Uuid::new_v4(), |_| ()).is_none());
    }

    #[test]
    fn test_recommendations_gate_requires_profile() {
        let state = SessionState::default();
        assert_eq!(
            state.recommendations_gate().unwrap_err(),
            GateReason::ProfileMissing
        );
    }

    #[test]
    fn test_recommendations_gate_honors_opt_out() {
        let state = SessionState {
            profile: Some(profile(false)),
            ..Default::default()
        };
        assert_eq!(
            state.recommendations_gate().unwrap_err(),
            GateReason::RecommendationsOptedOut
        );
    }

    #[test]
    fn test_resume_gate_requires_matches() {
        let mut state = SessionState {
            profile: Some(profile(true)),
            ..Default::default()
        };
        assert_eq!(state.resume_gate().unwrap_err(), GateReason::NoJobMatches);

        state.job_matches.push(matched_job());
        assert!(state.resume_gate().is_ok());
    }

    #[test]
    fn test_history_is_append_only_and_ordered() {
        let mut state = SessionState::default();
        state.record_history("Kai Morgan", "first response");
        state.record_history("Kai Morgan", "second response");
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].response, "first response");
        assert_eq!(state.history[1].response, "second response");
    }
}
