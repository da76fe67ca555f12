use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::models::listing::Listing;
use crate::session::SessionStore;
use crate::speech::SpeechSynthesizer;

/// Shared application state injected into all route handlers via axum
/// extractors. The catalog is loaded once and immutable; all per-user
/// mutation lives inside the session store.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<[Listing]>,
    pub llm: LlmClient,
    pub sessions: SessionStore,
    pub speech: Arc<dyn SpeechSynthesizer>,
}
