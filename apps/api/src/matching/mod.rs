// Recommendations page: filter → rank → prompt → generate → segment.
// All LLM calls go through llm_client — no direct API calls here.

pub mod filter;
pub mod handlers;
pub mod prompts;
pub mod ranking;
pub mod segmenter;
