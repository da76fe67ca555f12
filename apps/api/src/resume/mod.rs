// Resume page: extra-detail form → LLM resume text → monospace PDF.

pub mod handlers;
pub mod latex;
pub mod prompts;
pub mod sanitize;
