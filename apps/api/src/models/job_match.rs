use serde::{Deserialize, Serialize};

/// A job successfully extracted from the model's free-text recommendation
/// response. Only entries matching the full card pattern are retained;
/// malformed blocks are counted but dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedJob {
    pub title: String,
    pub company: String,
    pub company_overview: String,
    pub description: String,
    pub fit_reason: String,
    pub link: String,
}
