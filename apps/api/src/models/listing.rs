use serde::{Deserialize, Serialize};

/// One row of the external job-postings table. Loaded once at startup and
/// treated as read-only for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub company_name: Option<String>,
    pub company_info: Option<String>,
    pub description: String,
    pub link: String,
}

impl Listing {
    /// Dedup key: (title, company) pair. Listings without a company collapse
    /// only against other company-less rows with the same title.
    pub fn dedup_key(&self) -> (String, String) {
        (
            self.title.clone(),
            self.company_name.clone().unwrap_or_default(),
        )
    }

    /// Lowercased title+description haystack used by the relevance ranker.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// A listing carrying its computed relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub relevance: usize,
}
