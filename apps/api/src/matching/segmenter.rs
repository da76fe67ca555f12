//! Response Segmenter — splits the model's free-text output into a job
//! section and an interview-advice section, then extracts structured job
//! cards from the former.
//!
//! This is a best-effort extractor, not a strict parser: blocks that deviate
//! from the expected card template are dropped, but the count of dropped
//! blocks is reported so callers can fall back to the raw text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::job_match::MatchedJob;

/// Literal marker that opens the interview-advice section. The split keeps
/// the marker with the trailing segment.
pub const INTERVIEW_MARKER: &str = "💬 Interview Advice Card";

/// Header prefix of a job card block. Used to count blocks the extraction
/// pattern failed to match.
const CARD_HEADER: &str = "### 📌";

static JOB_CARD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)### 📌 (.*?) at (.*?)\n\n\*\*Company Overview:\*\* (.*?)\n\n\*\*Job Description:\*\* (.*?)\n\n\*\*Why this is a good fit:\*\* (.*?)\n\n\*\*Application Link:\*\* \[Apply here\]\((.*?)\)",
    )
    .expect("job card pattern must compile")
});

/// Segmented view of one model response.
#[derive(Debug, Clone, Serialize)]
pub struct Segmented {
    pub job_section: String,
    pub interview_section: String,
    pub matches: Vec<MatchedJob>,
    /// Card headers present in the job section that the extraction pattern
    /// could not fully match.
    pub unparsed_blocks: usize,
}

/// Splits `response` at the first interview marker and extracts job cards.
pub fn segment(response: &str) -> Segmented {
    let (job_section, interview_section) = match response.find(INTERVIEW_MARKER) {
        Some(idx) => (
            response[..idx].trim().to_string(),
            response[idx..].trim().to_string(),
        ),
        None => (response.trim().to_string(), String::new()),
    };

    let matches: Vec<MatchedJob> = JOB_CARD_RE
        .captures_iter(&job_section)
        .map(|caps| MatchedJob {
            title: caps[1].to_string(),
            company: caps[2].to_string(),
            company_overview: caps[3].to_string(),
            description: caps[4].to_string(),
            fit_reason: caps[5].to_string(),
            link: caps[6].to_string(),
        })
        .collect();

    let headers = job_section.matches(CARD_HEADER).count();
    let unparsed_blocks = headers.saturating_sub(matches.len());

    Segmented {
        job_section,
        interview_section,
        matches,
        unparsed_blocks,
    }
}

/// Splits the job section into display cards on the `---` separators the
/// prompt asks the model to emit. Feedback and applied records are keyed by
/// position in this list.
pub fn split_cards(job_section: &str) -> Vec<String> {
    job_section
        .split("---")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN_CARD: &str = "### 📌 Barista at CafeCo\n\n**Company Overview:** A cozy cafe.\n\n**Job Description:** Pull espresso shots.\n\n**Why this is a good fit:** Flexible hours.\n\n**Application Link:** [Apply here](http://x)";

    #[test]
    fn test_golden_card_extracts_one_match() {
        let segmented = segment(GOLDEN_CARD);
        assert_eq!(segmented.matches.len(), 1);
        let job = &segmented.matches[0];
        assert_eq!(job.title, "Barista");
        assert_eq!(job.company, "CafeCo");
        assert_eq!(job.link, "http://x");
        assert_eq!(segmented.unparsed_blocks, 0);
    }

    #[test]
    fn test_card_missing_link_is_dropped_but_counted() {
        let text = "### 📌 Barista at CafeCo\n\n**Company Overview:** A cafe.\n\n**Job Description:** Espresso.\n\n**Why this is a good fit:** Hours.";
        let segmented = segment(text);
        assert!(segmented.matches.is_empty());
        assert_eq!(segmented.unparsed_blocks, 1);
    }

    #[test]
    fn test_missing_marker_leaves_interview_empty() {
        let segmented = segment(GOLDEN_CARD);
        assert!(segmented.interview_section.is_empty());
        assert_eq!(segmented.job_section, GOLDEN_CARD);
    }

    #[test]
    fn test_marker_stays_with_trailing_segment() {
        let text = format!("{GOLDEN_CARD}\n\n💬 Interview Advice Card\n\nBreathe. Prepare.");
        let segmented = segment(&text);
        assert!(segmented.interview_section.starts_with(INTERVIEW_MARKER));
        assert!(!segmented.job_section.contains(INTERVIEW_MARKER));
        assert_eq!(segmented.matches.len(), 1);
    }

    #[test]
    fn test_multiple_cards_all_extracted() {
        let second = "### 📌 Clerk at ShopRight\n\n**Company Overview:** A grocery chain.\n\n**Job Description:** Stock shelves.\n\n**Why this is a good fit:** Entry level.\n\n**Application Link:** [Apply here](http://y)";
        let text = format!("{GOLDEN_CARD}\n\n---\n\n{second}");
        let segmented = segment(&text);
        assert_eq!(segmented.matches.len(), 2);
        assert_eq!(segmented.matches[1].company, "ShopRight");
        assert_eq!(segmented.unparsed_blocks, 0);
    }

    #[test]
    fn test_mixed_good_and_malformed_blocks() {
        let malformed = "### 📌 Mystery at Nowhere\n\njust prose, no fields";
        let text = format!("{GOLDEN_CARD}\n\n---\n\n{malformed}");
        let segmented = segment(&text);
        assert_eq!(segmented.matches.len(), 1);
        assert_eq!(segmented.unparsed_blocks, 1);
    }

    #[test]
    fn test_split_cards_drops_empty_blocks() {
        let cards = split_cards("first card\n\n---\n\n---\n\nsecond card");
        assert_eq!(cards, vec!["first card", "second card"]);
    }

    #[test]
    fn test_empty_response_degrades_to_empty_structures() {
        let segmented = segment("");
        assert!(segmented.job_section.is_empty());
        assert!(segmented.interview_section.is_empty());
        assert!(segmented.matches.is_empty());
        assert_eq!(segmented.unparsed_blocks, 0);
    }
}
