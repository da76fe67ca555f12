//! Relevance Ranker — orders the candidate set by profile-skill overlap.
//!
//! The score is intentionally crude: one point per skill token found as a
//! substring of the lowercased title+description. No stemming, no
//! normalization, and duplicate tokens in the skill list each count.

use crate::models::listing::{Listing, ScoredListing};
use crate::models::profile::Profile;

/// Scores each candidate and sorts descending by relevance. The sort is
/// stable, so equal scores preserve the filter-stage order.
pub fn rank_listings(candidates: Vec<Listing>, profile: &Profile) -> Vec<ScoredListing> {
    let skill_string = profile.skill_string();
    let tokens: Vec<&str> = skill_string.split_whitespace().collect();

    let mut scored: Vec<ScoredListing> = candidates
        .into_iter()
        .map(|listing| {
            let relevance = relevance_score(&listing, &tokens);
            ScoredListing { listing, relevance }
        })
        .collect();

    scored.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    scored
}

fn relevance_score(listing: &Listing, tokens: &[&str]) -> usize {
    let text = listing.search_text();
    tokens.iter().filter(|token| text.contains(**token)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{
        DisabilityCategory, EducationLevel, ExperienceBucket, Profile, SchedulePreference,
    };

    fn listing(title: &str, description: &str) -> Listing {
        Listing {
            title: title.to_string(),
            company_name: None,
            company_info: None,
            description: description.to_string(),
            link: String::new(),
        }
    }

    fn profile_with_skills(skills: &[&str]) -> Profile {
        Profile {
            name: "Avery Quinn".to_string(),
            email: "avery@example.com".to_string(),
            phone: None,
            disabilities: vec![DisabilityCategory::Physical],
            other_disability: None,
            accommodations: vec![],
            education: EducationLevel::Bachelor,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            work_setups: vec![],
            schedule: SchedulePreference::FullTime,
            experience_level: ExperienceBucket::OneToThree,
            preferred_role: String::new(),
            wants_resume: true,
            wants_recommendations: true,
            tts_enabled: false,
        }
    }

    #[test]
    fn test_score_counts_tokens_present_in_title_and_description() {
        let profile = profile_with_skills(&["python", "sql"]);
        let ranked = rank_listings(
            vec![listing("Python Developer", "SQL experience required")],
            &profile,
        );
        assert_eq!(ranked[0].relevance, 2);
    }

    #[test]
    fn test_duplicate_tokens_each_count() {
        let profile = profile_with_skills(&["sql", "SQL"]);
        let ranked = rank_listings(vec![listing("Analyst", "sql reporting")], &profile);
        assert_eq!(ranked[0].relevance, 2);
    }

    #[test]
    fn test_absent_tokens_score_zero() {
        let profile = profile_with_skills(&["kubernetes"]);
        let ranked = rank_listings(vec![listing("Barista", "espresso drinks")], &profile);
        assert_eq!(ranked[0].relevance, 0);
    }

    #[test]
    fn test_sort_is_descending() {
        let profile = profile_with_skills(&["python", "sql"]);
        let ranked = rank_listings(
            vec![
                listing("Barista", "espresso"),
                listing("Python Developer", "sql required"),
                listing("Data Clerk", "sql entry"),
            ],
            &profile,
        );
        assert_eq!(ranked[0].listing.title, "Python Developer");
        assert_eq!(ranked[1].listing.title, "Data Clerk");
        assert_eq!(ranked[2].listing.title, "Barista");
    }

    #[test]
    fn test_equal_scores_keep_filter_stage_order() {
        let profile = profile_with_skills(&["sql"]);
        let ranked = rank_listings(
            vec![
                listing("First Analyst", "sql"),
                listing("Second Analyst", "sql"),
            ],
            &profile,
        );
        assert_eq!(ranked[0].listing.title, "First Analyst");
        assert_eq!(ranked[1].listing.title, "Second Analyst");
    }

    #[test]
    fn test_empty_skill_list_scores_everything_zero() {
        let profile = profile_with_skills(&[]);
        let ranked = rank_listings(
            vec![listing("Greeter", "welcome"), listing("Clerk", "stock")],
            &profile,
        );
        assert!(ranked.iter().all(|s| s.relevance == 0));
        assert_eq!(ranked[0].listing.title, "Greeter");
    }
}
