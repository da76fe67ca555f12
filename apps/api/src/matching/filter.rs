//! Listing Filter — narrows the full job catalog to a candidate set using
//! education, seniority, and skill heuristics from the profile.
//!
//! The pipeline is pure and deterministic: dedup → education gate →
//! branch-specific keyword filter intersected with the seniority mask.
//! Exactly one of four branches fires, tested in fixed priority order.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::listing::Listing;
use crate::models::profile::Profile;

// ────────────────────────────────────────────────────────────────────────────
// Keyword tables
// ────────────────────────────────────────────────────────────────────────────

/// Education labels at or below associate level, matched by substring.
const EDUCATION_GATE_TERMS: &[&str] =
    &["high school", "secondary", "ged", "diploma", "associate"];

/// Degree mentions that disqualify a listing for gated education levels.
const DEGREE_TERMS: &[&str] = &["bachelor", "master"];

/// Titles containing any of these are excluded in every branch.
const SENIORITY_TERMS: &[&str] = &["manager", "senior", "director", "vp", "lead"];

const TECHNICAL_SKILL_TERMS: &[&str] =
    &["python", "java", "sql", "software", "developer", "engineer"];
const TECHNICAL_TITLE_TERMS: &[&str] = &["software", "developer", "engineer"];

const SERVICE_SKILL_TERMS: &[&str] = &["pos", "cash handling", "customer service"];
const SERVICE_TITLE_TERMS: &[&str] = &["cashier", "clerk", "associate", "grocery"];

/// Vision branch, customer-service-oriented roles.
const VISION_SUPPORT_TERMS: &[&str] = &[
    "customer",
    "support",
    "chat",
    "accessibility",
    "remote",
    "assistive",
    "reader",
];
/// Vision branch, all other roles.
const VISION_DATA_TERMS: &[&str] = &["screen reader", "qa", "data entry", "accessibility"];

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Which of the four mutually exclusive keyword filters fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterBranch {
    Technical,
    ServiceRetail,
    VisionAccessibility,
    Fallback,
}

/// The surviving candidate set plus the branch that produced it.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub listings: Vec<Listing>,
    pub branch: FilterBranch,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full filter pipeline against the read-only catalog.
pub fn filter_listings(catalog: &[Listing], profile: &Profile) -> FilterOutcome {
    let mut candidates = dedup_listings(catalog);

    if education_gate_applies(profile) {
        candidates.retain(|listing| {
            let description = listing.description.to_lowercase();
            !DEGREE_TERMS.iter().any(|term| description.contains(term))
        });
    }

    let branch = select_branch(profile);
    let role = profile.preferred_role.to_lowercase();

    let listings = match branch {
        FilterBranch::Technical => candidates
            .into_iter()
            .filter(|l| passes_seniority_mask(l) && title_contains_any(l, TECHNICAL_TITLE_TERMS))
            .collect(),
        FilterBranch::ServiceRetail => candidates
            .into_iter()
            .filter(|l| passes_seniority_mask(l) && title_contains_any(l, SERVICE_TITLE_TERMS))
            .collect(),
        FilterBranch::VisionAccessibility => {
            let terms = if role.contains("customer service") {
                VISION_SUPPORT_TERMS
            } else {
                VISION_DATA_TERMS
            };
            candidates
                .into_iter()
                .filter(|l| {
                    passes_seniority_mask(l)
                        && (title_contains_any(l, terms) || description_contains_any(l, terms))
                })
                .collect()
        }
        FilterBranch::Fallback => candidates
            .into_iter()
            .filter(passes_seniority_mask)
            .collect(),
    };

    FilterOutcome { listings, branch }
}

/// Drops rows whose (title, company) pair duplicates an earlier row.
/// Idempotent: running it twice yields the same result as once.
pub fn dedup_listings(catalog: &[Listing]) -> Vec<Listing> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|listing| seen.insert(listing.dedup_key()))
        .cloned()
        .collect()
}

/// True when the profile's education level is at or below associate,
/// matched by substring against the level's display label.
fn education_gate_applies(profile: &Profile) -> bool {
    let label = profile.education.label().to_lowercase();
    EDUCATION_GATE_TERMS.iter().any(|term| label.contains(term))
}

/// Picks the keyword-category branch. Priority order is fixed: technical,
/// then service/retail, then vision-accessibility, then fallback.
fn select_branch(profile: &Profile) -> FilterBranch {
    let skill_string = profile.skill_string();

    if TECHNICAL_SKILL_TERMS
        .iter()
        .any(|term| skill_string.contains(term))
    {
        return FilterBranch::Technical;
    }

    let role = profile.preferred_role.to_lowercase();
    if role.contains("cashier")
        || SERVICE_SKILL_TERMS
            .iter()
            .any(|term| skill_string.contains(term))
    {
        return FilterBranch::ServiceRetail;
    }

    // `.first()` keeps this safe for profiles with an empty disability list.
    let vision_first = profile
        .disabilities
        .first()
        .map(|d| d.label().to_lowercase().contains("vision"))
        .unwrap_or(false);
    let remote_setup = profile
        .work_setups
        .iter()
        .any(|setup| setup.label().to_lowercase().contains("remote"));
    if vision_first && remote_setup {
        return FilterBranch::VisionAccessibility;
    }

    FilterBranch::Fallback
}

fn passes_seniority_mask(listing: &Listing) -> bool {
    let title = listing.title.to_lowercase();
    !SENIORITY_TERMS.iter().any(|term| title.contains(term))
}

fn title_contains_any(listing: &Listing, terms: &[&str]) -> bool {
    let title = listing.title.to_lowercase();
    terms.iter().any(|term| title.contains(term))
}

fn description_contains_any(listing: &Listing, terms: &[&str]) -> bool {
    let description = listing.description.to_lowercase();
    terms.iter().any(|term| description.contains(term))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
