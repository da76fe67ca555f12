//! Prompt assembly for the recommendation request. The card format block is
//! load-bearing: the segmenter's extraction pattern matches it byte for byte.

use crate::models::listing::ScoredListing;
use crate::models::profile::Profile;

/// Recommendation prompt. Replace `{user_info}`, `{listing_count}`, and
/// `{listings_text}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"You are a job recommendation assistant that helps people with disabilities find inclusive, accessible, and meaningful employment opportunities based on their background and preferences.

Using the profile below, recommend real jobs that best match their skills, work setup preferences, schedule, and accommodation needs.

🔎 Core Principles:
- Prioritize **entry-level** or **trainable roles** unless the user's education and experience suggest readiness for more advanced positions.
- Tailor recommendations to align with the user's **listed disabilities and required accommodations**. Consider accessibility needs such as remote options, screen reader compatibility, or non-verbal communication.
- Avoid recommending jobs that inherently conflict with the user's accessibility requirements — unless the job explicitly includes accommodations.
- Respect the user's **preferred role** and **skillset**, but offer alternatives if a better match exists based on their profile.

💡 Matching Tips:
- If the user has technical skills (e.g., Python, SQL), suggest relevant **junior tech roles**.
- If the user has customer service skills, suggest **chat-based**, **remote**, or **inclusive support roles**.
- If the user has limited formal skills or education, suggest **trainable**, **entry-level**, or **supported employment** opportunities.

🛑 DO NOT:
- Make up job titles, companies, or links.
- Recommend inaccessible roles without clearly noted accommodations.

✅ DO:
- Use actual job listings provided below.
- Be thoughtful and inclusive in your reasoning.
- Provide variety but always justify why each job fits.

---

👤 User Profile:
{user_info}

🧾 Job Listings ({listing_count} total):
{listings_text}

---

🎯 Return the **top 10 job matches** that best fit the user's profile, separated by `---` lines. Format each job EXACTLY as:

### 📌 {Job Title} at {Company}

**Company Overview:** one or two sentences

**Job Description:** short summary

**Why this is a good fit:** technical + accessibility reasoning

**Application Link:** [Apply here](URL)

---

💬 Then, include an **Interview Advice Card** section starting with the exact heading "💬 Interview Advice Card", with tips tailored to the user's background, disability, and role goals."#;

/// Builds the full recommendation prompt for the top-ranked candidates.
pub fn build_recommendation_prompt(profile: &Profile, candidates: &[ScoredListing]) -> String {
    let user_info = format!(
        "Name: {}\nDisability: {}\nEducation: {}\nSkills: {}\nWork Setup Preference: {}\nAccommodations Needed: {}\nSchedule: {}\nExperience: {}\nPreferred Role: {}",
        profile.name,
        profile.disability_labels().join(", "),
        profile.education.label(),
        profile.skills.join(", "),
        profile.work_setup_labels().join(", "),
        profile.accommodation_labels().join(", "),
        profile.schedule.label(),
        profile.experience_level.label(),
        profile.preferred_role,
    );

    let listings_text = candidates
        .iter()
        .map(|scored| {
            let listing = &scored.listing;
            format!(
                "Job Title: {}\nCompany Info: {}\nDescription: {}\nLink: [Apply here]({})",
                listing.title,
                listing.company_info.as_deref().unwrap_or("N/A"),
                listing.description,
                listing.link,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{user_info}", &user_info)
        .replace("{listing_count}", &candidates.len().to_string())
        .replace("{listings_text}", &listings_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::Listing;
    use crate::models::profile::{
        DisabilityCategory, EducationLevel, ExperienceBucket, Profile, SchedulePreference,
        WorkSetup,
    };

    fn profile() -> Profile {
        Profile {
            name: "Rowan Ellis".to_string(),
            email: "rowan@example.com".to_string(),
            phone: None,
            disabilities: vec![DisabilityCategory::HearingImpairment],
            other_disability: None,
            accommodations: vec![],
            education: EducationLevel::Associate,
            skills: vec!["Excel".to_string(), "Data Analysis".to_string()],
            work_setups: vec![WorkSetup::Hybrid],
            schedule: SchedulePreference::PartTime,
            experience_level: ExperienceBucket::ZeroToOne,
            preferred_role: "Data Clerk".to_string(),
            wants_resume: true,
            wants_recommendations: true,
            tts_enabled: false,
        }
    }

    fn scored(title: &str, info: Option<&str>) -> ScoredListing {
        ScoredListing {
            listing: Listing {
                title: title.to_string(),
                company_name: None,
                company_info: info.map(str::to_string),
                description: "desc".to_string(),
                link: "http://apply".to_string(),
            },
            relevance: 1,
        }
    }

    #[test]
    fn test_prompt_embeds_profile_and_listing_count() {
        let prompt = build_recommendation_prompt(
            &profile(),
            &[scored("Data Clerk", Some("Small firm")), scored("Typist", None)],
        );
        assert!(prompt.contains("Name: Rowan Ellis"));
        assert!(prompt.contains("Experience: 0-1 years"));
        assert!(prompt.contains("Preferred Role: Data Clerk"));
        assert!(prompt.contains("Job Listings (2 total)"));
        assert!(prompt.contains("Job Title: Data Clerk"));
        assert!(prompt.contains("Company Info: Small firm"));
    }

    #[test]
    fn test_missing_company_info_renders_as_na() {
        let prompt = build_recommendation_prompt(&profile(), &[scored("Typist", None)]);
        assert!(prompt.contains("Company Info: N/A"));
    }

    #[test]
    fn test_prompt_pins_the_card_format_for_the_segmenter() {
        let prompt = build_recommendation_prompt(&profile(), &[]);
        assert!(prompt.contains("### 📌"));
        assert!(prompt.contains("**Application Link:** [Apply here](URL)"));
        assert!(prompt.contains("💬 Interview Advice Card"));
    }

    #[test]
    fn test_no_unresolved_placeholders() {
        let prompt = build_recommendation_prompt(&profile(), &[scored("Typist", None)]);
        assert!(!prompt.contains("{user_info}"));
        assert!(!prompt.contains("{listing_count}"));
        assert!(!prompt.contains("{listings_text}"));
    }
}
