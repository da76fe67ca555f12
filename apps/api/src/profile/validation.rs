//! Profile validation — all failures are collected and reported together so
//! the form can display every issue at once.

use crate::models::profile::Profile;

/// Returns the full list of validation messages; empty means the profile is
/// complete and may be saved.
pub fn validate_profile(profile: &Profile) -> Vec<String> {
    let mut errors = Vec::new();

    if profile.name.trim().is_empty() {
        errors.push("Full Name is required.".to_string());
    }
    if profile.email.trim().is_empty() || !profile.email.contains('@') {
        errors.push("A valid Email Address is required.".to_string());
    }
    if profile.disabilities.is_empty() {
        errors.push("Please select at least one type of disability.".to_string());
    }
    if profile.skills.is_empty() {
        errors.push("Please select or enter at least one skill.".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{
        DisabilityCategory, EducationLevel, ExperienceBucket, Profile, SchedulePreference,
    };

    fn complete_profile() -> Profile {
        Profile {
            name: "Noa Reyes".to_string(),
            email: "noa@example.com".to_string(),
            phone: None,
            disabilities: vec![DisabilityCategory::Neurodivergent],
            other_disability: None,
            accommodations: vec![],
            education: EducationLevel::Bachelor,
            skills: vec!["Communication".to_string()],
            work_setups: vec![],
            schedule: SchedulePreference::FullTime,
            experience_level: ExperienceBucket::ThreeToFive,
            preferred_role: String::new(),
            wants_resume: true,
            wants_recommendations: true,
            tts_enabled: false,
        }
    }

    #[test]
    fn test_complete_profile_passes() {
        assert!(validate_profile(&complete_profile()).is_empty());
    }

    #[test]
    fn test_all_failures_are_collected_together() {
        let mut profile = complete_profile();
        profile.name = "  ".to_string();
        profile.email = "not-an-email".to_string();
        profile.disabilities.clear();
        profile.skills.clear();
        let errors = validate_profile(&profile);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_email_requires_at_sign() {
        let mut profile = complete_profile();
        profile.email = "noa.example.com".to_string();
        let errors = validate_profile(&profile);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Email"));
    }

    #[test]
    fn test_whitespace_only_email_is_rejected() {
        let mut profile = complete_profile();
        profile.email = "   ".to_string();
        assert_eq!(validate_profile(&profile).len(), 1);
    }
}
