//! Prompt assembly for the resume request.

use serde::Deserialize;

use crate::models::job_match::MatchedJob;
use crate::models::profile::Profile;

/// Extra free-text details supplied on the resume form. All optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeFields {
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub certifications: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub summary: String,
}

/// Resume prompt. Replace `{user_info}` and `{jobs_text}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"You are a resume writer. Based on the user's info and the job descriptions, write an ATS-friendly professional resume in plain text with clean formatting.

USER INFO:
{user_info}

MATCHED JOBS:
{jobs_text}

Format:
- Start with name and contact
- Summary section (if given)
- Skills (bullets or comma-separated)
- Education
- Work Experience (tailored to job descriptions)
- Certifications and Projects (optional)
Keep resume under 1 page. Use concise bullet points. Avoid repetition. Return clean plain text only."#;

pub fn build_resume_prompt(
    profile: &Profile,
    fields: &ResumeFields,
    matches: &[MatchedJob],
) -> String {
    let user_info = format!(
        "Name: {}\nEmail: {}\nPhone: {}\nDisability: {}\nEducation: {}\nExperience: {}\nSkills: {}\nCertifications: {}\nProjects: {}\nLinkedIn: {}\nSummary: {}",
        profile.name,
        profile.email,
        profile.phone.as_deref().unwrap_or(""),
        profile.disability_labels().join(", "),
        fields.education,
        fields.experience,
        profile.skills.join(", "),
        fields.certifications,
        fields.projects,
        fields.linkedin,
        fields.summary,
    );

    let jobs_text = matches
        .iter()
        .map(|job| {
            format!(
                "- {} at {}\n  Description: {}",
                job.title, job.company, job.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    RESUME_PROMPT_TEMPLATE
        .replace("{user_info}", &user_info)
        .replace("{jobs_text}", &jobs_text)
}
