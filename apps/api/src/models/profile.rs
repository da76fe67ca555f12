//! Job-seeker profile — the structured record every downstream stage consumes.
//!
//! A profile is created or overwritten wholesale on each submission; it is
//! never partially merged. Ordering of the multi-select fields is preserved
//! because the filter inspects the FIRST disability and the ranker walks the
//! skill list as submitted (duplicates included).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabilityCategory {
    Physical,
    VisionImpairment,
    HearingImpairment,
    CognitiveOrLearning,
    MentalHealth,
    ChronicIllness,
    Neurodivergent,
    Other,
}

impl DisabilityCategory {
    /// Display label, matching the intake form wording. The vision branch of
    /// the listing filter substring-matches against this text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Physical => "Physical Disability (e.g., wheelchair user, limb impairment)",
            Self::VisionImpairment => "Vision Impairment (e.g., low vision, blindness)",
            Self::HearingImpairment => "Hearing Impairment (e.g., hard of hearing, deaf)",
            Self::CognitiveOrLearning => "Cognitive or Learning Disability (e.g., dyslexia, ADHD)",
            Self::MentalHealth => "Mental Health Condition (e.g., anxiety, depression)",
            Self::ChronicIllness => "Chronic Illness (e.g., arthritis, multiple sclerosis)",
            Self::Neurodivergent => "Neurodivergent (e.g., autism spectrum, Asperger's)",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    WheelchairAccessible,
    ScreenReaderFriendly,
    SignLanguageOrCaptioning,
    FlexibleHours,
    RemoteWork,
    ErgonomicEquipment,
    AssistiveTechnology,
    Other,
}

impl Accommodation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::WheelchairAccessible => "Wheelchair-accessible workspace",
            Self::ScreenReaderFriendly => "Screen reader-friendly environment",
            Self::SignLanguageOrCaptioning => "Sign language interpreter or captioning",
            Self::FlexibleHours => "Flexible work hours",
            Self::RemoteWork => "Remote work options",
            Self::ErgonomicEquipment => "Ergonomic equipment",
            Self::AssistiveTechnology => "Assistive technology (e.g., speech-to-text software)",
            Self::Other => "Other",
        }
    }
}

/// Highest education level. The education gate in the listing filter matches
/// substrings of the label, so "High School Diploma or GED" trips the
/// at-or-below-associate rule via "high school", "ged", and "diploma".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    NoFormalEducation,
    HighSchoolOrGed,
    Associate,
    Bachelor,
    MasterOrHigher,
    Vocational,
}

impl EducationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoFormalEducation => "No formal education",
            Self::HighSchoolOrGed => "High School Diploma or GED",
            Self::Associate => "Associate's Degree",
            Self::Bachelor => "Bachelor's Degree",
            Self::MasterOrHigher => "Master's Degree or Higher",
            Self::Vocational => "Vocational Training/Certification",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkSetup {
    FullyRemote,
    Hybrid,
    InOffice,
    OpenToAny,
}

impl WorkSetup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullyRemote => "Fully remote (Work from home)",
            Self::Hybrid => "Hybrid (Mix of remote & in-office)",
            Self::InOffice => "In-office",
            Self::OpenToAny => "Open to any",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulePreference {
    FullTime,
    PartTime,
    FreelanceContract,
    Internship,
}

impl SchedulePreference {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time (40+ hours/week)",
            Self::PartTime => "Part-time (Less than 30 hours/week)",
            Self::FreelanceContract => "Freelance / Contract",
            Self::Internship => "Internship / Apprenticeship",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceBucket {
    ZeroToOne,
    OneToThree,
    ThreeToFive,
    FiveToSeven,
    SevenPlus,
}

impl ExperienceBucket {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ZeroToOne => "0-1 years",
            Self::OneToThree => "1-3 years",
            Self::ThreeToFive => "3-5 years",
            Self::FiveToSeven => "5-7 years",
            Self::SevenPlus => "7+ years",
        }
    }
}

/// The full job-seeker profile, submitted in one piece from the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub disabilities: Vec<DisabilityCategory>,
    /// Free-text elaboration when `disabilities` contains `Other`.
    #[serde(default)]
    pub other_disability: Option<String>,
    #[serde(default)]
    pub accommodations: Vec<Accommodation>,
    pub education: EducationLevel,
    /// Union of selected technical/soft/industry tags plus free-text
    /// additions, in selection order. Duplicates are NOT removed.
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_setups: Vec<WorkSetup>,
    pub schedule: SchedulePreference,
    pub experience_level: ExperienceBucket,
    #[serde(default)]
    pub preferred_role: String,
    #[serde(default = "default_true")]
    pub wants_resume: bool,
    #[serde(default = "default_true")]
    pub wants_recommendations: bool,
    #[serde(default)]
    pub tts_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Profile {
    /// Lowercased, space-joined skill list. This is the haystack for the
    /// filter's branch guards and the token source for the relevance ranker.
    pub fn skill_string(&self) -> String {
        self.skills.join(" ").to_lowercase()
    }

    pub fn disability_labels(&self) -> Vec<&'static str> {
        self.disabilities.iter().map(|d| d.label()).collect()
    }

    pub fn accommodation_labels(&self) -> Vec<&'static str> {
        self.accommodations.iter().map(|a| a.label()).collect()
    }

    pub fn work_setup_labels(&self) -> Vec<&'static str> {
        self.work_setups.iter().map(|w| w.label()).collect()
    }
}
