use serde::{Deserialize, Serialize};
use std::fmt;

pub const DATA_URL_PREFIX: &str = "data:";

/// Platforms offered to the user when adding a social link.
/// Free text is still accepted.
pub const PLATFORM_SUGGESTIONS: &[&str] = &[
    "GitHub",
    "LinkedIn",
    "Twitter",
    "Instagram",
    "Facebook",
    "Website",
    "Portfolio",
];

/// Stable key of a project, experience or education entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an avatar or project image comes from, judged by the string prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    None,
    Inline,
    External,
}

impl ImageSource {
    pub fn of(value: Option<&str>) -> Self {
        match value {
            None => ImageSource::None,
            Some(v) if v.is_empty() => ImageSource::None,
            Some(v) if v.starts_with(DATA_URL_PREFIX) => ImageSource::Inline,
            Some(_) => ImageSource::External,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl PersonalInfo {
    pub fn avatar_source(&self) -> ImageSource {
        ImageSource::of(self.avatar.as_deref())
    }
}

/// Icon family for a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Website,
}

impl SocialPlatform {
    /// Case-insensitive substring match; anything unrecognised is a website.
    pub fn classify(platform: &str) -> Self {
        let lower = platform.to_lowercase();
        if lower.contains("github") {
            SocialPlatform::Github
        } else if lower.contains("linkedin") {
            SocialPlatform::Linkedin
        } else if lower.contains("twitter") {
            SocialPlatform::Twitter
        } else if lower.contains("instagram") {
            SocialPlatform::Instagram
        } else if lower.contains("facebook") {
            SocialPlatform::Facebook
        } else {
            SocialPlatform::Website
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn proficiency_percent(self) -> u8 {
        match self {
            SkillLevel::Beginner => 25,
            SkillLevel::Intermediate => 50,
            SkillLevel::Advanced => 75,
            SkillLevel::Expert => 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    /// Insertion ordered, no duplicates.
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

impl Project {
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            image_url: None,
            live_url: None,
            github_url: None,
        }
    }

    pub fn image_source(&self) -> ImageSource {
        ImageSource::of(self.image_url.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl Experience {
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: None,
            current: false,
            description: String::new(),
            location: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Education {
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: None,
            current: false,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#0ea5e9".to_string(),
            secondary_color: "#0369a1".to_string(),
        }
    }
}

/// The aggregate document edited during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            social_links: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
            theme: Some(Theme::default()),
        }
    }
}
