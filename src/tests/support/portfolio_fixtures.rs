use chrono::{TimeZone, Utc};

use crate::modules::portfolio::domain::entities::{
    EntryId, PersonalInfo, Portfolio, Project, Skill, SkillLevel, SocialLink,
};
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

pub fn sample_personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Ada Lovelace".to_string(),
        title: "Analyst".to_string(),
        bio: "Writes programs for engines that do not exist yet.".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        location: Some("London".to_string()),
        avatar: None,
    }
}

pub fn sample_project(id: &str) -> Project {
    Project {
        title: format!("Project {id}"),
        description: "A sample project".to_string(),
        technologies: vec!["Rust".to_string()],
        ..Project::blank(EntryId::new(id))
    }
}

pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        personal_info: sample_personal_info(),
        social_links: vec![SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/ada".to_string(),
        }],
        skills: vec![Skill {
            name: "Rust".to_string(),
            level: SkillLevel::Expert,
        }],
        projects: vec![sample_project("p1")],
        ..Portfolio::default()
    }
}

pub fn sample_snapshot(revision: u64) -> PortfolioSnapshot {
    PortfolioSnapshot {
        revision,
        updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        portfolio: sample_portfolio(),
    }
}
