use actix_web::{get, Responder};
use serde::Serialize;

use crate::modules::portfolio::domain::entities::{
    SkillLevel, SocialPlatform, Theme, PLATFORM_SUGGESTIONS,
};
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
pub struct PlatformOption {
    pub name: &'static str,
    pub kind: SocialPlatform,
}

#[derive(Debug, Serialize)]
pub struct SkillLevelOption {
    pub level: SkillLevel,
    pub proficiency: u8,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorOptions {
    pub platforms: Vec<PlatformOption>,
    pub skill_levels: Vec<SkillLevelOption>,
    pub default_theme: Theme,
}

impl EditorOptions {
    pub fn current() -> Self {
        Self {
            platforms: PLATFORM_SUGGESTIONS
                .iter()
                .map(|&name| PlatformOption {
                    name,
                    kind: SocialPlatform::classify(name),
                })
                .collect(),
            skill_levels: SkillLevel::ALL
                .iter()
                .map(|&level| SkillLevelOption {
                    level,
                    proficiency: level.proficiency_percent(),
                })
                .collect(),
            default_theme: Theme::default(),
        }
    }
}

/// Vocabulary the editor offers: platform suggestions, skill levels, theme.
#[get("/api/portfolio/options")]
pub async fn get_editor_options_handler() -> impl Responder {
    ApiResponse::success(EditorOptions::current())
}
