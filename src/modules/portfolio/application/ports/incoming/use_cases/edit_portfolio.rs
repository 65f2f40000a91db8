use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::portfolio::application::ports::outgoing::{IdGenerator, PortfolioStoreError};
use crate::modules::portfolio::domain::entities::{
    Education, EntryId, Experience, PersonalInfo, Portfolio, Project, Skill, SocialLink, Theme,
};
use crate::modules::portfolio::domain::patch::{
    EducationPatch, EntryPatch, ExperiencePatch, PersonalInfoPatch, ProjectPatch, SkillPatch,
    SocialLinkPatch,
};
use crate::modules::portfolio::domain::sections::{
    add_entry, add_technology, map_keyed, remove_indexed, remove_keyed, remove_technology,
    update_indexed, update_keyed,
};
use crate::modules::portfolio::domain::snapshot::PortfolioSnapshot;

//
// ──────────────────────────────────────────────────────────
// Edit intents
// ──────────────────────────────────────────────────────────
// Wire shape: {"type": "updateProject", "id": "...", "patch": {...}}
//
// Skills and social links are addressed by index, the other lists by id.
// Add commands for id-keyed lists carry no id: one is drawn from the
// IdGenerator when the command is applied.
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PortfolioCommand {
    SetPersonalInfo {
        info: PersonalInfo,
    },
    PatchPersonalInfo {
        patch: PersonalInfoPatch,
    },

    SetSocialLinks {
        links: Vec<SocialLink>,
    },
    AddSocialLink {
        #[serde(default)]
        link: SocialLink,
    },
    UpdateSocialLink {
        index: usize,
        patch: SocialLinkPatch,
    },
    RemoveSocialLink {
        index: usize,
    },

    SetSkills {
        skills: Vec<Skill>,
    },
    AddSkill {
        #[serde(default)]
        skill: Skill,
    },
    UpdateSkill {
        index: usize,
        patch: SkillPatch,
    },
    RemoveSkill {
        index: usize,
    },

    SetProjects {
        projects: Vec<Project>,
    },
    AddProject {
        #[serde(default)]
        patch: ProjectPatch,
    },
    UpdateProject {
        id: EntryId,
        patch: ProjectPatch,
    },
    RemoveProject {
        id: EntryId,
    },
    AddTechnology {
        project_id: EntryId,
        technology: String,
    },
    RemoveTechnology {
        project_id: EntryId,
        technology: String,
    },

    SetExperience {
        experience: Vec<Experience>,
    },
    AddExperience {
        #[serde(default)]
        patch: ExperiencePatch,
    },
    UpdateExperience {
        id: EntryId,
        patch: ExperiencePatch,
    },
    RemoveExperience {
        id: EntryId,
    },
    SetExperienceCurrent {
        id: EntryId,
        current: bool,
    },

    SetEducation {
        education: Vec<Education>,
    },
    AddEducation {
        #[serde(default)]
        patch: EducationPatch,
    },
    UpdateEducation {
        id: EntryId,
        patch: EducationPatch,
    },
    RemoveEducation {
        id: EntryId,
    },
    SetEducationCurrent {
        id: EntryId,
        current: bool,
    },

    SetTheme {
        #[serde(default)]
        theme: Option<Theme>,
    },
}

impl PortfolioCommand {
    /// Short name for logs; never includes field values.
    pub fn kind(&self) -> &'static str {
        match self {
            PortfolioCommand::SetPersonalInfo { .. } => "setPersonalInfo",
            PortfolioCommand::PatchPersonalInfo { .. } => "patchPersonalInfo",
            PortfolioCommand::SetSocialLinks { .. } => "setSocialLinks",
            PortfolioCommand::AddSocialLink { .. } => "addSocialLink",
            PortfolioCommand::UpdateSocialLink { .. } => "updateSocialLink",
            PortfolioCommand::RemoveSocialLink { .. } => "removeSocialLink",
            PortfolioCommand::SetSkills { .. } => "setSkills",
            PortfolioCommand::AddSkill { .. } => "addSkill",
            PortfolioCommand::UpdateSkill { .. } => "updateSkill",
            PortfolioCommand::RemoveSkill { .. } => "removeSkill",
            PortfolioCommand::SetProjects { .. } => "setProjects",
            PortfolioCommand::AddProject { .. } => "addProject",
            PortfolioCommand::UpdateProject { .. } => "updateProject",
            PortfolioCommand::RemoveProject { .. } => "removeProject",
            PortfolioCommand::AddTechnology { .. } => "addTechnology",
            PortfolioCommand::RemoveTechnology { .. } => "removeTechnology",
            PortfolioCommand::SetExperience { .. } => "setExperience",
            PortfolioCommand::AddExperience { .. } => "addExperience",
            PortfolioCommand::UpdateExperience { .. } => "updateExperience",
            PortfolioCommand::RemoveExperience { .. } => "removeExperience",
            PortfolioCommand::SetExperienceCurrent { .. } => "setExperienceCurrent",
            PortfolioCommand::SetEducation { .. } => "setEducation",
            PortfolioCommand::AddEducation { .. } => "addEducation",
            PortfolioCommand::UpdateEducation { .. } => "updateEducation",
            PortfolioCommand::RemoveEducation { .. } => "removeEducation",
            PortfolioCommand::SetEducationCurrent { .. } => "setEducationCurrent",
            PortfolioCommand::SetTheme { .. } => "setTheme",
        }
    }

    /// Derives the next portfolio. Total: unknown ids and out-of-range
    /// indexes leave the affected section as it was.
    pub fn apply_to(self, portfolio: &Portfolio, ids: &dyn IdGenerator) -> Portfolio {
        match self {
            PortfolioCommand::SetPersonalInfo { info } => portfolio.with_personal_info(info),
            PortfolioCommand::PatchPersonalInfo { patch } => {
                portfolio.with_personal_info(patch.merge_into(&portfolio.personal_info))
            }

            PortfolioCommand::SetSocialLinks { links } => portfolio.with_social_links(links),
            PortfolioCommand::AddSocialLink { link } => {
                portfolio.with_social_links(add_entry(&portfolio.social_links, link))
            }
            PortfolioCommand::UpdateSocialLink { index, patch } => portfolio
                .with_social_links(update_indexed(&portfolio.social_links, index, &patch)),
            PortfolioCommand::RemoveSocialLink { index } => {
                portfolio.with_social_links(remove_indexed(&portfolio.social_links, index))
            }

            PortfolioCommand::SetSkills { skills } => portfolio.with_skills(skills),
            PortfolioCommand::AddSkill { skill } => {
                portfolio.with_skills(add_entry(&portfolio.skills, skill))
            }
            PortfolioCommand::UpdateSkill { index, patch } => {
                portfolio.with_skills(update_indexed(&portfolio.skills, index, &patch))
            }
            PortfolioCommand::RemoveSkill { index } => {
                portfolio.with_skills(remove_indexed(&portfolio.skills, index))
            }

            PortfolioCommand::SetProjects { projects } => portfolio.with_projects(projects),
            PortfolioCommand::AddProject { patch } => {
                let project = patch.merge_into(&Project::blank(ids.next_id()));
                portfolio.with_projects(add_entry(&portfolio.projects, project))
            }
            PortfolioCommand::UpdateProject { id, patch } => {
                portfolio.with_projects(update_keyed(&portfolio.projects, &id, &patch))
            }
            PortfolioCommand::RemoveProject { id } => {
                portfolio.with_projects(remove_keyed(&portfolio.projects, &id))
            }
            PortfolioCommand::AddTechnology {
                project_id,
                technology,
            } => portfolio.with_projects(map_keyed(&portfolio.projects, &project_id, |p| {
                add_technology(p, &technology)
            })),
            PortfolioCommand::RemoveTechnology {
                project_id,
                technology,
            } => portfolio.with_projects(map_keyed(&portfolio.projects, &project_id, |p| {
                remove_technology(p, &technology)
            })),

            PortfolioCommand::SetExperience { experience } => portfolio.with_experience(experience),
            PortfolioCommand::AddExperience { patch } => {
                let entry = patch.merge_into(&Experience::blank(ids.next_id()));
                portfolio.with_experience(add_entry(&portfolio.experience, entry))
            }
            PortfolioCommand::UpdateExperience { id, patch } => {
                portfolio.with_experience(update_keyed(&portfolio.experience, &id, &patch))
            }
            PortfolioCommand::RemoveExperience { id } => {
                portfolio.with_experience(remove_keyed(&portfolio.experience, &id))
            }
            PortfolioCommand::SetExperienceCurrent { id, current } => {
                let patch = ExperiencePatch::set_current(current);
                portfolio.with_experience(update_keyed(&portfolio.experience, &id, &patch))
            }

            PortfolioCommand::SetEducation { education } => portfolio.with_education(education),
            PortfolioCommand::AddEducation { patch } => {
                let entry = patch.merge_into(&Education::blank(ids.next_id()));
                portfolio.with_education(add_entry(&portfolio.education, entry))
            }
            PortfolioCommand::UpdateEducation { id, patch } => {
                portfolio.with_education(update_keyed(&portfolio.education, &id, &patch))
            }
            PortfolioCommand::RemoveEducation { id } => {
                portfolio.with_education(remove_keyed(&portfolio.education, &id))
            }
            PortfolioCommand::SetEducationCurrent { id, current } => {
                let patch = EducationPatch::set_current(current);
                portfolio.with_education(update_keyed(&portfolio.education, &id, &patch))
            }

            PortfolioCommand::SetTheme { theme } => portfolio.with_theme(theme),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditPortfolioError {
    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<PortfolioStoreError> for EditPortfolioError {
    fn from(err: PortfolioStoreError) -> Self {
        match err {
            PortfolioStoreError::Unavailable(msg) => EditPortfolioError::StoreError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EditPortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        command: PortfolioCommand,
    ) -> Result<PortfolioSnapshot, EditPortfolioError>;
}
