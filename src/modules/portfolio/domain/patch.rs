// src/modules/portfolio/domain/patch.rs

use serde::{Deserialize, Serialize};

use super::entities::{Education, Experience, PersonalInfo, Project, Skill, SkillLevel, SocialLink};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear (None for optional fields, empty for required ones)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }
}

impl<T: Clone + Default> PatchField<T> {
    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn apply(&self, target: &mut T) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = T::default(),
            PatchField::Value(v) => *target = v.clone(),
        }
    }

    pub fn apply_optional(&self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v.clone()),
        }
    }
}

/// A typed field patch for one entry shape.
pub trait EntryPatch {
    type Entry: Clone;

    /// Returns `entry` with every set field of the patch applied.
    fn merge_into(&self, entry: &Self::Entry) -> Self::Entry;
}

/// Trims entries, drops empty ones and keeps only the first occurrence of each.
pub fn normalize_technologies(technologies: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(technologies.len());
    for tech in technologies {
        let tech = tech.trim();
        if !tech.is_empty() && !out.iter().any(|t| t == tech) {
            out.push(tech.to_string());
        }
    }
    out
}

//
// ──────────────────────────────────────────────────────────
// Patches
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonalInfoPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub bio: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub email: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub phone: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub location: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub avatar: PatchField<String>,
}

impl EntryPatch for PersonalInfoPatch {
    type Entry = PersonalInfo;

    fn merge_into(&self, entry: &PersonalInfo) -> PersonalInfo {
        let mut next = entry.clone();
        self.name.apply(&mut next.name);
        self.title.apply(&mut next.title);
        self.bio.apply(&mut next.bio);
        self.email.apply(&mut next.email);
        self.phone.apply_optional(&mut next.phone);
        self.location.apply_optional(&mut next.location);
        self.avatar.apply_optional(&mut next.avatar);
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SocialLinkPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub platform: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub url: PatchField<String>,
}

impl EntryPatch for SocialLinkPatch {
    type Entry = SocialLink;

    fn merge_into(&self, entry: &SocialLink) -> SocialLink {
        let mut next = entry.clone();
        self.platform.apply(&mut next.platform);
        self.url.apply(&mut next.url);
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub level: PatchField<SkillLevel>,
}

impl EntryPatch for SkillPatch {
    type Entry = Skill;

    fn merge_into(&self, entry: &Skill) -> Skill {
        let mut next = entry.clone();
        self.name.apply(&mut next.name);
        self.level.apply(&mut next.level);
        next
    }
}

/// `technologies`: Value(vec) replaces the whole list after normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub technologies: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub image_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub live_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub github_url: PatchField<String>,
}

impl EntryPatch for ProjectPatch {
    type Entry = Project;

    fn merge_into(&self, entry: &Project) -> Project {
        let mut next = entry.clone();
        self.title.apply(&mut next.title);
        self.description.apply(&mut next.description);
        self.technologies.apply(&mut next.technologies);
        if self.technologies.as_value().is_some() {
            next.technologies = normalize_technologies(&next.technologies);
        }
        self.image_url.apply_optional(&mut next.image_url);
        self.live_url.apply_optional(&mut next.live_url);
        self.github_url.apply_optional(&mut next.github_url);
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperiencePatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub company: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub position: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub start_date: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub end_date: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub current: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub location: PatchField<String>,
}

impl ExperiencePatch {
    /// Sets `current`; switching it on clears `end_date` in the same patch.
    pub fn set_current(current: bool) -> Self {
        Self {
            current: PatchField::Value(current),
            end_date: if current {
                PatchField::Null
            } else {
                PatchField::Unset
            },
            ..Default::default()
        }
    }
}

impl EntryPatch for ExperiencePatch {
    type Entry = Experience;

    fn merge_into(&self, entry: &Experience) -> Experience {
        let mut next = entry.clone();
        self.company.apply(&mut next.company);
        self.position.apply(&mut next.position);
        self.start_date.apply(&mut next.start_date);
        self.end_date.apply_optional(&mut next.end_date);
        self.current.apply(&mut next.current);
        self.description.apply(&mut next.description);
        self.location.apply_optional(&mut next.location);
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EducationPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub institution: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub degree: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub field: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub start_date: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub end_date: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub current: PatchField<bool>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
}

impl EducationPatch {
    /// Sets `current`; switching it on clears `end_date` in the same patch.
    pub fn set_current(current: bool) -> Self {
        Self {
            current: PatchField::Value(current),
            end_date: if current {
                PatchField::Null
            } else {
                PatchField::Unset
            },
            ..Default::default()
        }
    }
}

impl EntryPatch for EducationPatch {
    type Entry = Education;

    fn merge_into(&self, entry: &Education) -> Education {
        let mut next = entry.clone();
        self.institution.apply(&mut next.institution);
        self.degree.apply(&mut next.degree);
        self.field.apply(&mut next.field);
        self.start_date.apply(&mut next.start_date);
        self.end_date.apply_optional(&mut next.end_date);
        self.current.apply(&mut next.current);
        self.description.apply_optional(&mut next.description);
        next
    }
}
