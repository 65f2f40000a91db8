// src/modules/portfolio/domain/sections.rs
//
// Pure update operations over a portfolio snapshot. Nothing here mutates its
// input; every function returns a new value. Unknown keys are no-ops.

use super::entities::{
    Education, EntryId, Experience, PersonalInfo, Portfolio, Project, Skill, SocialLink, Theme,
};
use super::patch::EntryPatch;

/// Entries addressed by a stable id rather than by position.
pub trait Keyed {
    fn key(&self) -> &EntryId;
}

impl Keyed for Project {
    fn key(&self) -> &EntryId {
        &self.id
    }
}

impl Keyed for Experience {
    fn key(&self) -> &EntryId {
        &self.id
    }
}

impl Keyed for Education {
    fn key(&self) -> &EntryId {
        &self.id
    }
}

//
// ──────────────────────────────────────────────────────────
// Section replacement
// ──────────────────────────────────────────────────────────
//

impl Portfolio {
    pub fn with_personal_info(&self, personal_info: PersonalInfo) -> Portfolio {
        Portfolio {
            personal_info,
            ..self.clone()
        }
    }

    pub fn with_social_links(&self, social_links: Vec<SocialLink>) -> Portfolio {
        Portfolio {
            social_links,
            ..self.clone()
        }
    }

    pub fn with_skills(&self, skills: Vec<Skill>) -> Portfolio {
        Portfolio {
            skills,
            ..self.clone()
        }
    }

    pub fn with_projects(&self, projects: Vec<Project>) -> Portfolio {
        Portfolio {
            projects,
            ..self.clone()
        }
    }

    pub fn with_experience(&self, experience: Vec<Experience>) -> Portfolio {
        Portfolio {
            experience,
            ..self.clone()
        }
    }

    pub fn with_education(&self, education: Vec<Education>) -> Portfolio {
        Portfolio {
            education,
            ..self.clone()
        }
    }

    pub fn with_theme(&self, theme: Option<Theme>) -> Portfolio {
        Portfolio {
            theme,
            ..self.clone()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Per-entry helpers
// ──────────────────────────────────────────────────────────
//

pub fn add_entry<T: Clone>(section: &[T], entry: T) -> Vec<T> {
    let mut next = section.to_vec();
    next.push(entry);
    next
}

/// Applies `f` to the entry whose key is `key`; every other entry is kept as is.
pub fn map_keyed<T, F>(section: &[T], key: &EntryId, f: F) -> Vec<T>
where
    T: Keyed + Clone,
    F: Fn(&T) -> T,
{
    section
        .iter()
        .map(|entry| {
            if entry.key() == key {
                f(entry)
            } else {
                entry.clone()
            }
        })
        .collect()
}

pub fn update_keyed<T, P>(section: &[T], key: &EntryId, patch: &P) -> Vec<T>
where
    T: Keyed + Clone,
    P: EntryPatch<Entry = T>,
{
    map_keyed(section, key, |entry| patch.merge_into(entry))
}

pub fn remove_keyed<T: Keyed + Clone>(section: &[T], key: &EntryId) -> Vec<T> {
    section
        .iter()
        .filter(|entry| entry.key() != key)
        .cloned()
        .collect()
}

pub fn update_indexed<T, P>(section: &[T], index: usize, patch: &P) -> Vec<T>
where
    T: Clone,
    P: EntryPatch<Entry = T>,
{
    section
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == index {
                patch.merge_into(entry)
            } else {
                entry.clone()
            }
        })
        .collect()
}

pub fn remove_indexed<T: Clone>(section: &[T], index: usize) -> Vec<T> {
    section
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, entry)| entry.clone())
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Project technologies
// ──────────────────────────────────────────────────────────
//

/// No-op when the trimmed name is empty or already listed (exact match).
pub fn add_technology(project: &Project, tech: &str) -> Project {
    let tech = tech.trim();
    if tech.is_empty() || project.technologies.iter().any(|t| t == tech) {
        return project.clone();
    }

    let mut next = project.clone();
    next.technologies.push(tech.to_string());
    next
}

pub fn remove_technology(project: &Project, tech: &str) -> Project {
    Project {
        technologies: project
            .technologies
            .iter()
            .filter(|t| t.as_str() != tech)
            .cloned()
            .collect(),
        ..project.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::domain::entities::SkillLevel;
    use crate::modules::portfolio::domain::patch::{
        ExperiencePatch, PatchField, ProjectPatch, SkillPatch, SocialLinkPatch,
    };

    fn project(id: &str, title: &str) -> Project {
        Project {
            title: title.to_string(),
            ..Project::blank(EntryId::new(id))
        }
    }

    fn projects() -> Vec<Project> {
        vec![project("1", "One"), project("2", "Two"), project("3", "Three")]
    }

    fn skills() -> Vec<Skill> {
        vec![
            Skill {
                name: "Rust".to_string(),
                level: SkillLevel::Expert,
            },
            Skill {
                name: "Go".to_string(),
                level: SkillLevel::Beginner,
            },
        ]
    }

    fn title_patch(title: &str) -> ProjectPatch {
        ProjectPatch {
            title: PatchField::Value(title.to_string()),
            ..Default::default()
        }
    }

    // =====================================================
    // Section replacement
    // =====================================================

    #[test]
    fn with_section_replaces_only_that_section() {
        let original = Portfolio::default().with_projects(projects());

        let next = original.with_skills(skills());

        assert_eq!(next.skills, skills());
        assert_eq!(next.projects, original.projects);
        assert!(original.skills.is_empty());
    }

    #[test]
    fn with_theme_can_clear_theme() {
        let next = Portfolio::default().with_theme(None);

        assert_eq!(next.theme, None);
    }

    // =====================================================
    // Keyed helpers
    // =====================================================

    #[test]
    fn add_then_remove_restores_section() {
        let original = projects();

        let added = add_entry(&original, project("4", "Four"));
        let removed = remove_keyed(&added, &EntryId::new("4"));

        assert_eq!(added.len(), 4);
        assert_eq!(removed, original);
    }

    #[test]
    fn update_keyed_touches_only_matching_entry() {
        let updated = update_keyed(&projects(), &EntryId::new("2"), &title_patch("Deux"));

        let titles: Vec<&str> = updated.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Deux", "Three"]);
    }

    #[test]
    fn update_keyed_is_idempotent() {
        let patch = title_patch("Deux");
        let key = EntryId::new("2");

        let once = update_keyed(&projects(), &key, &patch);
        let twice = update_keyed(&once, &key, &patch);

        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let original = projects();
        let missing = EntryId::new("missing");

        assert_eq!(update_keyed(&original, &missing, &title_patch("X")), original);
        assert_eq!(remove_keyed(&original, &missing), original);
    }

    #[test]
    fn remove_keyed_preserves_order() {
        let removed = remove_keyed(&projects(), &EntryId::new("1"));

        let ids: Vec<&str> = removed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn experience_current_composite_clears_end_date() {
        let section = vec![Experience {
            end_date: Some("2023-05".to_string()),
            ..Experience::blank(EntryId::new("e1"))
        }];

        let updated = update_keyed(&section, &EntryId::new("e1"), &ExperiencePatch::set_current(true));

        assert!(updated[0].current);
        assert_eq!(updated[0].end_date, None);
    }

    // =====================================================
    // Indexed helpers
    // =====================================================

    #[test]
    fn update_indexed_patches_entry_at_position() {
        let patch = SkillPatch {
            level: PatchField::Value(SkillLevel::Advanced),
            ..Default::default()
        };

        let updated = update_indexed(&skills(), 1, &patch);

        assert_eq!(updated[0], skills()[0]);
        assert_eq!(updated[1].name, "Go");
        assert_eq!(updated[1].level, SkillLevel::Advanced);
    }

    #[test]
    fn indexed_out_of_range_is_a_no_op() {
        let patch = SkillPatch {
            name: PatchField::Value("Zig".to_string()),
            ..Default::default()
        };

        assert_eq!(update_indexed(&skills(), 7, &patch), skills());
        assert_eq!(remove_indexed(&skills(), 7), skills());
    }

    #[test]
    fn add_then_remove_last_index_restores_links() {
        let links = vec![SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/me".to_string(),
        }];

        let added = add_entry(&links, SocialLink::default());
        let removed = remove_indexed(&added, added.len() - 1);

        assert_eq!(removed, links);
    }

    #[test]
    fn duplicate_social_links_are_allowed() {
        let link = SocialLink {
            platform: "Website".to_string(),
            url: "https://me.dev".to_string(),
        };

        let empty: Vec<SocialLink> = Vec::new();
        let added = add_entry(&add_entry(&empty, link.clone()), link.clone());
        let patched = update_indexed(
            &added,
            0,
            &SocialLinkPatch {
                url: PatchField::Value("https://other.dev".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(added.len(), 2);
        assert_eq!(patched[0].url, "https://other.dev");
        assert_eq!(patched[1], link);
    }

    // =====================================================
    // Technologies
    // =====================================================

    #[test]
    fn add_technology_twice_keeps_single_entry() {
        let p = add_technology(&project("1", "One"), "React");
        let p = add_technology(&p, "React");

        assert_eq!(p.technologies, vec!["React".to_string()]);
    }

    #[test]
    fn add_technology_trims_and_remove_keeps_order() {
        let p = add_technology(&project("1", "One"), "Rust");
        let p = add_technology(&p, "  Go  ");
        let p = add_technology(&p, "SQL");

        assert_eq!(p.technologies, vec!["Rust", "Go", "SQL"]);

        let p = remove_technology(&p, "Go");

        assert_eq!(p.technologies, vec!["Rust", "SQL"]);
    }

    #[test]
    fn add_technology_ignores_blank_input() {
        let p = add_technology(&project("1", "One"), "   ");

        assert!(p.technologies.is_empty());
    }

    #[test]
    fn add_technology_is_case_sensitive() {
        let p = add_technology(&project("1", "One"), "react");
        let p = add_technology(&p, "React");

        assert_eq!(p.technologies, vec!["react", "React"]);
    }

    #[test]
    fn remove_technology_removes_every_occurrence() {
        let p = Project {
            technologies: vec!["Go".to_string(), "Rust".to_string(), "Go".to_string()],
            ..project("1", "One")
        };

        let p = remove_technology(&p, "Go");

        assert_eq!(p.technologies, vec!["Rust"]);
    }

    #[test]
    fn map_keyed_applies_technology_to_one_project() {
        let updated = map_keyed(&projects(), &EntryId::new("3"), |p| add_technology(p, "Rust"));

        assert!(updated[0].technologies.is_empty());
        assert_eq!(updated[2].technologies, vec!["Rust"]);
    }
}
