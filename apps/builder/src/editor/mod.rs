//! Section editors: one per resume section, each operating purely on a
//! list snapshot and producing a brand-new list. Nothing here mutates a
//! list in place, and an add with a missing required field is a silent
//! no-op — the editor returns `None` and the owner's list stays untouched.

pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;

pub use education::EducationEditor;
pub use experience::ExperienceEditor;
pub use projects::ProjectsEditor;
pub use skills::SkillsEditor;

use crate::models::{
    Education, Experience, PersonalInfo, Project, Resume, Skill,
};

/// A whole-section replacement emitted by an editor. Every change — add,
/// remove, update — arrives as a full new list for the owning section.
#[derive(Debug, Clone)]
pub enum SectionEdit {
    PersonalInfo(PersonalInfo),
    Education(Vec<Education>),
    Experience(Vec<Experience>),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
}

/// Applies a section replacement to the single owned draft. This is the
/// only write path from editors into a resume; no editor holds an alias
/// into the draft.
pub fn apply_edit(resume: &mut Resume, edit: SectionEdit) {
    match edit {
        SectionEdit::PersonalInfo(personal_info) => resume.personal_info = personal_info,
        SectionEdit::Education(education) => resume.education = education,
        SectionEdit::Experience(experience) => resume.experience = experience,
        SectionEdit::Skills(skills) => resume.skills = skills,
        SectionEdit::Projects(projects) => resume.projects = projects,
    }
}

/// New list with the entry at `index` removed; later entries shift down.
/// An out-of-range index returns the list unchanged.
pub fn remove_at<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    list.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_at_shifts_subsequent_entries() {
        let list = vec!["a", "b", "c"];
        assert_eq!(remove_at(&list, 1), vec!["a", "c"]);
        assert_eq!(remove_at(&list, 0), vec!["b", "c"]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let list = vec!["a", "b"];
        assert_eq!(remove_at(&list, 5), vec!["a", "b"]);
    }

    #[test]
    fn test_apply_edit_replaces_whole_section() {
        let mut resume = Resume::default();
        resume.skills = vec![Skill {
            name: "Old".to_string(),
            level: None,
        }];
        apply_edit(
            &mut resume,
            SectionEdit::Skills(vec![
                Skill {
                    name: "New".to_string(),
                    level: None,
                },
                Skill {
                    name: "Newer".to_string(),
                    level: None,
                },
            ]),
        );
        assert_eq!(resume.skills.len(), 2);
        assert_eq!(resume.skills[0].name, "New");
    }
}
