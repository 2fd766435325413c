//! Skills editor. New drafts start at the conventional middle proficiency.

use super::required;
use crate::models::Skill;

#[derive(Debug)]
pub struct SkillsEditor {
    draft: Skill,
}

impl SkillsEditor {
    pub fn new() -> Self {
        Self {
            draft: default_draft(),
        }
    }

    pub fn draft_mut(&mut self) -> &mut Skill {
        &mut self.draft
    }

    pub fn draft(&self) -> &Skill {
        &self.draft
    }

    /// Appends the draft to a snapshot of the section list. Requires a
    /// name; otherwise silently inert.
    pub fn add(&mut self, list: &[Skill]) -> Option<Vec<Skill>> {
        if !required(&self.draft.name) {
            return None;
        }
        let mut next = list.to_vec();
        next.push(std::mem::replace(&mut self.draft, default_draft()));
        Some(next)
    }
}

impl Default for SkillsEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn default_draft() -> Skill {
    Skill {
        name: String::new(),
        level: Some("Intermediate".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_empty_name_leaves_list_unchanged() {
        let existing = vec![Skill {
            name: "Rust".to_string(),
            level: Some("Expert".to_string()),
        }];
        let mut editor = SkillsEditor::new();
        assert!(editor.add(&existing).is_none());
        assert_eq!(existing.len(), 1);
    }

    #[test]
    fn test_new_draft_defaults_to_intermediate() {
        let mut editor = SkillsEditor::new();
        assert_eq!(editor.draft().level.as_deref(), Some("Intermediate"));

        editor.draft_mut().name = "Negotiation".to_string();
        editor.draft_mut().level = Some("Expert".to_string());
        let list = editor.add(&[]).unwrap();
        assert_eq!(list[0].level.as_deref(), Some("Expert"));
        // The replacement draft starts back at the default level.
        assert_eq!(editor.draft().level.as_deref(), Some("Intermediate"));
    }
}
