//! Experience editor. Achievements are staged one at a time into the
//! entry under construction before the entry itself is added.

use super::required;
use crate::models::Experience;

#[derive(Debug, Default)]
pub struct ExperienceEditor {
    draft: Experience,
    staged_achievement: String,
}

impl ExperienceEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry under construction, for field-by-field editing.
    pub fn draft_mut(&mut self) -> &mut Experience {
        &mut self.draft
    }

    pub fn draft(&self) -> &Experience {
        &self.draft
    }

    /// Types into the achievement staging field.
    pub fn stage_achievement(&mut self, text: impl Into<String>) {
        self.staged_achievement = text.into();
    }

    /// Moves the staged achievement into the draft's list (Enter / Add).
    /// Empty staging text is ignored.
    pub fn push_achievement(&mut self) {
        if required(&self.staged_achievement) {
            self.draft
                .achievements
                .push(std::mem::take(&mut self.staged_achievement));
        }
    }

    /// Removes a draft achievement by index; later entries shift down.
    pub fn remove_achievement(&mut self, index: usize) {
        if index < self.draft.achievements.len() {
            self.draft.achievements.remove(index);
        }
    }

    /// Appends the draft to a snapshot of the section list. Requires
    /// company and position; otherwise the add is silently inert and the
    /// draft is kept for further editing.
    pub fn add(&mut self, list: &[Experience]) -> Option<Vec<Experience>> {
        if !required(&self.draft.company) || !required(&self.draft.position) {
            return None;
        }
        let mut next = list.to_vec();
        next.push(std::mem::take(&mut self.draft));
        self.staged_achievement.clear();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_editor() -> ExperienceEditor {
        let mut editor = ExperienceEditor::new();
        editor.draft_mut().company = "Stripe".to_string();
        editor.draft_mut().position = "Senior Product Manager".to_string();
        editor.draft_mut().start_date = "2021".to_string();
        editor.draft_mut().description = "Payments.".to_string();
        editor
    }

    #[test]
    fn test_add_requires_company_and_position() {
        let mut editor = ExperienceEditor::new();
        editor.draft_mut().position = "Engineer".to_string();
        assert!(editor.add(&[]).is_none(), "missing company must be a no-op");

        let mut editor = ExperienceEditor::new();
        editor.draft_mut().company = "TechCorp".to_string();
        assert!(editor.add(&[]).is_none(), "missing position must be a no-op");
    }

    #[test]
    fn test_add_appends_and_resets_draft() {
        let mut editor = filled_editor();
        let list = editor.add(&[]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].company, "Stripe");
        assert!(editor.draft().company.is_empty(), "draft resets after add");
    }

    #[test]
    fn test_achievement_staging_flow() {
        let mut editor = filled_editor();
        editor.stage_achievement("Launched feature");
        editor.push_achievement();
        editor.stage_achievement("");
        editor.push_achievement(); // empty staging text is ignored
        editor.stage_achievement("Grew revenue");
        editor.push_achievement();

        assert_eq!(
            editor.draft().achievements,
            vec!["Launched feature", "Grew revenue"]
        );

        editor.remove_achievement(0);
        assert_eq!(editor.draft().achievements, vec!["Grew revenue"]);
    }

    #[test]
    fn test_add_does_not_touch_snapshot() {
        let existing = vec![Experience {
            company: "Old Co".to_string(),
            position: "Role".to_string(),
            ..Default::default()
        }];
        let mut editor = filled_editor();
        let next = editor.add(&existing).unwrap();
        assert_eq!(existing.len(), 1, "snapshot list is never mutated");
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].company, "Old Co");
    }
}
