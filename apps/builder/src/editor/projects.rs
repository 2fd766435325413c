//! Projects editor. Technology names are staged one at a time into the
//! entry under construction, like experience achievements.

use super::required;
use crate::models::Project;

#[derive(Debug, Default)]
pub struct ProjectsEditor {
    draft: Project,
    staged_technology: String,
}

impl ProjectsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft_mut(&mut self) -> &mut Project {
        &mut self.draft
    }

    pub fn draft(&self) -> &Project {
        &self.draft
    }

    pub fn stage_technology(&mut self, text: impl Into<String>) {
        self.staged_technology = text.into();
    }

    /// Moves the staged technology into the draft's list (Enter / Add).
    pub fn push_technology(&mut self) {
        if required(&self.staged_technology) {
            self.draft
                .technologies
                .push(std::mem::take(&mut self.staged_technology));
        }
    }

    /// Removes a draft technology by index; later entries shift down.
    pub fn remove_technology(&mut self, index: usize) {
        if index < self.draft.technologies.len() {
            self.draft.technologies.remove(index);
        }
    }

    /// Appends the draft to a snapshot of the section list. Requires name
    /// and description; otherwise silently inert.
    pub fn add(&mut self, list: &[Project]) -> Option<Vec<Project>> {
        if !required(&self.draft.name) || !required(&self.draft.description) {
            return None;
        }
        let mut next = list.to_vec();
        next.push(std::mem::take(&mut self.draft));
        self.staged_technology.clear();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_requires_name_and_description() {
        let mut editor = ProjectsEditor::new();
        editor.draft_mut().name = "Weather Dashboard".to_string();
        assert!(editor.add(&[]).is_none(), "missing description is a no-op");

        editor.draft_mut().description = "Forecast charts.".to_string();
        let list = editor.add(&[]).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_technology_staging_and_removal() {
        let mut editor = ProjectsEditor::new();
        editor.stage_technology("React");
        editor.push_technology();
        editor.stage_technology("D3.js");
        editor.push_technology();
        editor.stage_technology("Chart.js");
        editor.push_technology();
        assert_eq!(editor.draft().technologies, vec!["React", "D3.js", "Chart.js"]);

        // Removal is by index; subsequent entries shift.
        editor.remove_technology(1);
        assert_eq!(editor.draft().technologies, vec!["React", "Chart.js"]);
    }
}
