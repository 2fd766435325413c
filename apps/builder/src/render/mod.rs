//! Template renderer: projects a resume record into one of ten layout
//! strategies keyed by `template_id`.
//!
//! Rendering is a pure, total function — the same `(resume, template_id)`
//! pair always yields byte-identical markup, and every layout produces
//! valid output for a completely empty record.

pub mod helpers;
pub mod html;
pub mod layouts;

use crate::models::Resume;
use crate::render::html::escape;

/// The closed set of layout strategies. Unknown template ids resolve to
/// [`Layout::SingleColumn`], never to a named layout and never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    ModernExecutive,
    CreativeDesigner,
    MinimalistClean,
    AcademicScholar,
    TechSidebar,
    CreativePortfolio,
    ProfessionalAccountant,
    SalesExecutive,
    LegalProfessional,
    SingleColumn,
}

impl Layout {
    /// Dispatch table from template identifier to layout strategy. Covers
    /// the short catalog ids and the persisted-storage ids that alias to
    /// the same layouts.
    pub fn for_template_id(template_id: &str) -> Layout {
        match template_id {
            "2" | "8" | "68a309eb5bd4f4f3594268cb" => Layout::ModernExecutive,
            "3" | "68a309eb5bd4f4f3594268c9" => Layout::CreativeDesigner,
            "4" | "68a309eb5bd4f4f3594268ca" => Layout::MinimalistClean,
            "5" => Layout::AcademicScholar,
            "6" | "68a309eb5bd4f4f3594268cc" => Layout::TechSidebar,
            "7" => Layout::CreativePortfolio,
            "9" | "68a3a104ca6b026875831f3f" => Layout::ProfessionalAccountant,
            "10" | "68a3a111ca6b026875831f40" => Layout::SalesExecutive,
            "11" | "68a3a143ca6b026875831f41" => Layout::LegalProfessional,
            _ => Layout::SingleColumn,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Layout::ModernExecutive => "modern-executive",
            Layout::CreativeDesigner => "creative-designer",
            Layout::MinimalistClean => "minimalist-clean",
            Layout::AcademicScholar => "academic-scholar",
            Layout::TechSidebar => "tech-sidebar",
            Layout::CreativePortfolio => "creative-portfolio",
            Layout::ProfessionalAccountant => "professional-accountant",
            Layout::SalesExecutive => "sales-executive",
            Layout::LegalProfessional => "legal-professional",
            Layout::SingleColumn => "single-column",
        }
    }

    pub fn render(&self, resume: &Resume) -> String {
        match self {
            Layout::ModernExecutive => layouts::modern_executive::render(resume),
            Layout::CreativeDesigner => layouts::creative_designer::render(resume),
            Layout::MinimalistClean => layouts::minimalist_clean::render(resume),
            Layout::AcademicScholar => layouts::academic_scholar::render(resume),
            Layout::TechSidebar => layouts::tech_sidebar::render(resume),
            Layout::CreativePortfolio => layouts::creative_portfolio::render(resume),
            Layout::ProfessionalAccountant => layouts::professional_accountant::render(resume),
            Layout::SalesExecutive => layouts::sales_executive::render(resume),
            Layout::LegalProfessional => layouts::legal_professional::render(resume),
            Layout::SingleColumn => layouts::single_column::render(resume),
        }
    }
}

/// Renders a resume with the layout its `template_id` selects.
pub fn render(resume: &Resume) -> String {
    Layout::for_template_id(&resume.template_id).render(resume)
}

/// Wraps a rendered fragment in a standalone HTML page.
pub fn render_document(resume: &Resume) -> String {
    let name = helpers::display_name(&resume.personal_info);
    let body = render(resume);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str(&format!("  <title>{} — Resume</title>\n", escape(name)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&body);
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    const ALL_IDS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"];

    fn empty_resume(template_id: &str) -> Resume {
        Resume {
            template_id: template_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_every_layout_renders_an_empty_resume() {
        for id in ALL_IDS {
            let html = render(&empty_resume(id));
            assert!(
                html.contains("Your Name"),
                "layout for template {id} should show the placeholder header"
            );
        }
    }

    #[test]
    fn test_unknown_template_ids_resolve_to_single_column() {
        for id in ["", "12", "999", "nonsense", "68a309eb5bd4f4f3594268ff"] {
            assert_eq!(
                Layout::for_template_id(id),
                Layout::SingleColumn,
                "template id {id:?} must fall back to the single-column layout"
            );
        }
    }

    #[test]
    fn test_storage_ids_alias_short_ids() {
        assert_eq!(
            Layout::for_template_id("68a309eb5bd4f4f3594268c9"),
            Layout::for_template_id("3")
        );
        assert_eq!(
            Layout::for_template_id("68a309eb5bd4f4f3594268ca"),
            Layout::for_template_id("4")
        );
        assert_eq!(
            Layout::for_template_id("68a309eb5bd4f4f3594268cb"),
            Layout::for_template_id("2")
        );
        assert_eq!(
            Layout::for_template_id("68a309eb5bd4f4f3594268cc"),
            Layout::for_template_id("6")
        );
        assert_eq!(
            Layout::for_template_id("68a3a104ca6b026875831f3f"),
            Layout::for_template_id("9")
        );
        assert_eq!(
            Layout::for_template_id("68a3a111ca6b026875831f40"),
            Layout::for_template_id("10")
        );
        assert_eq!(
            Layout::for_template_id("68a3a143ca6b026875831f41"),
            Layout::for_template_id("11")
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        // Seed → render → render again: identical bytes, no hidden state.
        let resume = sample::for_template("2");
        let first = render(&resume);
        let second = render(&resume);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_seeded_records_render_on_every_layout() {
        for id in ALL_IDS {
            let mut resume = sample::for_template(id);
            resume.template_id = id.to_string();
            let html = render(&resume);
            assert!(!html.is_empty(), "template {id} rendered nothing");
        }
    }

    #[test]
    fn test_document_wrapper_is_standalone() {
        let resume = sample::for_template("4");
        let doc = render_document(&resume);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("Emma Thompson — Resume"));
        assert!(doc.ends_with("</html>\n"));
    }
}
