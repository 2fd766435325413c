//! Template records as supplied by the backend catalog, plus the built-in
//! fallback set callers substitute when the catalog cannot be fetched.
//!
//! A template's `sections` list is informational only: no layout strategy
//! consults it. Which sections actually render is decided per layout from
//! the data itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub preview_image: Option<String>,
    /// Drives which profession-specific seed dataset the gallery uses.
    pub category: String,
    pub is_premium: bool,
    pub sections: Vec<String>,
    pub color_scheme: ColorScheme,
    pub font_family: String,
    /// Layout key the renderer dispatches on.
    pub layout: String,
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    is_premium: bool,
    sections: &[&str],
    primary: &str,
    secondary: &str,
    font_family: &str,
    layout: &str,
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        preview_image: None,
        category: category.to_string(),
        is_premium,
        sections: sections.iter().map(|s| s.to_string()).collect(),
        color_scheme: ColorScheme {
            primary: Some(primary.to_string()),
            secondary: Some(secondary.to_string()),
            accent: None,
        },
        font_family: font_family.to_string(),
        layout: layout.to_string(),
    }
}

/// Built-in fallback for a single template lookup. Used by the full-page
/// template preview when `GET /api/templates/{id}` fails.
pub fn builtin(id: &str) -> Template {
    match id {
        "9" => template(
            "9",
            "Professional Accountant",
            "Tailored for CAs, CPAs, and finance professionals",
            "Finance",
            false,
            &["personal", "experience", "education", "skills", "certifications"],
            "#1e3c72",
            "#2a5298",
            "Georgia",
            "professional-accountant",
        ),
        "10" => template(
            "10",
            "Sales Executive",
            "Dynamic template for sales and business development professionals",
            "Sales",
            false,
            &["personal", "experience", "achievements", "skills"],
            "#667eea",
            "#764ba2",
            "Helvetica Neue",
            "sales-executive",
        ),
        "11" => template(
            "11",
            "Legal Professional",
            "Formal template for lawyers, advocates, and legal counsels",
            "Legal",
            false,
            &["personal", "experience", "education", "practice_areas", "cases"],
            "#1a1a1a",
            "#8b7355",
            "Book Antiqua",
            "legal-professional",
        ),
        _ => template(
            id,
            "Professional",
            "Clean and professional template",
            "Technology",
            false,
            &["personal", "experience", "education", "skills"],
            "#2c3e50",
            "#3498db",
            "Arial",
            "single-column",
        ),
    }
}

/// Built-in fallback catalog. Used by the template gallery when
/// `GET /api/templates` fails or returns an empty list.
///
/// Deliberately maintained separately from [`builtin`]: the two call sites
/// serve different surfaces and their entries are allowed to differ.
pub fn builtin_catalog() -> Vec<Template> {
    vec![
        template(
            "1",
            "Professional",
            "Clean and professional template perfect for corporate positions",
            "Business",
            false,
            &["personal", "experience", "education", "skills"],
            "#2c3e50",
            "#3498db",
            "Arial",
            "single-column",
        ),
        template(
            "2",
            "Modern Executive",
            "Sophisticated design for senior executives and managers",
            "Executive",
            false,
            &["personal", "experience", "education", "skills"],
            "#1a237e",
            "#3f51b5",
            "Roboto",
            "modern-executive",
        ),
        template(
            "3",
            "Creative Designer",
            "Bold and creative template perfect for designers and artists",
            "Creative",
            false,
            &["personal", "portfolio", "skills", "experience"],
            "#e91e63",
            "#ff5722",
            "Montserrat",
            "creative-designer",
        ),
        template(
            "4",
            "Minimalist Clean",
            "Ultra-clean minimal design that lets content shine",
            "Minimal",
            false,
            &["personal", "experience", "education", "skills"],
            "#424242",
            "#757575",
            "Inter",
            "minimalist-clean",
        ),
        template(
            "5",
            "Academic Scholar",
            "Traditional academic template for researchers and professors",
            "Academic",
            false,
            &["personal", "education", "experience", "skills", "publications"],
            "#1b5e20",
            "#388e3c",
            "Times New Roman",
            "academic-scholar",
        ),
        template(
            "6",
            "Tech Professional",
            "Modern tech-focused template with sidebar layout",
            "Technology",
            false,
            &["personal", "skills", "experience", "projects"],
            "#0d47a1",
            "#2196f3",
            "Source Code Pro",
            "tech-sidebar",
        ),
        template(
            "7",
            "Creative Portfolio",
            "Showcase your creativity with this portfolio-style template",
            "Portfolio",
            false,
            &["personal", "portfolio", "experience", "skills"],
            "#7b1fa2",
            "#e1bee7",
            "Poppins",
            "creative-portfolio",
        ),
        template(
            "8",
            "Corporate Executive",
            "Premium executive template with elegant typography",
            "Executive",
            true,
            &["personal", "experience", "education", "skills"],
            "#bf360c",
            "#ff8a65",
            "Playfair Display",
            "corporate-executive",
        ),
        builtin("9"),
        builtin("10"),
        builtin("11"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_known_ids() {
        assert_eq!(builtin("9").category, "Finance");
        assert_eq!(builtin("10").category, "Sales");
        assert_eq!(builtin("11").category, "Legal");
    }

    #[test]
    fn test_builtin_unknown_id_is_generic() {
        let t = builtin("does-not-exist");
        assert_eq!(t.id, "does-not-exist");
        assert_eq!(t.layout, "single-column");
        assert_eq!(t.category, "Technology");
    }

    #[test]
    fn test_catalog_covers_all_short_ids() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 11);
        let ids: Vec<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
        for id in ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"] {
            assert!(ids.contains(&id), "missing template {id}");
        }
    }
}
