//! Template gallery and full-page template preview. Catalog fetches fall
//! back to the built-in template set, and previews are seeded from the
//! per-category sample table (not the per-id table the builder uses).

use std::sync::Arc;

use tracing::warn;

use crate::api::Backend;
use crate::models::{template, Resume, Template};
use crate::render;
use crate::sample;

pub struct GalleryPage {
    backend: Arc<dyn Backend>,
}

impl GalleryPage {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// The template catalog. A failed or empty fetch substitutes the
    /// built-in set rather than failing.
    pub async fn templates(&self) -> Vec<Template> {
        match self.backend.fetch_templates().await {
            Ok(templates) if !templates.is_empty() => templates,
            Ok(_) => template::builtin_catalog(),
            Err(err) => {
                warn!("failed to fetch templates: {err}");
                template::builtin_catalog()
            }
        }
    }

    /// One template by id, substituting the built-in fallback on failure.
    pub async fn template(&self, id: &str) -> Template {
        match self.backend.fetch_template(id).await {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!("failed to fetch template {id}: {err}");
                template::builtin(id)
            }
        }
    }

    /// Profession-appropriate preview record for a template, keyed on its
    /// declared category.
    pub fn preview_record(&self, template: &Template) -> Resume {
        sample::for_category(&template.category, &template.id)
    }

    /// Fully rendered preview for a template.
    pub fn preview_html(&self, template: &Template) -> String {
        render::render(&self.preview_record(template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{catalog_template, MockBackend};

    #[tokio::test]
    async fn test_catalog_failure_substitutes_builtins() {
        let backend = Arc::new(MockBackend {
            templates_down: true,
            ..Default::default()
        });
        let page = GalleryPage::new(backend);
        let templates = page.templates().await;
        assert_eq!(templates.len(), 11);
    }

    #[tokio::test]
    async fn test_empty_catalog_also_substitutes_builtins() {
        let backend = Arc::new(MockBackend::default());
        let page = GalleryPage::new(backend);
        assert_eq!(page.templates().await.len(), 11);
    }

    #[tokio::test]
    async fn test_template_lookup_falls_back_to_builtin() {
        let backend = Arc::new(MockBackend {
            templates_down: true,
            ..Default::default()
        });
        let page = GalleryPage::new(backend);
        let fetched = page.template("9").await;
        assert_eq!(fetched.name, "Professional Accountant");
    }

    #[tokio::test]
    async fn test_preview_uses_category_seed_with_template_id() {
        let backend = Arc::new(MockBackend::default());
        let page = GalleryPage::new(backend);
        let finance = catalog_template("9");

        let record = page.preview_record(&finance);
        assert_eq!(record.template_id, "9");
        assert_eq!(record.personal_info.full_name, "Michael Chen CPA");

        let html = page.preview_html(&finance);
        assert!(html.contains("professional-accountant-template"));
    }
}
