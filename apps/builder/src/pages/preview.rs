//! Preview page: loads a persisted resume by id and renders it. A missing
//! resume is an inline "not found" state, not a blocking notification.

use std::sync::Arc;

use tracing::warn;

use crate::api::Backend;
use crate::models::Resume;
use crate::render;

#[derive(Debug)]
pub enum PreviewState {
    Loading,
    Loaded(Resume),
    NotFound,
}

pub struct PreviewPage {
    backend: Arc<dyn Backend>,
    resume_id: String,
    state: PreviewState,
}

impl PreviewPage {
    pub fn new(backend: Arc<dyn Backend>, resume_id: impl Into<String>) -> Self {
        Self {
            backend,
            resume_id: resume_id.into(),
            state: PreviewState::Loading,
        }
    }

    /// Fetches the resume. Load failures of any kind settle into the
    /// inline not-found state; nothing here blocks the user.
    pub async fn load(&mut self) {
        self.state = match self.backend.fetch_resume(&self.resume_id).await {
            Ok(resume) => PreviewState::Loaded(resume),
            Err(err) => {
                if !err.is_not_found() {
                    warn!("failed to load resume {}: {err}", self.resume_id);
                }
                PreviewState::NotFound
            }
        };
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Rendered document for the loaded resume.
    pub fn preview(&self) -> Option<String> {
        match &self.state {
            PreviewState::Loaded(resume) => Some(render::render(resume)),
            _ => None,
        }
    }

    /// Download URL for the loaded resume, opened by the shell in a new
    /// browsing context.
    pub fn download_url(&self) -> Option<String> {
        match &self.state {
            PreviewState::Loaded(_) => Some(self.backend.download_url(&self.resume_id, None)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::MockBackend;

    #[tokio::test]
    async fn test_load_settles_into_loaded_state() {
        let backend = Arc::new(MockBackend::default());
        let mut page = PreviewPage::new(backend, "abc123");
        assert!(matches!(page.state(), PreviewState::Loading));

        page.load().await;
        assert!(matches!(page.state(), PreviewState::Loaded(_)));
        assert!(page.preview().is_some());
        assert_eq!(
            page.download_url().as_deref(),
            Some("mock://resumes/abc123/download")
        );
    }

    #[tokio::test]
    async fn test_missing_resume_degrades_to_not_found() {
        let backend = Arc::new(MockBackend {
            resume_missing: true,
            ..Default::default()
        });
        let mut page = PreviewPage::new(backend, "gone");
        page.load().await;
        assert!(matches!(page.state(), PreviewState::NotFound));
        assert!(page.preview().is_none());
        assert!(page.download_url().is_none());
    }
}
