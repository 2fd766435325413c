//! Page controllers: orchestrate fetch-or-seed of a resume or template,
//! hold the current draft, wire section edits to the renderer, and issue
//! save/export requests against the backend collaborator.

pub mod builder;
pub mod gallery;
pub mod preview;

pub use self::builder::BuilderPage;
pub use self::gallery::GalleryPage;
pub use self::preview::{PreviewPage, PreviewState};

/// Blocking user-facing notification surface. Network and backend
/// failures are reported here; not-found degrades to an inline view state
/// instead, and local validation failures are silent.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that writes to the log, used by the CLI shell.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::error!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::Notifier;
    use crate::api::Backend;
    use crate::errors::AppError;
    use crate::models::{template, Resume, Template};

    /// Configurable in-memory backend for page-controller tests.
    #[derive(Default)]
    pub struct MockBackend {
        pub create_calls: AtomicUsize,
        pub fail_create: bool,
        pub resume_missing: bool,
        pub templates_down: bool,
        pub templates: Vec<Template>,
        pub stored_resume: Option<Resume>,
    }

    impl MockBackend {
        pub fn create_count(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Backend for MockBackend {
        async fn fetch_resume(&self, id: &str) -> Result<Resume, AppError> {
            if self.resume_missing {
                return Err(AppError::NotFound("Resume".to_string()));
            }
            let mut resume = self
                .stored_resume
                .clone()
                .unwrap_or_else(|| crate::sample::for_template("2"));
            resume.id = Some(id.to_string());
            Ok(resume)
        }

        async fn create_resume(&self, resume: &Resume) -> Result<Resume, AppError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_create {
                return Err(AppError::Backend {
                    status: 422,
                    message: Some("template_id is required".to_string()),
                });
            }
            let mut created = resume.clone();
            created.id = Some("mock-resume-id".to_string());
            Ok(created)
        }

        async fn fetch_templates(&self) -> Result<Vec<Template>, AppError> {
            if self.templates_down {
                return Err(AppError::Backend {
                    status: 500,
                    message: None,
                });
            }
            Ok(self.templates.clone())
        }

        async fn fetch_template(&self, id: &str) -> Result<Template, AppError> {
            if self.templates_down {
                return Err(AppError::Backend {
                    status: 500,
                    message: None,
                });
            }
            self.templates
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Template".to_string()))
        }

        fn download_url(&self, resume_id: &str, format: Option<&str>) -> String {
            match format {
                Some(format) => format!("mock://resumes/{resume_id}/download?format={format}"),
                None => format!("mock://resumes/{resume_id}/download"),
            }
        }
    }

    /// Notifier that records every message for assertions.
    #[derive(Default)]
    pub struct CapturingNotifier {
        pub messages: Mutex<Vec<String>>,
    }

    impl CapturingNotifier {
        pub fn take(&self) -> Vec<String> {
            let mut messages = self.messages.lock().unwrap();
            std::mem::take(&mut *messages)
        }
    }

    impl Notifier for CapturingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    pub fn catalog_template(id: &str) -> Template {
        template::builtin(id)
    }
}
