//! HTTP client for the backend collaborator.
//!
//! Resumes are fetched and created wholesale, templates are read-only,
//! and downloads are plain URLs opened in a new browsing context by the
//! shell. No call is ever retried automatically, and no call mutates
//! local state.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::{Resume, Template};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Seam between page controllers and the backend, so controllers can be
/// exercised against a mock in tests.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_resume(&self, id: &str) -> Result<Resume, AppError>;
    async fn create_resume(&self, resume: &Resume) -> Result<Resume, AppError>;
    async fn fetch_templates(&self) -> Result<Vec<Template>, AppError>;
    async fn fetch_template(&self, id: &str) -> Result<Template, AppError>;
    /// Builds the document download URL for a saved resume. The caller
    /// opens it in a new browsing context; nothing is fetched here.
    fn download_url(&self, resume_id: &str, format: Option<&str>) -> String;
}

/// Backend-reported error payload (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Maps a non-success response to the error taxonomy: 404 → not-found,
    /// everything else → backend-reported failure carrying the structured
    /// message when one can be parsed.
    async fn error_from(response: Response, what: &str) -> AppError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return AppError::NotFound(what.to_string());
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.detail);
        AppError::Backend {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn fetch_resume(&self, id: &str) -> Result<Resume, AppError> {
        let response = self
            .client
            .get(self.url(&format!("/api/resumes/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, "Resume").await);
        }
        Ok(response.json().await?)
    }

    async fn create_resume(&self, resume: &Resume) -> Result<Resume, AppError> {
        let response = self
            .client
            .post(self.url("/api/resumes/"))
            .json(resume)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, "Resume").await);
        }
        let created: Resume = response.json().await?;
        debug!("created resume {:?}", created.id);
        Ok(created)
    }

    async fn fetch_templates(&self) -> Result<Vec<Template>, AppError> {
        let response = self.client.get(self.url("/api/templates")).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, "Templates").await);
        }
        Ok(response.json().await?)
    }

    async fn fetch_template(&self, id: &str) -> Result<Template, AppError> {
        let response = self
            .client
            .get(self.url(&format!("/api/templates/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, "Template").await);
        }
        Ok(response.json().await?)
    }

    fn download_url(&self, resume_id: &str, format: Option<&str>) -> String {
        match format {
            Some(format) => self.url(&format!("/api/resumes/{resume_id}/download?format={format}")),
            None => self.url(&format!("/api/resumes/{resume_id}/download")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url_with_and_without_format() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(
            client.download_url("abc123", None),
            "http://localhost:8000/api/resumes/abc123/download"
        );
        assert_eq!(
            client.download_url("abc123", Some("pdf")),
            "http://localhost:8000/api/resumes/abc123/download?format=pdf"
        );
    }

    #[test]
    fn test_same_origin_base_yields_relative_urls() {
        let client = ApiClient::new("");
        assert_eq!(client.url("/api/templates"), "/api/templates");
    }
}
