//! Identity-provider OAuth collaborator (LinkedIn profile import).
//!
//! Configuration presence is probed once per session by calling the login
//! endpoint: a server-error response means "not configured", any other
//! response means "configured". The result is cached — never re-probed per
//! render.

use std::sync::OnceLock;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::{Experience, PersonalInfo};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Successful login response: where to send the user, plus the
/// anti-forgery state token echoed back on the callback.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthLogin {
    pub auth_url: String,
    pub state: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Partial resume fields imported from the provider profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportedProfile {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

/// A completed profile import with the provider's status text.
#[derive(Debug, Clone)]
pub struct OAuthImport {
    pub profile: ImportedProfile,
    pub message: String,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallbackBody {
    success: bool,
    #[serde(default)]
    data: Option<ImportedProfile>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

pub struct OAuthClient {
    client: Client,
    base_url: String,
    /// Session-cached configuration probe result.
    configured: OnceLock<bool>,
}

impl OAuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
            configured: OnceLock::new(),
        }
    }

    fn login_url(&self) -> String {
        format!("{}/api/linkedin/oauth/login", self.base_url)
    }

    /// Starts the OAuth flow: returns the provider authorization URL and
    /// state token. A server-error status signals "not configured".
    pub async fn login(&self) -> Result<OAuthLogin, AppError> {
        let response = self.client.get(self.login_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v["detail"].as_str().map(|s| s.to_string()));
            return Err(AppError::Backend {
                status: status.as_u16(),
                message: detail,
            });
        }
        Ok(response.json().await?)
    }

    /// Exchanges the authorization code + state for imported profile
    /// fields, or surfaces the provider's error payload.
    pub async fn exchange(&self, code: &str, state: &str) -> Result<OAuthImport, AppError> {
        let response = self
            .client
            .get(format!("{}/api/linkedin/oauth/callback", self.base_url))
            .query(&[("code", code), ("state", state)])
            .send()
            .await?;
        let status = response.status();
        let body: CallbackBody = response.json().await?;

        match (body.success, body.data) {
            (true, Some(profile)) => {
                debug!("OAuth import succeeded");
                Ok(OAuthImport {
                    profile,
                    message: body
                        .message
                        .unwrap_or_else(|| "LinkedIn profile imported successfully".to_string()),
                    note: body.note,
                })
            }
            _ => Err(AppError::Backend {
                status: status.as_u16(),
                message: body.error.or(body.detail),
            }),
        }
    }

    /// Probes configuration once and caches the answer for the session.
    pub async fn is_configured(&self) -> bool {
        if let Some(configured) = self.configured.get() {
            return *configured;
        }
        let probed = match self.client.get(self.login_url()).send().await {
            Ok(response) => configured_from_status(response.status()),
            Err(err) => {
                warn!("OAuth configuration probe failed: {err}");
                false
            }
        };
        *self.configured.get_or_init(|| probed)
    }
}

/// A server error means "not configured"; any other response — including
/// client errors — means the endpoint exists and is configured.
fn configured_from_status(status: StatusCode) -> bool {
    !status.is_server_error()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_means_not_configured() {
        assert!(!configured_from_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!configured_from_status(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn test_any_other_response_means_configured() {
        assert!(configured_from_status(StatusCode::OK));
        assert!(configured_from_status(StatusCode::BAD_REQUEST));
        assert!(configured_from_status(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_probe_result_is_cached_for_the_session() {
        // Unroutable base URL: the first probe fails as a transport error
        // and the cached `false` must be served without re-probing.
        let client = OAuthClient::new("http://127.0.0.1:1");
        assert!(!client.is_configured().await);
        assert_eq!(client.configured.get(), Some(&false));
        assert!(!client.is_configured().await);
    }
}
