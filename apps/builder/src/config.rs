use anyhow::Result;

const LOCAL_API_URL: &str = "http://localhost:8000";

/// Application configuration loaded from environment variables.
///
/// The backend base URL is resolved with the following precedence:
/// explicit `BUILDER_API_URL` override → production mode
/// (`BUILDER_ENV=production`, same-origin relative paths) → local
/// development default.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: resolve_api_url(
                std::env::var("BUILDER_API_URL").ok().as_deref(),
                std::env::var("BUILDER_ENV").ok().as_deref(),
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn resolve_api_url(override_url: Option<&str>, env: Option<&str>) -> String {
    if let Some(url) = override_url {
        if !url.is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }
    if env == Some("production") {
        // Same origin as the serving host: requests use relative paths.
        return String::new();
    }
    LOCAL_API_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_override_wins() {
        let url = resolve_api_url(Some("https://api.example.com/"), Some("production"));
        assert_eq!(url, "https://api.example.com");
    }

    #[test]
    fn test_production_uses_same_origin() {
        assert_eq!(resolve_api_url(None, Some("production")), "");
    }

    #[test]
    fn test_default_is_local_dev() {
        assert_eq!(resolve_api_url(None, None), LOCAL_API_URL);
        assert_eq!(resolve_api_url(Some(""), None), LOCAL_API_URL);
    }
}
