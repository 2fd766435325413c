use thiserror::Error;

/// Application-level error type for backend interactions.
///
/// Local validation failures (a required field missing before a list add)
/// are deliberately not represented here: editors treat them as silent
/// no-ops, not errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request never completed (DNS, connect, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend error (status {status})")]
    Backend {
        status: u16,
        /// Structured error message from the response body, when parseable.
        message: Option<String>,
    },

    /// Valid request, absent resource.
    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// The string surfaced to the user in a blocking notification.
    /// Backend-provided messages win; everything else gets a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            AppError::Backend { .. } => "Unknown error".to_string(),
            AppError::Transport(_) => "Please try again.".to_string(),
            AppError::NotFound(what) => format!("{what} not found"),
        }
    }

    /// True for the not-found case, which degrades to an inline view state
    /// instead of a blocking notification.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_wins() {
        let err = AppError::Backend {
            status: 422,
            message: Some("template_id is required".to_string()),
        };
        assert_eq!(err.user_message(), "template_id is required");
    }

    #[test]
    fn test_backend_without_payload_falls_back() {
        let err = AppError::Backend {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Unknown error");
    }

    #[test]
    fn test_not_found_is_inline() {
        let err = AppError::NotFound("Resume".to_string());
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Resume not found");
    }
}
