//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{}", format_api_error(*.status, .message, .errors))]
    Api {
        status: u16,
        message: String,
        errors: Vec<serde_json::Value>,
    },

    #[error("OAuth error: {0}")]
    OAuth(String),
}

impl GitHubError {
    /// Build an API error from a non-success response body.
    ///
    /// GitHub answers with `{"message": ..., "errors": [...]}`; anything else
    /// is kept as raw text.
    pub(super) fn from_response_body(status: u16, body: &str) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.trim().to_string());
        let errors = parsed
            .as_ref()
            .and_then(|v| v.get("errors"))
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        GitHubError::Api {
            status,
            message,
            errors,
        }
    }
}

fn format_api_error(status: u16, message: &str, errors: &[serde_json::Value]) -> String {
    format!(
        "GitHub API error: {message} (HTTP {status}){}",
        format_error_details(errors)
    )
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Format error details from GitHub API errors array.
/// Returns a formatted string like "[field1 is code1, field2 is code2]" or empty string.
fn format_error_details(errors: &[serde_json::Value]) -> String {
    let error_details: Vec<String> = errors
        .iter()
        .filter_map(|e| {
            let field = e.get("field").and_then(|v| v.as_str());
            let code = e.get("code").and_then(|v| v.as_str());
            match (field, code) {
                (Some(f), Some(c)) => Some(format!("{f} is {c}")),
                (Some(f), None) => Some(f.to_string()),
                (None, Some(c)) => Some(c.to_string()),
                (None, None) => None,
            }
        })
        .collect();

    if error_details.is_empty() {
        String::new()
    } else {
        format!(" [{}]", error_details.join(", "))
    }
}
