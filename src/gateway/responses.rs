//! JSON payloads returned to the browser.

use serde::{Deserialize, Serialize};

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired";

/// Result of an issue creation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateIssueResponse {
    pub success: bool,
    pub message: String,
}

impl CreateIssueResponse {
    pub fn created(number: u64) -> Self {
        Self {
            success: true,
            message: format!("Issue #{number} created successfully!"),
        }
    }

    pub fn session_expired() -> Self {
        Self {
            success: false,
            message: SESSION_EXPIRED_MESSAGE.to_string(),
        }
    }

    pub fn error(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Error: {error}"),
        }
    }
}

/// Labels, assignees and open milestones of a repository.
///
/// A failure carries no detail: it serializes to exactly `{"success": false}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoDetailsResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<String>>,
}

impl RepoDetailsResponse {
    pub fn found(labels: Vec<String>, assignees: Vec<String>, milestones: Vec<String>) -> Self {
        Self {
            success: true,
            labels: Some(labels),
            assignees: Some(assignees),
            milestones: Some(milestones),
        }
    }

    pub fn failure() -> Self {
        Self {
            success: false,
            labels: None,
            assignees: None,
            milestones: None,
        }
    }
}
