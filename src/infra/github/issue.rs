//! Issue operations.

use super::client::GitHubClient;
use super::error::Result;
use super::models::{Issue, NewIssue};

/// Trait for issue operations.
#[async_trait::async_trait]
pub trait IssueClient: Send + Sync {
    /// Create an issue in `full_name` (`owner/name`).
    async fn create_issue(&self, full_name: &str, issue: &NewIssue) -> Result<Issue>;
}

#[async_trait::async_trait]
impl IssueClient for GitHubClient {
    async fn create_issue(&self, full_name: &str, issue: &NewIssue) -> Result<Issue> {
        self.post_json(&format!("/repos/{full_name}/issues"), issue)
            .await
    }
}
