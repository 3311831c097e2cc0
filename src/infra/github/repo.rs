//! Repository operations.

use super::client::GitHubClient;
use super::error::Result;
use super::models::{Label, Milestone, Repository, User};

/// Page size for list endpoints. Only the first page is read.
const PER_PAGE: u32 = 100;

/// Trait for repository operations.
#[async_trait::async_trait]
pub trait RepoClient: Send + Sync {
    /// List repositories the authenticated user can access.
    async fn list_user_repos(&self) -> Result<Vec<Repository>>;

    /// Get a repository by its `owner/name`.
    async fn get_repo(&self, full_name: &str) -> Result<Repository>;

    async fn list_labels(&self, full_name: &str) -> Result<Vec<Label>>;

    /// List users issues can be assigned to.
    async fn list_assignees(&self, full_name: &str) -> Result<Vec<User>>;

    async fn list_open_milestones(&self, full_name: &str) -> Result<Vec<Milestone>>;
}

#[async_trait::async_trait]
impl RepoClient for GitHubClient {
    async fn list_user_repos(&self) -> Result<Vec<Repository>> {
        self.get_json(&format!("/user/repos?per_page={PER_PAGE}"))
            .await
    }

    async fn get_repo(&self, full_name: &str) -> Result<Repository> {
        self.get_json(&format!("/repos/{full_name}")).await
    }

    async fn list_labels(&self, full_name: &str) -> Result<Vec<Label>> {
        self.get_json(&format!("/repos/{full_name}/labels?per_page={PER_PAGE}"))
            .await
    }

    async fn list_assignees(&self, full_name: &str) -> Result<Vec<User>> {
        self.get_json(&format!("/repos/{full_name}/assignees?per_page={PER_PAGE}"))
            .await
    }

    async fn list_open_milestones(&self, full_name: &str) -> Result<Vec<Milestone>> {
        self.get_json(&format!(
            "/repos/{full_name}/milestones?state=open&per_page={PER_PAGE}"
        ))
        .await
    }
}
