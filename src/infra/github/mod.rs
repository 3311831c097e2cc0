//! GitHub API client module using reqwest.
//!
//! Provides `GitHubClient` for calls made with a user's access token and
//! `OAuthApp` for the OAuth flow of the registered app.

mod client;
pub(crate) mod error;
mod issue;
#[cfg(test)]
pub mod mock;
mod models;
mod oauth;
mod repo;

pub use client::{DEFAULT_API_BASE_URL, GitHubClient};
pub use error::GitHubError;
pub use issue::IssueClient;
pub use models::{Issue, Milestone, NewIssue, Owner, Repository};
pub use oauth::{DEFAULT_OAUTH_BASE_URL, OAuthApp};
pub use repo::RepoClient;
