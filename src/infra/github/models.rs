//! Subset of GitHub REST payloads used by this crate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Repository {
    /// `owner/name`
    pub full_name: String,
    pub owner: Owner,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
}

/// Issue as returned by the create endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Request body for `POST /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
    /// Milestone number; serialized as `null` when absent.
    pub milestone: Option<u64>,
}
