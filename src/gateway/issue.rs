//! Issue creation from a parsed command.

use crate::infra::github::error::Result;
use crate::infra::github::{Issue, IssueClient, Milestone, NewIssue, RepoClient};
use crate::parser::ParsedCommand;

/// First milestone whose title equals `status`, ignoring case.
///
/// Linear scan over the open milestones of one repository.
pub(super) fn find_milestone<'a>(milestones: &'a [Milestone], status: &str) -> Option<&'a Milestone> {
    let status = status.to_lowercase();
    milestones.iter().find(|m| m.title.to_lowercase() == status)
}

/// Wrap an optional single value into the list shape GitHub expects.
fn single(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}

/// Build the create request for `parsed`, attaching `milestone` when resolved.
pub(super) fn new_issue(
    parsed: &ParsedCommand,
    description: &str,
    milestone: Option<&Milestone>,
) -> NewIssue {
    NewIssue {
        title: parsed.title.clone(),
        body: description.to_string(),
        labels: single(&parsed.label),
        assignees: single(&parsed.assignee),
        milestone: milestone.map(|m| m.number),
    }
}

/// Create the issue described by `parsed` in `parsed.repo`.
pub(super) async fn create_issue_with_client<C>(
    client: &C,
    parsed: &ParsedCommand,
    description: &str,
) -> Result<Issue>
where
    C: RepoClient + IssueClient,
{
    // Fails with the API's own message when the slug is malformed or unknown.
    let repo = client.get_repo(&parsed.repo).await?;

    let milestones = if parsed.status.is_empty() {
        Vec::new()
    } else {
        client.list_open_milestones(&repo.full_name).await?
    };
    let milestone = find_milestone(&milestones, &parsed.status);
    if milestone.is_none() && !parsed.status.is_empty() {
        tracing::debug!(status = %parsed.status, "no open milestone matches status");
    }

    client
        .create_issue(&repo.full_name, &new_issue(parsed, description, milestone))
        .await
}
