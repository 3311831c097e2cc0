use super::responses::RepoDetailsResponse;
use crate::infra::github::RepoClient;
use crate::infra::github::error::Result;

/// Fetch labels, assignees and open milestones of `full_name`.
pub(super) async fn fetch_repo_details(
    client: &impl RepoClient,
    full_name: &str,
) -> Result<RepoDetailsResponse> {
    let repo = client.get_repo(full_name).await?;
    let labels = client.list_labels(&repo.full_name).await?;
    let assignees = client.list_assignees(&repo.full_name).await?;
    let milestones = client.list_open_milestones(&repo.full_name).await?;

    Ok(RepoDetailsResponse::found(
        labels.into_iter().map(|l| l.name).collect(),
        assignees.into_iter().map(|a| a.login).collect(),
        milestones.into_iter().map(|m| m.title).collect(),
    ))
}
