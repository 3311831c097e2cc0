//! Repository listing loaded at login.

use std::collections::BTreeMap;

use super::allow_list::AllowList;
use crate::infra::github::error::Result;
use crate::infra::github::{RepoClient, Repository};

/// Group repository full names by owner login, keeping API order per owner.
pub(super) fn group_by_owner(repos: Vec<Repository>) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for repo in repos {
        grouped
            .entry(repo.owner.login)
            .or_default()
            .push(repo.full_name);
    }
    grouped
}

/// List the user's repositories grouped by allowed owner.
pub(super) async fn load_repos_by_owner(
    client: &impl RepoClient,
    allowed_owners: &AllowList,
) -> Result<BTreeMap<String, Vec<String>>> {
    let repos = client.list_user_repos().await?;
    Ok(allowed_owners.filter(group_by_owner(repos)))
}
