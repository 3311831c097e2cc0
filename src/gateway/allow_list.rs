//! Static owner allow-list.

use std::collections::{BTreeMap, BTreeSet};

/// Case-insensitive set of owner names. An empty list allows every owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    owners: BTreeSet<String>,
}

impl AllowList {
    /// Parse a comma-separated list. Entries are trimmed; blank entries are ignored.
    pub fn parse(value: &str) -> Self {
        Self {
            owners: value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn allows(&self, owner: &str) -> bool {
        self.is_empty() || self.owners.contains(&owner.to_lowercase())
    }

    /// Drop owners that are not allowed from a grouping.
    pub fn filter(
        &self,
        mut repos_by_owner: BTreeMap<String, Vec<String>>,
    ) -> BTreeMap<String, Vec<String>> {
        repos_by_owner.retain(|owner, _| self.allows(owner));
        repos_by_owner
    }
}
