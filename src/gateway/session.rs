//! Single-slot session state.
//!
//! The process serves one operator, so there is exactly one session. The
//! lock only provides memory safety; concurrent requests from several
//! browsers would simply overwrite each other's session.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Authentication state and repository listing of the logged-in operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    /// Owner login -> repository full names, in API order.
    pub repos_by_owner: BTreeMap<String, Vec<String>>,
    /// Owner logins, sorted.
    pub owners: Vec<String>,
    /// Not populated yet; kept so the page model has a stable shape.
    pub members: Vec<String>,
}

impl Session {
    /// Build a logged-in session from a token and a grouped listing.
    pub fn logged_in(token: String, repos_by_owner: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            token: Some(token),
            owners: repos_by_owner.keys().cloned().collect(),
            repos_by_owner,
            members: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.token.is_some()
    }
}

/// Shared handle to the process-wide session.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token of the active session, if any.
    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    pub async fn snapshot(&self) -> Session {
        self.inner.read().await.clone()
    }

    pub async fn replace(&self, session: Session) {
        *self.inner.write().await = session;
    }

    /// Reset to the empty session and return the previous token.
    pub async fn clear(&self) -> Option<String> {
        std::mem::take(&mut *self.inner.write().await).token
    }
}
