//! Session and issue gateway.
//!
//! Holds the single operator session and forwards parsed commands to GitHub.
//! Every public operation returns a structured result; GitHub failures never
//! escape as errors past this layer except from [`Gateway::authenticate`],
//! whose caller only logs them.

mod allow_list;
mod auth;
mod details;
mod issue;
mod responses;
mod session;

pub use allow_list::AllowList;
pub use responses::{CreateIssueResponse, RepoDetailsResponse, SESSION_EXPIRED_MESSAGE};
pub use session::{Session, SessionStore};

use crate::infra::github::error::Result;
use crate::infra::github::{GitHubClient, OAuthApp};
use crate::parser;
use crate::shared::config::Config;

pub struct Gateway {
    oauth: OAuthApp,
    api_base_url: String,
    redirect_uri: String,
    allowed_owners: AllowList,
    session: SessionStore,
}

impl Gateway {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            oauth: OAuthApp::new(
                &config.client_id,
                &config.client_secret,
                &config.oauth_base_url,
                &config.api_base_url,
            )?,
            api_base_url: config.api_base_url.clone(),
            redirect_uri: config.redirect_uri.clone(),
            allowed_owners: config.allowed_owners.clone(),
            session: SessionStore::new(),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// URL of the OAuth consent page.
    pub fn authorize_url(&self) -> String {
        self.oauth.authorize_url(&self.redirect_uri)
    }

    fn client(&self, token: &str) -> Result<GitHubClient> {
        GitHubClient::with_base_url(&self.api_base_url, token)
    }

    /// Exchange an OAuth code and load the operator's repositories.
    ///
    /// The session is only replaced once every call succeeded.
    pub async fn authenticate(&self, code: &str) -> Result<()> {
        let token = self.oauth.exchange_code(code, &self.redirect_uri).await?;
        let client = self.client(&token)?;
        let repos_by_owner = auth::load_repos_by_owner(&client, &self.allowed_owners).await?;

        tracing::info!(
            owners = repos_by_owner.len(),
            repos = repos_by_owner.values().map(Vec::len).sum::<usize>(),
            "operator authenticated"
        );
        self.session
            .replace(Session::logged_in(token, repos_by_owner))
            .await;
        Ok(())
    }

    /// Revoke the token (best effort) and clear the session.
    pub async fn logout(&self) {
        let Some(token) = self.session.clear().await else {
            return;
        };
        if let Err(e) = self.oauth.revoke_token(&token).await {
            tracing::warn!(error = %e, "failed to revoke token on logout");
        }
        tracing::info!("operator logged out");
    }

    /// Parse `command` and file the resulting issue.
    pub async fn create_issue(&self, command: &str, description: &str) -> CreateIssueResponse {
        let parsed = parser::parse(command);
        let Some(token) = self.session.token().await else {
            return CreateIssueResponse::session_expired();
        };

        let result = match self.client(&token) {
            Ok(client) => issue::create_issue_with_client(&client, &parsed, description).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(created) => {
                tracing::info!(repo = %parsed.repo, number = created.number, "issue created");
                CreateIssueResponse::created(created.number)
            }
            Err(e) => {
                tracing::warn!(repo = %parsed.repo, error = %e, "issue creation failed");
                CreateIssueResponse::error(e)
            }
        }
    }

    /// Labels, assignees and open milestones of `full_name`.
    ///
    /// Errors are logged and reported as a bare failure.
    pub async fn repo_details(&self, full_name: &str) -> RepoDetailsResponse {
        let Some(token) = self.session.token().await else {
            return RepoDetailsResponse::failure();
        };

        let result = match self.client(&token) {
            Ok(client) => details::fetch_repo_details(&client, full_name).await,
            Err(e) => Err(e),
        };
        result.unwrap_or_else(|e| {
            tracing::warn!(repo = %full_name, error = %e, "repository detail lookup failed");
            RepoDetailsResponse::failure()
        })
    }
}
