//! OAuth app operations: authorize URL, code exchange and token revocation.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use super::client::{build_http_client, check_status, join_url};
use super::error::{GitHubError, Result};

pub const DEFAULT_OAUTH_BASE_URL: &str = "https://github.com";

/// Scope requested at authorization. `repo` covers private repositories and issue creation.
const OAUTH_SCOPE: &str = "repo";

/// Response of the token endpoint. GitHub answers 200 even on failure and
/// reports it through `error`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Credentials and endpoints of the registered OAuth app.
pub struct OAuthApp {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    oauth_base_url: String,
    api_base_url: String,
}

impl OAuthApp {
    pub fn new(
        client_id: &str,
        client_secret: &str,
        oauth_base_url: &str,
        api_base_url: &str,
    ) -> Result<Self> {
        Ok(Self {
            http: build_http_client()?,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            oauth_base_url: oauth_base_url.to_string(),
            api_base_url: api_base_url.to_string(),
        })
    }

    /// URL the operator follows to grant access.
    pub fn authorize_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&scope={OAUTH_SCOPE}",
            join_url(&self.oauth_base_url, "/login/oauth/authorize"),
            utf8_percent_encode(&self.client_id, NON_ALPHANUMERIC),
            utf8_percent_encode(redirect_uri, NON_ALPHANUMERIC),
        )
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<String> {
        let response = self
            .http
            .post(join_url(&self.oauth_base_url, "/login/oauth/access_token"))
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await?;
        let body: TokenResponse = check_status(response).await?.json().await?;

        match body {
            TokenResponse {
                access_token: Some(token),
                ..
            } if !token.is_empty() => Ok(token),
            TokenResponse {
                error,
                error_description,
                ..
            } => Err(GitHubError::OAuth(
                error_description
                    .or(error)
                    .unwrap_or_else(|| "token response had no access_token".to_string()),
            )),
        }
    }

    /// Revoke an access token so it cannot be reused after logout.
    pub async fn revoke_token(&self, token: &str) -> Result<()> {
        let path = format!("/applications/{}/token", self.client_id);
        let response = self
            .http
            .delete(join_url(&self.api_base_url, &path))
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .json(&serde_json::json!({ "access_token": token }))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
