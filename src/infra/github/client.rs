//! GitHub REST API client implementation using reqwest.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{GitHubError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

pub(super) const USER_AGENT: &str = concat!("quickissue/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Build the underlying HTTP client shared by the API and OAuth clients.
pub(super) fn build_http_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?)
}

/// Join a base URL and an absolute path without doubling the slash.
pub(super) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Turn a non-success response into [`GitHubError::Api`].
pub(super) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GitHubError::from_response_body(status.as_u16(), &body))
}

/// Client for calls made on behalf of an authenticated user.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client against an API root such as [`DEFAULT_API_BASE_URL`].
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        Ok(Self {
            http: build_http_client()?,
            base_url: base_url.to_string(),
            token: token.to_string(),
        })
    }

    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(join_url(&self.base_url, path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub(super) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(join_url(&self.base_url, path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }
}
