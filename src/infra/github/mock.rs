//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of the GitHub API and
//! the OAuth endpoints. The same server plays both roles, so tests point the
//! API base URL and the OAuth base URL at `mock.uri()`.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//!
//! // OAuth
//! mock.token_exchange("code", TEST_TOKEN).await;
//! mock.revoke_token("client-id", TEST_TOKEN, 204).await;
//!
//! // User-level listings
//! mock.user_repos(&["acme/widgets"]).await;
//!
//! // Repository-scoped operations
//! let ctx = mock.repo("acme", "widgets");
//! ctx.get().await;
//! ctx.labels(&["bug"]).await;
//! ctx.open_milestones(&[(1, "Backlog")]).await;
//! ctx.create_issue(42).expect_body(json!({"labels": ["bug"]})).mount().await;
//! ```

use serde_json::json;
use wiremock::matchers::{
    any, body_json, body_partial_json, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;

/// Token the mocked API accepts.
pub const TEST_TOKEN: &str = "test-token";

fn mock_repository(full_name: &str) -> serde_json::Value {
    let (owner, name) = full_name.split_once('/').unwrap_or((full_name, ""));
    json!({
        "id": 1,
        "node_id": "R_test",
        "name": name,
        "full_name": full_name,
        "private": false,
        "owner": {"login": owner, "id": 1, "type": "User"},
        "html_url": format!("https://github.com/{full_name}"),
        "default_branch": "main"
    })
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    }))
}

/// wiremock-based GitHub mock server for testing.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Get a GitHubClient configured to use this mock server.
    pub fn client(&self) -> GitHubClient {
        GitHubClient::with_base_url(&self.server.uri(), TEST_TOKEN).unwrap()
    }

    /// Create a repository context for building mocks.
    pub fn repo<'a>(&'a self, owner: &'a str, repo: &'a str) -> MockRepoContext<'a> {
        MockRepoContext {
            server: &self.server,
            owner,
            repo,
        }
    }

    /// Fail the test if any request reaches the server.
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Mock POST /login/oauth/access_token accepting `code`.
    pub async fn token_exchange(&self, code: &str, token: &str) {
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .and(body_string_contains(format!("code={code}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": token,
                "token_type": "bearer",
                "scope": "repo"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock the token endpoint rejecting any code (GitHub still answers 200).
    pub async fn token_exchange_rejected(&self) {
        Mock::given(method("POST"))
            .and(path("/login/oauth/access_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": "bad_verification_code",
                "error_description": "The code passed is incorrect or expired.",
                "error_uri": "https://docs.github.com/apps/oauth"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock DELETE /applications/{client_id}/token, answered with `status`.
    /// Expects exactly one call.
    pub async fn revoke_token(&self, client_id: &str, token: &str, status: u16) {
        let response = if status == 404 {
            not_found()
        } else {
            ResponseTemplate::new(status)
        };
        Mock::given(method("DELETE"))
            .and(path(format!("/applications/{client_id}/token")))
            .and(body_json(json!({"access_token": token})))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock GET /user/repos returning the given `owner/name` repositories.
    pub async fn user_repos(&self, full_names: &[&str]) {
        let repos: Vec<_> = full_names.iter().map(|n| mock_repository(n)).collect();
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(repos))
            .mount(&self.server)
            .await;
    }
}

/// Repository context for building mocks.
pub struct MockRepoContext<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
}

impl<'a> MockRepoContext<'a> {
    fn base_path(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.repo)
    }

    /// Mock GET /repos/{owner}/{repo}.
    pub async fn get(&self) {
        let full_name = format!("{}/{}", self.owner, self.repo);
        Mock::given(method("GET"))
            .and(path(self.base_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_repository(&full_name)))
            .mount(self.server)
            .await;
    }

    /// Mock GET /repos/{owner}/{repo} returning 404.
    pub async fn get_not_found(&self) {
        Mock::given(method("GET"))
            .and(path(self.base_path()))
            .respond_with(not_found())
            .mount(self.server)
            .await;
    }

    pub async fn labels(&self, names: &[&str]) {
        let labels: Vec<_> = names
            .iter()
            .map(|n| json!({"id": 1, "name": n, "color": "d73a4a", "default": false}))
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("{}/labels", self.base_path())))
            .respond_with(ResponseTemplate::new(200).set_body_json(labels))
            .mount(self.server)
            .await;
    }

    /// Mock GET /repos/{owner}/{repo}/labels failing with `status`.
    pub async fn labels_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("{}/labels", self.base_path())))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"message": "Server Error"})),
            )
            .mount(self.server)
            .await;
    }

    pub async fn assignees(&self, logins: &[&str]) {
        let users: Vec<_> = logins
            .iter()
            .map(|l| json!({"login": l, "id": 1, "type": "User"}))
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("{}/assignees", self.base_path())))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .mount(self.server)
            .await;
    }

    /// Mock GET /repos/{owner}/{repo}/milestones?state=open.
    pub async fn open_milestones(&self, milestones: &[(u64, &str)]) {
        let body: Vec<_> = milestones
            .iter()
            .map(|(number, title)| json!({"number": number, "title": title, "state": "open"}))
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("{}/milestones", self.base_path())))
            .and(query_param("state", "open"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(self.server)
            .await;
    }

    /// Fail the test if milestones are fetched.
    pub async fn expect_no_milestone_lookup(&self) {
        Mock::given(method("GET"))
            .and(path(format!("{}/milestones", self.base_path())))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(self.server)
            .await;
    }

    /// Create a builder for POST /repos/{owner}/{repo}/issues.
    pub fn create_issue(&self, number: u64) -> MockCreateIssueBuilder<'a> {
        MockCreateIssueBuilder {
            server: self.server,
            path: format!("{}/issues", self.base_path()),
            html_url: format!("https://github.com/{}/{}/issues/{number}", self.owner, self.repo),
            number,
            expected_body: None,
            failure: None,
        }
    }
}

/// Builder for the create-issue mock.
pub struct MockCreateIssueBuilder<'a> {
    server: &'a MockServer,
    path: String,
    html_url: String,
    number: u64,
    expected_body: Option<serde_json::Value>,
    failure: Option<(u16, serde_json::Value)>,
}

impl MockCreateIssueBuilder<'_> {
    /// Only match requests whose JSON body contains `body`.
    pub fn expect_body(mut self, body: serde_json::Value) -> Self {
        self.expected_body = Some(body);
        self
    }

    /// Answer with an error status and body instead of the created issue.
    pub fn fail(mut self, status: u16, body: serde_json::Value) -> Self {
        self.failure = Some((status, body));
        self
    }

    /// Mount the mock. Expects exactly one matching call.
    pub async fn mount(self) {
        let response = match self.failure {
            Some((status, body)) => ResponseTemplate::new(status).set_body_json(body),
            None => ResponseTemplate::new(201).set_body_json(json!({
                "id": 1,
                "number": self.number,
                "state": "open",
                "html_url": self.html_url
            })),
        };
        let mock = Mock::given(method("POST")).and(path(self.path));
        let mock = match self.expected_body {
            Some(body) => mock.and(body_partial_json(body)),
            None => mock,
        };
        mock.respond_with(response)
            .expect(1)
            .mount(self.server)
            .await;
    }
}
