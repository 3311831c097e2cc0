//! Centralized reader for the environment variables quickissue understands.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

const CLIENT_ID: &str = "GITHUB_CLIENT_ID";
const CLIENT_SECRET: &str = "GITHUB_CLIENT_SECRET";
const ALLOWED_OWNERS: &str = "GITHUB_ALLOWED_OWNERS";
const REDIRECT_URI: &str = "QUICKISSUE_REDIRECT_URI";
const API_BASE_URL: &str = "QUICKISSUE_API_BASE_URL";
const OAUTH_BASE_URL: &str = "QUICKISSUE_OAUTH_BASE_URL";

/// Snapshot of all relevant environment variables at load time.
pub struct EnvVars {
    /// OAuth app client ID (required by `serve`).
    pub client_id: Option<String>,

    /// OAuth app client secret (required by `serve`).
    pub client_secret: Option<String>,

    /// Comma-separated owner names to show; unset shows every owner.
    pub allowed_owners: Option<String>,

    /// Callback URL registered with the OAuth app.
    pub redirect_uri: Option<String>,

    /// REST API root, e.g. for GitHub Enterprise.
    pub api_base_url: Option<String>,

    /// Root of the OAuth authorize and token endpoints.
    pub oauth_base_url: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read all variables from the current process.
    pub fn load() -> Self {
        Self {
            client_id: non_empty_var(CLIENT_ID),
            client_secret: non_empty_var(CLIENT_SECRET),
            allowed_owners: non_empty_var(ALLOWED_OWNERS),
            redirect_uri: non_empty_var(REDIRECT_URI),
            api_base_url: non_empty_var(API_BASE_URL),
            oauth_base_url: non_empty_var(OAUTH_BASE_URL),
        }
    }

    /// Returns the env var name for the client ID (used in error messages).
    pub fn client_id_name() -> &'static str {
        CLIENT_ID
    }

    /// Returns the env var name for the client secret (used in error messages).
    pub fn client_secret_name() -> &'static str {
        CLIENT_SECRET
    }
}
