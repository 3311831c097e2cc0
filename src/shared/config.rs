use thiserror::Error;

use super::env_var::EnvVars;
use crate::gateway::AllowList;
use crate::infra::github::{DEFAULT_API_BASE_URL, DEFAULT_OAUTH_BASE_URL};

const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000/callback";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}

/// Runtime configuration for the web front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,

    /// Owners to surface. Empty means no filtering.
    pub allowed_owners: AllowList,

    pub redirect_uri: String,
    pub api_base_url: String,
    pub oauth_base_url: String,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_vars(EnvVars::load())
    }

    fn from_env_vars(env: EnvVars) -> Result<Self, ConfigError> {
        let client_id = env
            .client_id
            .ok_or(ConfigError::MissingVar(EnvVars::client_id_name()))?;
        let client_secret = env
            .client_secret
            .ok_or(ConfigError::MissingVar(EnvVars::client_secret_name()))?;

        Ok(Self {
            client_id,
            client_secret,
            allowed_owners: env
                .allowed_owners
                .as_deref()
                .map(AllowList::parse)
                .unwrap_or_default(),
            redirect_uri: env
                .redirect_uri
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            api_base_url: env
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            oauth_base_url: env
                .oauth_base_url
                .unwrap_or_else(|| DEFAULT_OAUTH_BASE_URL.to_string()),
        })
    }
}
