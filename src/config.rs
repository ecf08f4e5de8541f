//! Application configuration and environment variable parsing.
//!
//! Settings are read from the environment (optionally seeded from a `.env` file).
//! `AppConfig` governs where the server listens, which GitHub API it talks to,
//! the User-Agent it presents, and where the static front-end lives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// User-Agent sent with every GitHub request. The API rejects requests without one.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 5.1; rv:31.0) Gecko/20100101 Firefox/31.0";

/// A unique identifier for a GitHub repository.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    /// The owner of the repository (e.g., "rust-lang").
    pub owner: String,
    /// The name of the repository (e.g., "cargo").
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    /// Port the HTTP server binds to on all interfaces.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the GitHub REST API, without a trailing slash.
    #[serde(
        default = "default_github_api_url",
        deserialize_with = "deserialize_api_url"
    )]
    pub github_api_url: String,

    /// User-Agent presented to the GitHub API.
    #[serde(default = "default_user_agent")]
    pub github_user_agent: String,

    /// Directory holding the front-end assets served for non-API paths.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_port() -> u16 {
    3000
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            github_api_url: default_github_api_url(),
            github_user_agent: default_user_agent(),
            static_dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

fn deserialize_api_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(s.trim().trim_end_matches('/').to_string())
}
