use crate::config::RepoId;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

pub const UNKNOWN_ISSUE: &str = "Unknown issue...";
pub const PRIVATE_REPO_REJECTED: &str = "Only public repo data are allowed";

/// A repository's statistics at fetch time.
///
/// Either every statistic is present and `message` is empty, or every statistic
/// is absent and `message` says why. Absent statistics serialize as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSnapshot {
    /// Display name, `owner/repo`.
    pub name: String,
    #[serde(serialize_with = "or_empty")]
    pub forks: Option<u64>,
    #[serde(serialize_with = "or_empty")]
    pub stars: Option<u64>,
    #[serde(serialize_with = "or_empty")]
    pub watchers: Option<u64>,
    #[serde(serialize_with = "or_empty")]
    pub last_update: Option<DateTime<Utc>>,
    /// Open pull requests.
    #[serde(serialize_with = "or_empty")]
    pub pull_requests: Option<u64>,
    #[serde(serialize_with = "or_empty")]
    pub closed_pull_requests: Option<u64>,
    pub message: String,
}

/// Statistics gathered for a repository that could be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoStats {
    pub forks: u64,
    pub stars: u64,
    pub watchers: u64,
    pub last_update: DateTime<Utc>,
    pub open_pull_requests: u64,
    pub closed_pull_requests: u64,
}

impl RepoSnapshot {
    pub fn populated(repo_id: &RepoId, stats: RepoStats) -> Self {
        Self {
            name: repo_id.to_string(),
            forks: Some(stats.forks),
            stars: Some(stats.stars),
            watchers: Some(stats.watchers),
            last_update: Some(stats.last_update),
            pull_requests: Some(stats.open_pull_requests),
            closed_pull_requests: Some(stats.closed_pull_requests),
            message: String::new(),
        }
    }

    /// A snapshot without statistics. The name carries neither owner nor repo.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            name: "/".to_string(),
            forks: None,
            stars: None,
            watchers: None,
            last_update: None,
            pull_requests: None,
            closed_pull_requests: None,
            message: message.into(),
        }
    }

    pub fn has_stats(&self) -> bool {
        self.message.is_empty()
    }
}

fn or_empty<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}
