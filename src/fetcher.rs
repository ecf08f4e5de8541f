use crate::client::ApiClient;
use crate::config::{AppConfig, RepoId};
use crate::pagination::{self, ITEMS_PER_PAGE};
use crate::snapshot::{RepoSnapshot, RepoStats, PRIVATE_REPO_REJECTED, UNKNOWN_ISSUE};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The subset of `GET /repos/{owner}/{repo}` this service reads.
#[derive(Debug, Deserialize)]
struct RepoResource {
    forks: u64,
    stargazers_count: u64,
    subscribers_count: u64,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    private: bool,
}

/// Error payload returned by the API on non-200 responses.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PullState {
    Open,
    Closed,
}

impl PullState {
    pub fn as_str(self) -> &'static str {
        match self {
            PullState::Open => "open",
            PullState::Closed => "closed",
        }
    }
}

pub fn repo_url(config: &AppConfig, repo_id: &RepoId) -> String {
    format!(
        "{}/repos/{}/{}",
        config.github_api_url, repo_id.owner, repo_id.repo
    )
}

pub fn pulls_url(repo_url: &str, state: PullState) -> String {
    format!(
        "{}/pulls?per_page={}&state={}",
        repo_url,
        ITEMS_PER_PAGE,
        state.as_str()
    )
}

/// Fetches a repository's statistics and pull request counts.
///
/// Never fails: lookup problems are reported through the snapshot's message.
/// Requests are issued one after another: the repository resource, then closed
/// and open pull request listings.
pub async fn fetch_snapshot<C: ApiClient>(
    client: &C,
    config: &AppConfig,
    repo_id: &RepoId,
) -> RepoSnapshot {
    let base_url = repo_url(config, repo_id);
    let response = client.get(&base_url).await;

    if !response.is_ok() {
        let message = response
            .json::<ErrorPayload>()
            .and_then(|payload| payload.message)
            .unwrap_or_else(|| UNKNOWN_ISSUE.to_string());
        tracing::info!(repo_id = %repo_id, status = response.status, message = %message, "Repository lookup failed");
        return RepoSnapshot::empty(message);
    }

    let Some(resource) = response.json::<RepoResource>() else {
        tracing::warn!(repo_id = %repo_id, "Repository payload could not be decoded");
        return RepoSnapshot::empty(UNKNOWN_ISSUE);
    };

    if resource.private {
        tracing::info!(repo_id = %repo_id, "Rejecting private repository");
        return RepoSnapshot::empty(PRIVATE_REPO_REJECTED);
    }

    let closed_pull_requests =
        pagination::count_items(client, &pulls_url(&base_url, PullState::Closed)).await;
    let open_pull_requests =
        pagination::count_items(client, &pulls_url(&base_url, PullState::Open)).await;

    tracing::debug!(repo_id = %repo_id, open_pull_requests, closed_pull_requests, "Fetched repository snapshot");

    RepoSnapshot::populated(
        repo_id,
        RepoStats {
            forks: resource.forks,
            stars: resource.stargazers_count,
            watchers: resource.subscribers_count,
            last_update: resource.updated_at,
            open_pull_requests,
            closed_pull_requests,
        },
    )
}
