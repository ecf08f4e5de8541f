pub mod client;
pub mod compare;
pub mod config;
pub mod fetcher;
pub mod pagination;
pub mod sanitize;
pub mod snapshot;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use client::{ApiClient, GitHubClient};
use compare::Comparison;
use config::{AppConfig, RepoId};
use sanitize::sanitize_input;
use serde::{Deserialize, Serialize};
use snapshot::RepoSnapshot;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Shared application state accessible to all request handlers.
pub struct AppState<C = GitHubClient> {
    /// Client used for every outbound GitHub request.
    pub client: C,
    /// Application configuration loaded from environment variables.
    pub config: AppConfig,
}

impl AppState<GitHubClient> {
    /// Initializes the application state with the production GitHub client.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let client = GitHubClient::new(&config)?;
        Ok(Self { client, config })
    }
}

impl<C: ApiClient> AppState<C> {
    pub fn with_client(config: AppConfig, client: C) -> Self {
        Self { client, config }
    }
}

/// Path parameters of the comparison endpoint, as received.
#[derive(Debug, Deserialize)]
pub struct ComparePath {
    pub user1: String,
    pub repo1: String,
    pub user2: String,
    pub repo2: String,
}

/// Response envelope: both snapshots and the comparison, keyed by position.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    #[serde(rename = "0")]
    pub first: RepoSnapshot,
    #[serde(rename = "1")]
    pub second: RepoSnapshot,
    #[serde(rename = "2")]
    pub comparison: Comparison,
}

pub fn create_app<C: ApiClient + 'static>(state: Arc<AppState<C>>) -> Router {
    let static_dir = &state.config.static_dir;
    let serve_dir =
        ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/{user1}/{repo1}/{user2}/{repo2}",
            get(compare_repos::<C>),
        )
        .fallback_service(serve_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "repo-duel",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Compares two repositories.
///
/// Always answers 200; upstream failures are carried as snapshot messages.
/// When both sanitized pairs name the same repository it is fetched once, which
/// keeps the unauthenticated API quota for other requests.
pub async fn compare_repos<C: ApiClient>(
    Path(path): Path<ComparePath>,
    State(state): State<Arc<AppState<C>>>,
) -> Json<CompareResponse> {
    let first_id = RepoId::new(sanitize_input(&path.user1), sanitize_input(&path.repo1));
    let second_id = RepoId::new(sanitize_input(&path.user2), sanitize_input(&path.repo2));

    let first = fetcher::fetch_snapshot(&state.client, &state.config, &first_id).await;
    let second = if second_id == first_id {
        tracing::debug!(repo_id = %first_id, "Reusing snapshot for identical repositories");
        first.clone()
    } else {
        fetcher::fetch_snapshot(&state.client, &state.config, &second_id).await
    };

    let comparison = compare::compare(&first, &second);
    tracing::debug!(first = %first_id, second = %second_id, ?comparison, "Returning comparison");

    Json(CompareResponse {
        first,
        second,
        comparison,
    })
}
