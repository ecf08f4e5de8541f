#![allow(dead_code)]

use repo_duel::client::{ApiClient, ApiResponse};
use repo_duel::config::AppConfig;
use std::collections::HashMap;
use std::sync::Mutex;

pub const API: &str = "https://api.test";

pub fn test_config() -> AppConfig {
    AppConfig {
        github_api_url: API.to_string(),
        static_dir: "tests/no-such-dir".into(),
        ..AppConfig::default()
    }
}

/// Serves canned responses by exact URL and records every request.
#[derive(Default)]
pub struct StubClient {
    routes: HashMap<String, ApiResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn route(mut self, url: &str, response: ApiResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    /// Registers a public repository whose pull request listings fit on one page.
    pub fn repo(
        self,
        full_name: &str,
        forks: u64,
        stars: u64,
        watchers: u64,
        open: usize,
        closed: usize,
    ) -> Self {
        let base = format!("{API}/repos/{full_name}");
        let body = serde_json::json!({
            "full_name": full_name,
            "forks": forks,
            "stargazers_count": stars,
            "subscribers_count": watchers,
            "updated_at": "2024-05-01T12:00:00Z",
            "private": false,
        });
        self.route(&base, respond(200, &["etag: 1"], &body.to_string()))
            .route(
                &format!("{base}/pulls?per_page=30&state=closed"),
                respond(200, &["etag: 2"], &items(closed)),
            )
            .route(
                &format!("{base}/pulls?per_page=30&state=open"),
                respond(200, &["etag: 3"], &items(open)),
            )
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ApiClient for StubClient {
    async fn get(&self, url: &str) -> ApiResponse {
        self.calls.lock().unwrap().push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(ApiResponse::transport_failure)
    }
}

pub fn respond(status: u16, header_lines: &[&str], body: &str) -> ApiResponse {
    ApiResponse {
        status,
        header_lines: header_lines.iter().map(|line| line.to_string()).collect(),
        body: Some(body.to_string()),
    }
}

pub fn items(count: usize) -> String {
    serde_json::Value::Array(vec![serde_json::json!({"id": 1}); count]).to_string()
}
