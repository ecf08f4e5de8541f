//! Raw HTTP access to the GitHub REST API.
//!
//! Responses are reduced to a status code, the header lines in arrival order and
//! the body text. A request that never produced a response is reported with
//! status `0`, so callers treat it like any other non-200 outcome.

use crate::config::AppConfig;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Observer for the header lines of a response, called once per line in arrival order.
pub trait HeaderVisitor {
    fn visit(&mut self, line: &str);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code, or `0` when the transport failed.
    pub status: u16,
    /// Header lines formatted as `name: value`.
    pub header_lines: Vec<String>,
    pub body: Option<String>,
}

impl ApiResponse {
    pub fn transport_failure() -> Self {
        Self::default()
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn visit_headers<V: HeaderVisitor>(&self, visitor: &mut V) {
        for line in &self.header_lines {
            visitor.visit(line);
        }
    }

    /// Decodes the body, returning `None` when it is absent or does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Option<T> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Issues GET requests against the hosting provider.
pub trait ApiClient: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = ApiResponse> + Send;
}

/// Production client. One attempt per call, one configured User-Agent.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
}

impl GitHubClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.github_user_agent.clone())
            .build()?;

        Ok(Self { http })
    }

    async fn try_get(&self, url: &str) -> Result<ApiResponse, reqwest::Error> {
        let response = self.http.get(url).send().await?;

        let status = response.status().as_u16();
        let header_lines = response
            .headers()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, String::from_utf8_lossy(value.as_bytes())))
            .collect();
        let body = response.text().await?;

        Ok(ApiResponse {
            status,
            header_lines,
            body: Some(body),
        })
    }
}

impl ApiClient for GitHubClient {
    async fn get(&self, url: &str) -> ApiResponse {
        match self.try_get(url).await {
            Ok(response) => {
                tracing::debug!(url, status = response.status, "GitHub request completed");
                response
            }
            Err(e) => {
                tracing::warn!(url, "GitHub request failed: {}", e);
                ApiResponse::transport_failure()
            }
        }
    }
}
