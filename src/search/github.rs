use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::SearchConfig;
use crate::models::Repository;

/// Popularity floor appended to every query.
pub const MIN_STARS: u32 = 10;
pub const MIN_FORKS: u32 = 5;

/// GitHub caps `per_page` at 100.
const MAX_PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("oss-finder/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("GitHub API responded with {status}")]
    Status { status: StatusCode },
    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Repository>,
}

/// Append the fixed popularity filters to an already translated query.
pub fn build_search_query(translated: &str) -> String {
    format!(
        "{} stars:>{} forks:>{}",
        translated.trim(),
        MIN_STARS,
        MIN_FORKS
    )
}

/// Thin client for `GET /search/repositories`.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: &SearchConfig, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Search repositories sorted by stars, most popular first.
    ///
    /// A blank query returns no results without touching the network.
    pub async fn search_repositories(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Repository>, SearchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let q = build_search_query(query);
        let per_page = limit.clamp(1, MAX_PER_PAGE).to_string();
        let url = format!("{}/search/repositories", self.api_base);
        debug!(%url, %q, %per_page, authenticated = self.token.is_some(), "sending search request");

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .query(&[
                ("q", q.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ]);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status { status });
        }

        let data: SearchResponse = response.json().await?;
        Ok(data.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve exactly one HTTP response and hand back the raw request head.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&buf).to_string()
        });

        (base, handle)
    }

    fn client_for(base: String, token: Option<&str>) -> GithubClient {
        let config = SearchConfig {
            api_base: base,
            ..SearchConfig::default()
        };
        GithubClient::new(&config, token.map(str::to_string)).unwrap()
    }

    const ONE_HIT: &str = r#"{
        "total_count": 1,
        "items": [{
            "id": 7,
            "name": "candle",
            "full_name": "huggingface/candle",
            "html_url": "https://github.com/huggingface/candle",
            "description": "Minimalist ML framework",
            "stargazers_count": 15000,
            "forks_count": 900,
            "updated_at": "2024-05-01T10:00:00Z",
            "language": "Rust",
            "license": {"key": "apache-2.0", "name": "Apache License 2.0", "spdx_id": "Apache-2.0", "url": null},
            "topics": ["ml", "inference"]
        }]
    }"#;

    #[test]
    fn test_build_search_query() {
        assert_eq!(
            build_search_query("inference engine"),
            "inference engine stars:>10 forks:>5"
        );
    }

    #[tokio::test]
    async fn test_blank_query_skips_request() {
        let client = client_for("http://127.0.0.1:9".to_string(), None);
        assert!(client.search_repositories("   ", 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_decodes_items_and_sends_fixed_params() {
        let (base, server) = serve_once("200 OK", ONE_HIT).await;
        let client = client_for(base, Some("secret"));

        let repos = client.search_repositories("inference", 500).await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name, "huggingface/candle");
        assert_eq!(repos[0].license.as_ref().unwrap().key, "apache-2.0");

        let head = server.await.unwrap();
        let request_line = head.lines().next().unwrap();
        assert!(request_line.starts_with("GET /search/repositories?"));
        assert!(request_line.contains("sort=stars"));
        assert!(request_line.contains("order=desc"));
        assert!(request_line.contains("per_page=100"));
        assert!(request_line.contains("stars%3A%3E10"));
        assert!(head.to_lowercase().contains("authorization: bearer secret"));
    }

    #[tokio::test]
    async fn test_error_status() {
        let (base, server) = serve_once("403 Forbidden", r#"{"message":"rate limited"}"#).await;
        let client = client_for(base, None);

        let err = client.search_repositories("rust", 5).await.unwrap_err();
        assert!(matches!(err, SearchError::Status { status } if status == StatusCode::FORBIDDEN));

        let head = server.await.unwrap();
        assert!(!head.to_lowercase().contains("authorization:"));
    }
}
