//! HTTP client for talking to maintd.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use maint_common::{InfoResponse, ResetResponse, StatusResponse, DEFAULT_SERVER_URL};

/// Client for the maintd HTTP API. Reads are idempotent and carry no
/// client-side state, so overlapping requests are harmless.
pub struct StatusClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatusClient {
    /// Resolve the server base URL.
    ///
    /// Priority:
    /// 1. Explicit --server flag
    /// 2. $MAINTCTL_SERVER environment variable
    /// 3. http://127.0.0.1:3001 (default)
    pub fn resolve_base_url(explicit: Option<&str>) -> String {
        if let Some(url) = explicit {
            return url.trim_end_matches('/').to_string();
        }
        if let Ok(url) = std::env::var("MAINTCTL_SERVER") {
            return url.trim_end_matches('/').to_string();
        }
        DEFAULT_SERVER_URL.to_string()
    }

    pub fn new(explicit: Option<&str>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: Self::resolve_base_url(explicit),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One status read. No retry; callers decide when to poll again.
    pub async fn status(&self) -> Result<StatusResponse> {
        self.get_json("/api/maintenance/status").await
    }

    pub async fn info(&self) -> Result<InfoResponse> {
        self.get_json("/api/info").await
    }

    pub async fn reset(&self) -> Result<ResetResponse> {
        let url = format!("{}/api/maintenance/reset", self.base_url);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .with_context(|| format!("cannot reach maintd at {}", self.base_url))?;
        check_http_status(&url, response.status())?;
        response
            .json()
            .await
            .with_context(|| format!("failed to parse response from {url}"))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("cannot reach maintd at {}", self.base_url))?;
        check_http_status(&url, response.status())?;
        response
            .json()
            .await
            .with_context(|| format!("failed to parse response from {url}"))
    }
}

/// Non-success answers surface as errors; the caller's next poll or re-run
/// is the retry.
fn check_http_status(url: &str, status: reqwest::StatusCode) -> Result<()> {
    if !status.is_success() {
        bail!("{url} answered {status}");
    }
    Ok(())
}
