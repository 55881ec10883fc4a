//! Outbound HTTP client for the monitor backend.
//!
//! # Responsibilities
//! - Build the backend URL (configured origin + inbound path + query)
//! - Forward the inbound method with a replaced header set
//! - Bound every call with the configured timeout
//! - Capture any backend reply as-is, including error statuses

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, HeaderValue, Method, StatusCode};
use url::Url;

use crate::config::UpstreamConfig;

/// Error type for upstream operations.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The configured base URL does not parse.
    #[error("invalid upstream base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Client(reqwest::Error),

    /// The backend call failed to complete: connection refused, DNS
    /// failure, timeout, or a protocol error mid-response.
    #[error("upstream request failed: {0}")]
    Transport(reqwest::Error),
}

/// A backend reply captured for passthrough.
#[derive(Debug)]
pub struct UpstreamResponse {
    /// Backend status code, relayed verbatim (non-2xx included).
    pub status: StatusCode,
    /// Backend content-type, `application/json` when the backend sent none.
    pub content_type: HeaderValue,
    /// Raw body bytes, untransformed.
    pub body: Bytes,
}

/// Issues bounded calls against the configured monitor backend.
///
/// Stateless across calls: each forward is independent, with no retries,
/// caching, or coordination between concurrent requests.
pub struct Forwarder {
    client: reqwest::Client,
    base: Url,
    timeout: Duration,
}

impl Forwarder {
    /// Create a forwarder for the configured backend origin.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base = Url::parse(&config.base_url)?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self {
            client,
            base,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Backend URL for a forwarded request: configured origin plus the
    /// inbound path, with the raw query string attached verbatim.
    fn target_url(&self, path: &str, query: Option<&str>) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url.set_query(query);
        url
    }

    /// Forward a request to the backend and capture its reply.
    ///
    /// The inbound header set is dropped; the outbound request carries
    /// exactly `Content-Type: application/json`. Any reply the backend
    /// produces within the timeout is a success at this layer.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.target_url(path, query);

        let response = self
            .client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));
        let body = response.bytes().await.map_err(UpstreamError::Transport)?;

        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forwarder(base_url: &str) -> Forwarder {
        let config = UpstreamConfig {
            base_url: base_url.to_string(),
            ..UpstreamConfig::default()
        };
        Forwarder::new(&config).unwrap()
    }

    #[test]
    fn target_url_is_base_plus_route() {
        let f = forwarder("http://localhost:8080");
        let url = f.target_url("/current", None);
        assert_eq!(url.as_str(), "http://localhost:8080/current");
    }

    #[test]
    fn query_string_is_attached_verbatim() {
        let f = forwarder("http://localhost:8080");
        let url = f.target_url("/stats", Some("from=100&to=200"));
        assert_eq!(url.as_str(), "http://localhost:8080/stats?from=100&to=200");

        // Percent-encoded input stays encoded; nothing is re-normalized.
        let url = f.target_url("/stats", Some("label=a%20b"));
        assert_eq!(url.query(), Some("label=a%20b"));
    }

    #[test]
    fn no_query_means_no_question_mark() {
        let f = forwarder("http://127.0.0.1:9000");
        let url = f.target_url("/stats", None);
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/stats");
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let config = UpstreamConfig {
            base_url: "not a url".to_string(),
            ..UpstreamConfig::default()
        };
        assert!(matches!(
            Forwarder::new(&config),
            Err(UpstreamError::InvalidBaseUrl(_))
        ));
    }
}
