//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the monitor proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream monitor server settings.
    pub upstream: UpstreamConfig,

    /// Static dashboard settings.
    pub static_site: StaticSiteConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Upstream monitor server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Origin of the monitor backend (scheme + host + port, no path).
    pub base_url: String,

    /// Paths that are forwarded to the backend. Each is registered for
    /// GET and OPTIONS; the path is forwarded as-is.
    pub routes: Vec<String>,

    /// Upstream request timeout in seconds. A call that has not completed
    /// within this window is treated as a transport failure.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            routes: vec!["/current".to_string(), "/stats".to_string()],
            timeout_secs: 5,
        }
    }
}

/// Static dashboard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticSiteConfig {
    /// Path to the HTML file served at `/`.
    pub index_path: String,
}

impl Default for StaticSiteConfig {
    fn default() -> Self {
        Self {
            index_path: "static/site.html".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
