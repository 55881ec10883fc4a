//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the upstream origin is a usable http(s) base
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("upstream.base_url {0:?} is not a valid URL: {1}")]
    BaseUrlParse(String, url::ParseError),

    #[error("upstream.base_url {0:?} must use the http or https scheme")]
    BaseUrlScheme(String),

    #[error("upstream.base_url {0:?} must be an origin without a path")]
    BaseUrlPath(String),

    #[error("upstream.routes must not be empty")]
    NoRoutes,

    #[error("upstream route {0:?} must start with '/'")]
    RouteShape(String),

    #[error("upstream.timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::BaseUrlScheme(
                    config.upstream.base_url.clone(),
                ));
            }
            if url.path() != "/" {
                errors.push(ValidationError::BaseUrlPath(
                    config.upstream.base_url.clone(),
                ));
            }
        }
        Err(e) => {
            errors.push(ValidationError::BaseUrlParse(
                config.upstream.base_url.clone(),
                e,
            ));
        }
    }

    if config.upstream.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }
    for route in &config.upstream.routes {
        if !route.starts_with('/') {
            errors.push(ValidationError::RouteShape(route.clone()));
        }
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
