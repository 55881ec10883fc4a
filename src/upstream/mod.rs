//! Upstream monitor server subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request (method, path, query)
//!     → client.rs (build backend URL, issue bounded HTTP call)
//!     → UpstreamResponse (status, content-type, body) on any backend reply
//!     → UpstreamError on transport failure (connect, DNS, timeout)
//! ```
//!
//! # Design Decisions
//! - One Forwarder built at startup, shared read-only by all handlers
//! - The outbound call returns an explicit Result; the HTTP layer matches it
//! - Backend 4xx/5xx statuses are not errors here; they pass through

pub mod client;

pub use client::{Forwarder, UpstreamError, UpstreamResponse};
