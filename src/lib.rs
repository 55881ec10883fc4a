//! CORS-Bypass Monitor Proxy
//!
//! A small reverse proxy in front of a temperature-monitoring backend.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────┐
//!                     │               MONITOR PROXY               │
//!                     │                                           │
//!   Browser ──GET /──▶│  static dashboard (site.html from disk)   │
//!                     │                                           │
//!   Browser ──GET /current──▶┌────────┐    ┌──────────┐          │
//!   Browser ──GET /stats ───▶│  http  │───▶│ upstream │──────────┼──▶ Monitor
//!                     │      │ server │    │ forwarder│          │    Backend
//!   Browser ◀─────────┼──────│  CORS  │◀───│ (5s cap) │◀─────────┼───
//!                     │      └────────┘    └──────────┘          │
//!                     │                                           │
//!                     │  config (TOML, validated at startup)      │
//!                     └──────────────────────────────────────────┘
//! ```
//!
//! The backend speaks plain HTTP with no CORS support; this proxy relays
//! its responses byte-for-byte while adding permissive CORS headers, so a
//! browser page served from `/` can call `/current` and `/stats` directly.

pub mod config;
pub mod http;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use upstream::Forwarder;
