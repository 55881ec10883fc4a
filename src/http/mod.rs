//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, CORS + trace layers)
//!     → "/"           → static dashboard from disk
//!     → "/current",
//!       "/stats"      → proxy_handler → upstream::Forwarder → backend
//!     → response passthrough (or 502 JSON on transport failure)
//! ```

pub mod server;

pub use server::HttpServer;
