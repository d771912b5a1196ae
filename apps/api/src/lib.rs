//! # kasir-api
//!
//! HTTP API for Kasir POS.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Server                                       │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► Router ───► Handlers ───► kasir-db       │
//! │                 │                                          │            │
//! │           TraceLayer, CorsLayer                         SQLite         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library half exists so integration tests can build the same
//! [`routes::create_router`] the binary serves.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{ApiConfig, ConfigError, CorsOrigins};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::create_router;
pub use state::AppState;
