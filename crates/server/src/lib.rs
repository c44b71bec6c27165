//! Recovr Server - HTTP REST API for lost-and-found matching
//!
//! This crate exposes the Recovr item store and matcher over HTTP:
//!
//! - **Items**: report lost/found items and look them up
//! - **Matching**: per-user suggestions, per-item matches, pair breakdowns
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Features
//!
//! - **User context**: the `X-User-Id` header set by the upstream gateway
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: `.env`, optional `server` config file, `RECOVR_SERVER__*` env vars
//! - **Error Handling**: JSON error bodies with stable error codes
//! - **Graceful Shutdown**: SIGTERM and Ctrl+C
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `POST /api/items` - Report an item (requires `X-User-Id`)
//! - `GET /api/items?status=LOST` - List items
//! - `GET /api/items/{id}` - Get an item
//! - `GET /api/matching/suggestions` - Suggestions for the current user (requires `X-User-Id`)
//! - `GET /api/matching/item/{item_id}` - Matches for one item
//! - `GET /api/matching/compare/{first_id}/{second_id}` - Score breakdown of two items

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use middleware::CurrentUser;
pub use server::{build_router, start_server};
pub use state::ServerState;
