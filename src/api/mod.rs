//! HTTP API layer.
//!
//! All routes live under `/api`. Handlers share one [`ApiContext`] built
//! at process start; the router is composable and can be mounted on any
//! axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_api_server, ApiServer};
pub use types::ApiContext;
