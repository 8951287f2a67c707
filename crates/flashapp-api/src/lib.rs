//! # flashapp-api
//!
//! HTTP API layer for FlashApp built on Axum.
//!
//! Provides the Pc REST endpoints, the health endpoint, middleware
//! (request logging, CORS, tracing), alert headers and error mapping.

pub mod alert;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
