//! # itemhub-api
//!
//! HTTP API layer for ItemHub built on Axum.
//!
//! Provides the item endpoints, the welcome and health routes, request
//! extractors, middleware (request logging, CORS), and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
