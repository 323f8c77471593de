//! Publishing API service core.
//!
//! Builds the HTTP routing table for the service, with a liveness probe at
//! `/healthcheck`, and serves it with graceful shutdown. Business routes are
//! owned by the embedding service and merged in via
//! [`routes::build_http_mux_with`].

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::{build_http_mux, build_http_mux_with};
