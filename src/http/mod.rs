//! HTTP server module.
//!
//! Serves a router over plain HTTP; TLS is expected to be terminated by a
//! reverse proxy or load balancer in front of the service.
//!
//! The server includes:
//! - Bound address reporting through the server handle (ephemeral ports)
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use axum_server::Handle;
pub use server::{serve, start_server, ServerError};
