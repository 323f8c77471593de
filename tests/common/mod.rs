//! Test harness: serves a router on a real ephemeral-port listener.

use std::net::SocketAddr;

use axum::Router;
use publishing_api::http::{serve, Handle};
use tokio::task::JoinHandle;

/// A running server bound to `127.0.0.1` on an ephemeral port.
///
/// The server is shut down when the value is dropped.
pub struct TestServer {
    addr: SocketAddr,
    handle: Handle,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Start serving `app` and wait until the listener is bound.
    pub async fn start(app: Router) -> Self {
        let handle = Handle::new();
        let task = tokio::spawn({
            let handle = handle.clone();
            async move {
                serve(app, "127.0.0.1:0".parse().unwrap(), handle)
                    .await
                    .expect("test server failed");
            }
        });

        let addr = handle
            .listening()
            .await
            .expect("test server failed to bind");

        Self { addr, handle, task }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.shutdown();
        self.task.abort();
    }
}
