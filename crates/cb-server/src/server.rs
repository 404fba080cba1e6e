//! The blocking `tiny_http` accept loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use cb_charts::Dashboard;
use tracing::{debug, warn};

use crate::error::ServerError;
use crate::router::{Response, Router};

/// How often the loop wakes to check for a stop request.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Asks a running [`DashboardServer`] to return from [`DashboardServer::run`].
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A bound server. `run` blocks, so call it from `spawn_blocking` or a thread.
pub struct DashboardServer {
    server: tiny_http::Server,
    router: Router,
    stop: StopHandle,
}

impl DashboardServer {
    /// Bind `address` (`host:port`; port `0` picks a free one).
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address cannot be listened on.
    pub fn bind(address: &str, dashboard: Arc<Dashboard>) -> Result<Self, ServerError> {
        let server = tiny_http::Server::http(address).map_err(|source| ServerError::Bind {
            address: address.to_string(),
            source,
        })?;
        Ok(Self {
            server,
            router: Router::new(dashboard),
            stop: StopHandle::default(),
        })
    }

    /// `http://host:port` of the bound socket.
    #[must_use]
    pub fn url(&self) -> String {
        self.server
            .server_addr()
            .to_ip()
            .map_or_else(|| "http://localhost".to_string(), |addr| format!("http://{addr}"))
    }

    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Serve requests one at a time until the stop handle fires.
    pub fn run(&self) {
        while !self.stop.is_stopped() {
            match self.server.recv_timeout(POLL_INTERVAL) {
                Ok(Some(request)) => self.respond(request),
                Ok(None) => {}
                Err(error) => warn!(%error, "failed to accept request"),
            }
        }
        debug!("server loop stopped");
    }

    fn respond(&self, request: tiny_http::Request) {
        let method = request.method().to_string();
        let url = request.url().to_string();
        let response = self.router.handle(&method, &url);

        if response.status >= 500 {
            warn!(%method, %url, status = response.status, body = %response.body, "request failed");
        } else {
            debug!(%method, %url, status = response.status, "request");
        }

        if let Err(error) = request.respond(into_tiny(response)) {
            warn!(%method, %url, %error, "failed to write response");
        }
    }
}

fn into_tiny(response: Response) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let Response {
        status,
        content_type,
        headers,
        body,
    } = response;

    let mut out = tiny_http::Response::from_string(body).with_status_code(status);
    for (name, value) in std::iter::once(("Content-Type", content_type)).chain(headers) {
        if let Ok(header) = tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            out.add_header(header);
        }
    }
    out
}
