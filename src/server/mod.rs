//! Route-bound mock HTTP server.
//!
//! A [`MockServer`] owns an ephemeral listener on `127.0.0.1` serving exactly one route for the
//! lifetime of one test. Its life is linear: unbound ([`MockServerBuilder`]), bound
//! ([`MockServer`] after [`MockServer::start`]), closed ([`MockServer::close`] or drop). A
//! closed server cannot be rebound; bind a new one instead.
//!
//! Requests that break the route's contract are answered with an error response and recorded.
//! Recorded failures make [`MockServer::verify`] fail, and a server dropped with failures that
//! were never verified panics so the owning test fails even if the client swallowed the error
//! response.

pub mod builder;
pub mod handler;
mod state;
mod transport;

use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use dioxus_logger::tracing;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

use crate::{
    config::Config,
    error::{verify::VerificationError, Error},
    model::credential::TestCredential,
    server::{builder::MockServerBuilder, handler::RouteHandler, state::RouteState},
};

/// An ephemeral HTTP server answering one route for one test.
pub struct MockServer {
    addr: SocketAddr,
    base_url: String,
    state: Arc<RouteState>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
    // Failures already reported through `verify`, so drop only panics for new ones
    verified_failures: AtomicUsize,
}

impl MockServer {
    /// Start configuring a server for `route` that expects `credential`.
    pub fn builder(route: impl Into<String>, credential: TestCredential) -> MockServerBuilder {
        MockServerBuilder::new(route, credential)
    }

    /// Bind `handler` to `route` on an ephemeral local port and start serving.
    ///
    /// The route accepts any method at the routing layer; the method is checked by the handler.
    /// Path parameters use axum's `{name}` syntax. A route ending in `/` also answers every path
    /// below it, so `/` matches any request path.
    ///
    /// Connections that fail at the transport level are logged at error level. They are not
    /// recorded as failures because no request reached the route's checks.
    ///
    /// # Returns
    /// - `Ok(MockServer)` - The bound, listening server
    /// - `Err(Error::InvalidRoute)` - `route` is not a bindable path pattern
    /// - `Err(Error::BindError)` - No local port could be bound
    pub async fn start(
        route: &str,
        handler: RouteHandler,
        config: &Config,
    ) -> Result<Self, Error> {
        validate_route(route)?;

        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .map_err(Error::BindError)?;
        let addr = listener.local_addr().map_err(Error::BindError)?;

        let state = RouteState::new(route, handler, config.clone());
        let app = handler::router(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(transport::serve(listener, app, shutdown_rx));

        tracing::debug!(route = %route, %addr, "Started mock server");

        Ok(Self {
            addr,
            base_url: format!("http://{}", addr),
            state,
            shutdown: Some(shutdown_tx),
            task: Some(task),
            verified_failures: AtomicUsize::new(0),
        })
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:49152`.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` on this server.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The bound route pattern.
    pub fn route(&self) -> &str {
        &self.state.route
    }

    pub fn config(&self) -> &Config {
        &self.state.config
    }

    /// Number of requests that reached the bound route, whether or not they passed its checks.
    pub fn hits(&self) -> usize {
        self.state.hits()
    }

    /// Messages of every failed request so far.
    pub fn failures(&self) -> Vec<String> {
        self.state.failures()
    }

    /// Check that no request failed and, if an expected hit count was set, that it was met.
    ///
    /// # Returns
    /// - `Ok(())` - Every request satisfied the route's contract
    /// - `Err(Error::VerificationError)` - Failures were recorded or the hit count differs
    pub fn verify(&self) -> Result<(), Error> {
        let failures = self.state.failures();
        self.verified_failures
            .store(failures.len(), Ordering::SeqCst);

        if !failures.is_empty() {
            return Err(VerificationError::RequestFailures {
                route: self.state.route.clone(),
                failures,
            }
            .into());
        }

        if let Some(expected) = self.state.handler.expected_hits {
            let actual = self.hits();
            if actual != expected {
                return Err(VerificationError::HitCountMismatch {
                    route: self.state.route.clone(),
                    expected,
                    actual,
                }
                .into());
            }
        }

        Ok(())
    }

    /// Verify the server, panicking with the verification error on failure.
    ///
    /// # Panics
    /// Panics if any request failed or the expected hit count was not met
    pub fn assert(&self) {
        if let Err(e) = self.verify() {
            panic!("{}", e);
        }
    }

    /// Shut the listener down and verify the server.
    ///
    /// Waits up to [`Config::shutdown_timeout`] for in-flight connections to finish before
    /// aborting the server task.
    pub async fn close(mut self) -> Result<(), Error> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        let mut task_error = None;
        if let Some(mut task) = self.task.take() {
            let timeout = self.state.config.shutdown_timeout();

            match tokio::time::timeout(timeout, &mut task).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => task_error = Some(Error::ServerTaskError(e.to_string())),
                Err(_) => {
                    tracing::warn!(
                        addr = %self.addr,
                        "Mock server did not shut down within {:?}, aborting",
                        timeout
                    );
                    task.abort();
                }
            }
        }

        tracing::debug!(route = %self.state.route, addr = %self.addr, "Closed mock server");

        self.verify()?;

        match task_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }

        if std::thread::panicking() {
            return;
        }

        let failures = self.state.failures();
        if failures.len() > self.verified_failures.load(Ordering::SeqCst) {
            panic!(
                "{}",
                VerificationError::RequestFailures {
                    route: self.state.route.clone(),
                    failures,
                }
            );
        }
    }
}

// axum panics on patterns it cannot register, so they are turned into errors up front.
fn validate_route(route: &str) -> Result<(), Error> {
    let invalid = |reason: &str| Error::InvalidRoute {
        route: route.to_string(),
        reason: reason.to_string(),
    };

    if !route.starts_with('/') {
        return Err(invalid("routes must start with '/'"));
    }

    if route
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err(invalid(
            "path parameters use the {name} syntax, ':' and '*' segments are not supported",
        ));
    }

    Ok(())
}
