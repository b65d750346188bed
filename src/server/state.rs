use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard,
};

use axum::response::{IntoResponse, Response};

use crate::{config::Config, error::contract::ContractViolation, server::handler::RouteHandler};

/// State shared between a [`MockServer`](crate::MockServer) and its request handlers.
#[derive(Debug)]
pub(crate) struct RouteState {
    pub route: String,
    pub handler: RouteHandler,
    pub config: Config,
    hits: AtomicUsize,
    failures: Mutex<Vec<String>>,
}

impl RouteState {
    pub fn new(route: &str, handler: RouteHandler, config: Config) -> Arc<Self> {
        Arc::new(Self {
            route: route.to_string(),
            handler,
            config,
            hits: AtomicUsize::new(0),
            failures: Mutex::new(Vec::new()),
        })
    }

    /// Count a request that reached the bound route.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn record_failure(&self, failure: String) {
        self.lock_failures().push(failure);
    }

    pub fn failures(&self) -> Vec<String> {
        self.lock_failures().clone()
    }

    /// Record `violation` and answer the client with it.
    pub fn reject(&self, violation: ContractViolation) -> Response {
        self.record_failure(violation.to_string());
        violation.into_response()
    }

    // A handler that panicked mid-push leaves a usable Vec behind, so poisoning is ignored.
    fn lock_failures(&self) -> MutexGuard<'_, Vec<String>> {
        self.failures
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
