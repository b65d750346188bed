//! The request contract bound to a mock route.

use std::{fmt, sync::Arc};

use axum::http::Method;

use crate::{
    model::credential::TestCredential,
    validate::body::{AcceptAnyBody, BodyValidator},
};

/// What the client under test must send for the route to serve its fixture.
///
/// Created per test and owned by the route handler; never mutated once the server is bound.
#[derive(Clone)]
pub struct RequestExpectation {
    pub method: Method,
    /// Versioned `Accept` header to require. `None` or `Some(0)` skips the check.
    pub version: Option<u32>,
    pub credential: TestCredential,
    pub body_validator: Arc<dyn BodyValidator>,
}

impl RequestExpectation {
    /// Expect `method` with `credential`, no `Accept` check and any body.
    pub fn new(method: Method, credential: TestCredential) -> Self {
        Self {
            method,
            version: None,
            credential,
            body_validator: Arc::new(AcceptAnyBody),
        }
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_body_validator<V>(mut self, validator: V) -> Self
    where
        V: BodyValidator + 'static,
    {
        self.body_validator = Arc::new(validator);
        self
    }

    /// Version whose `Accept` header is required, if any.
    pub fn accept_version(&self) -> Option<u32> {
        self.version.filter(|v| *v > 0)
    }
}

impl fmt::Debug for RequestExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestExpectation")
            .field("method", &self.method)
            .field("version", &self.version)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}
