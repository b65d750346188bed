//! The composed route handler: request checks followed by fixture serving.

use std::sync::Arc;

use axum::{
    body::to_bytes,
    extract::{Request, State},
    http::{Method, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use dioxus_logger::tracing;

use crate::{
    error::contract::ContractViolation,
    fixture,
    model::{
        credential::TestCredential,
        expectation::RequestExpectation,
        fixture::{FixtureSource, FixtureSpec},
    },
    response,
    server::state::RouteState,
    validate::{self, body::BodyValidator},
};

/// Everything a bound route needs to answer requests: the contract each request must satisfy
/// and the fixture served once it does.
#[derive(Debug, Clone)]
pub struct RouteHandler {
    pub expectation: RequestExpectation,
    pub fixture: FixtureSpec,
    /// Number of requests the route must receive, checked by `MockServer::verify`.
    pub expected_hits: Option<usize>,
}

impl RouteHandler {
    pub fn new(expectation: RequestExpectation, fixture: FixtureSpec) -> Self {
        Self {
            expectation,
            fixture,
            expected_hits: None,
        }
    }

    /// Require the route to be requested exactly `hits` times.
    pub fn expect_hits(mut self, hits: usize) -> Self {
        self.expected_hits = Some(hits);
        self
    }
}

/// Handler serving the JSON fixture at `path` for `method` requests.
///
/// When `version` is greater than zero the request must carry the matching versioned `Accept`
/// header and the fixture is served with the versioned JSON content type. Every request body is
/// passed to `body_validator`.
pub fn serve_file_as_json<V>(
    credential: TestCredential,
    method: Method,
    path: impl Into<FixtureSource>,
    version: u32,
    body_validator: V,
) -> RouteHandler
where
    V: BodyValidator + 'static,
{
    let expectation = RequestExpectation::new(method, credential)
        .with_version(version)
        .with_body_validator(body_validator);

    RouteHandler::new(expectation, FixtureSpec::json(path, Some(version)))
}

/// Handler serving the XML fixture at `path` for `method` requests.
///
/// Only the method and credentials are checked.
pub fn serve_file_as_xml(
    credential: TestCredential,
    method: Method,
    path: impl Into<FixtureSource>,
) -> RouteHandler {
    RouteHandler::new(
        RequestExpectation::new(method, credential),
        FixtureSpec::xml(path),
    )
}

/// Router answering any method on the bound route and rejecting every other path.
///
/// A route ending in `/` binds its whole subtree as well.
pub(crate) fn router(state: Arc<RouteState>) -> Router {
    let route = state.route.clone();

    let mut router = Router::new().route(&route, any(serve_route));
    if route.ends_with('/') {
        router = router.route(&format!("{}{{*subtree}}", route), any(serve_route));
    }

    router.fallback(unbound_route).with_state(state)
}

async fn serve_route(State(state): State<Arc<RouteState>>, request: Request) -> Response {
    state.record_hit();

    let (parts, body) = request.into_parts();
    let handler = &state.handler;
    if let Err(violation) = validate::check_head(
        &handler.expectation,
        &state.config.product,
        &parts.method,
        &parts.headers,
    ) {
        return state.reject(violation);
    }

    // The body is only read once the head is known to be acceptable
    let body = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            return state.reject(ContractViolation::UnreadableBody(e.to_string()));
        }
    };

    if let Err(violation) = validate::check_body(handler.expectation.body_validator.as_ref(), &body)
    {
        return state.reject(violation);
    }

    match fixture::load(&handler.fixture.source, &state.config) {
        Ok(contents) => {
            tracing::debug!(
                route = %state.route,
                fixture = %handler.fixture.source,
                bytes = contents.len(),
                "Serving fixture"
            );

            response::write(contents, &handler.fixture, &state.config.product)
        }
        Err(e) => {
            state.record_failure(e.to_string());
            e.into_response()
        }
    }
}

async fn unbound_route(
    State(state): State<Arc<RouteState>>,
    method: Method,
    uri: Uri,
) -> Response {
    state.reject(ContractViolation::UnboundRoute {
        method,
        path: uri.path().to_string(),
        route: state.route.clone(),
    })
}
