use axum::http::{Method, StatusCode};

use crate::{
    config::Config,
    error::Error,
    model::{
        credential::TestCredential,
        expectation::RequestExpectation,
        fixture::{FixtureSource, FixtureSpec},
    },
    server::{handler::RouteHandler, MockServer},
    validate::body::BodyValidator,
};

/// Builder for a mock server that has not been bound yet.
///
/// Defaults to a `GET` route with no `Accept` check, any body, and an empty unversioned JSON
/// fixture. Methods can be chained together and finalized with [`start`](Self::start).
///
/// ```no_run
/// use axum::http::Method;
/// use routemock::{Config, ExpectJsonBody, MockServer, TestCredential};
///
/// # async fn example() -> Result<(), routemock::Error> {
/// let config = Config::new("go.cd")?;
/// let server = MockServer::builder("/go/api/admin/pipelines", TestCredential::basic("admin", "badger"))
///     .method(Method::POST)
///     .body_validator(ExpectJsonBody(serde_json::json!({"name": "build"})))
///     .serve_json("pipeline.json", 11)
///     .expect_hits(1)
///     .start(&config)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MockServerBuilder {
    route: String,
    expectation: RequestExpectation,
    fixture: FixtureSpec,
    expected_hits: Option<usize>,
}

impl MockServerBuilder {
    pub fn new(route: impl Into<String>, credential: TestCredential) -> Self {
        Self {
            route: route.into(),
            expectation: RequestExpectation::new(Method::GET, credential),
            fixture: FixtureSpec::json(FixtureSource::inline(""), None),
            expected_hits: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.expectation.method = method;
        self
    }

    pub fn body_validator<V>(mut self, validator: V) -> Self
    where
        V: BodyValidator + 'static,
    {
        self.expectation = self.expectation.with_body_validator(validator);
        self
    }

    /// Serve a JSON fixture as API version `version`.
    ///
    /// Also requires the matching versioned `Accept` header when `version` is greater than zero.
    pub fn serve_json(mut self, source: impl Into<FixtureSource>, version: u32) -> Self {
        self.expectation.version = Some(version);
        self.fixture = FixtureSpec::json(source, Some(version)).with_status(self.fixture.status);
        self
    }

    /// Serve an XML fixture. Clears any `Accept` requirement set by [`serve_json`](Self::serve_json).
    pub fn serve_xml(mut self, source: impl Into<FixtureSource>) -> Self {
        self.expectation.version = None;
        self.fixture = FixtureSpec::xml(source).with_status(self.fixture.status);
        self
    }

    /// Answer passing requests with `status` instead of `200 OK`.
    pub fn status(mut self, status: StatusCode) -> Self {
        self.fixture.status = status;
        self
    }

    pub fn expect_hits(mut self, hits: usize) -> Self {
        self.expected_hits = Some(hits);
        self
    }

    /// The composed handler this builder describes.
    pub fn handler(&self) -> RouteHandler {
        RouteHandler {
            expectation: self.expectation.clone(),
            fixture: self.fixture.clone(),
            expected_hits: self.expected_hits,
        }
    }

    /// Bind the route and start serving.
    pub async fn start(self, config: &Config) -> Result<MockServer, Error> {
        MockServer::start(&self.route, self.handler(), config).await
    }
}
