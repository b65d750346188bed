//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring a mock route and the client
//! pointed at it. Server configuration steps are queued and applied during the final
//! `build()` call, which binds the server and creates the client.

use routemock::{
    http::{Method, StatusCode},
    BodyValidator, Config, MockServer, MockServerBuilder, TestCredential,
};

use crate::{
    error::TestError,
    fixtures::factory::{basic_credential, test_config, token_credential},
    logging::init_logging,
    TestContext,
};

type ServerStep = Box<dyn FnOnce(MockServerBuilder) -> MockServerBuilder>;

/// Builder for declarative test initialization.
///
/// Defaults to bearer token authentication with the standard test token, a `GET` route, and
/// the [`TEST_PRODUCT`](crate::constant::TEST_PRODUCT) configuration resolving fixtures from
/// this crate's `fixtures/` directory.
///
/// # Example
///
/// ```no_run
/// use routemock_test_utils::{fixtures::ITEMS_JSON, TestBuilder};
///
/// # async fn example() -> Result<(), routemock_test_utils::TestError> {
/// let test = TestBuilder::new("/api/items")
///     .with_json_fixture(ITEMS_JSON, 2)
///     .build()
///     .await?;
///
/// let response = test.client.get("/api/items", Some(2)).await?;
/// assert_eq!(response.status, 200);
///
/// test.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    route: String,
    credential: TestCredential,
    client_credential: Option<TestCredential>,
    config: Option<Config>,

    // Applied in order to the server builder during `build()`
    server_steps: Vec<ServerStep>,
}

impl TestBuilder {
    /// Create a new TestBuilder for `route`.
    ///
    /// # Arguments
    /// - `route` - Path pattern the mock server binds
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            credential: token_credential(),
            client_credential: None,
            config: None,
            server_steps: Vec::new(),
        }
    }

    /// Expect and send basic auth with the standard test username and password.
    pub fn with_basic_auth(mut self) -> Self {
        self.credential = basic_credential();
        self
    }

    /// Expect and send `credential`.
    pub fn with_credential(mut self, credential: TestCredential) -> Self {
        self.credential = credential;
        self
    }

    /// Make the client present `credential` instead of the one the server expects.
    ///
    /// Used to exercise the server's authentication check.
    pub fn with_client_credential(mut self, credential: TestCredential) -> Self {
        self.client_credential = Some(credential);
        self
    }

    /// Replace the default test configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_method(self, method: Method) -> Self {
        self.with_server_step(move |server| server.method(method))
    }

    /// Serve JSON fixture `name` as API version `version`.
    ///
    /// # Arguments
    /// - `name` - Fixture file name, relative to the configured fixture directory
    /// - `version` - API version required in `Accept` and served in `Content-Type`
    pub fn with_json_fixture(self, name: &str, version: u32) -> Self {
        let name = name.to_string();
        self.with_server_step(move |server| server.serve_json(name.as_str(), version))
    }

    /// Serve XML fixture `name`.
    pub fn with_xml_fixture(self, name: &str) -> Self {
        let name = name.to_string();
        self.with_server_step(move |server| server.serve_xml(name.as_str()))
    }

    pub fn with_body_validator<V>(self, validator: V) -> Self
    where
        V: BodyValidator + 'static,
    {
        self.with_server_step(move |server| server.body_validator(validator))
    }

    pub fn with_status(self, status: StatusCode) -> Self {
        self.with_server_step(move |server| server.status(status))
    }

    /// Require the route to be hit exactly `hits` times.
    pub fn expect_hits(self, hits: usize) -> Self {
        self.with_server_step(move |server| server.expect_hits(hits))
    }

    /// Queue an arbitrary server configuration step.
    pub fn with_server_step<F>(mut self, step: F) -> Self
    where
        F: FnOnce(MockServerBuilder) -> MockServerBuilder + 'static,
    {
        self.server_steps.push(Box::new(step));
        self
    }

    /// Bind the mock server and create the client pointed at it.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Bound server and configured client
    /// - `Err(TestError::ConfigError)` - The default test configuration is invalid
    /// - `Err(TestError::MockError)` - The server could not be bound or the client built
    pub async fn build(self) -> Result<TestContext, TestError> {
        init_logging();

        let config = match self.config {
            Some(config) => config,
            None => test_config()?,
        };

        let mut server = MockServer::builder(self.route, self.credential.clone());
        for step in self.server_steps {
            server = step(server);
        }
        let server = server.start(&config).await?;

        let client_credential = self.client_credential.unwrap_or(self.credential);
        let client = routemock::new_client(&server, client_credential, &config)?;

        Ok(TestContext {
            server,
            client,
            config,
        })
    }
}
