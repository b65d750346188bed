//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`: the bound mock server and
//! the client configured to talk to it.

use routemock::{ApiClient, Config, MockServer};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather than
/// constructing it directly.
pub struct TestContext {
    /// Mock HTTP server bound to the test's route
    pub server: MockServer,
    /// Client pointed at the mock server, presenting the test credential
    pub client: ApiClient,
    /// Configuration the server and client were built with
    pub config: Config,
}

impl TestContext {
    /// Assert the mock route received only valid requests.
    ///
    /// # Panics
    /// Panics if any request failed its checks or the expected hit count was not met
    pub fn assert_mocks(&self) {
        self.server.assert();
    }

    /// Shut the mock server down and verify it.
    pub async fn close(self) -> Result<(), TestError> {
        Ok(self.server.close().await?)
    }
}
