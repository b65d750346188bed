//! Route-bound mock HTTP fixture server for API client tests.
//!
//! A test binds one route on an ephemeral local server, describes the request it expects the
//! client under test to send (method, versioned `Accept` header, credentials, body) and the
//! fixture to answer with. Every incoming request is checked against that contract before any
//! fixture bytes are written; failed checks are recorded and surface through
//! [`MockServer::verify`], [`MockServer::assert`], [`MockServer::close`], or when the server is
//! dropped.
//!
//! ```no_run
//! use axum::http::Method;
//! use routemock::{
//!     new_client, serve_file_as_json, AcceptAnyBody, Config, MockServer, TestCredential,
//! };
//!
//! # async fn example() -> Result<(), routemock::Error> {
//! let config = Config::new("go.cd")?.with_fixture_dir("fixtures");
//! let credential = TestCredential::token("api_token");
//!
//! let handler = serve_file_as_json(
//!     credential.clone(),
//!     Method::GET,
//!     "items.json",
//!     2,
//!     AcceptAnyBody,
//! );
//! let server = MockServer::start("/api/items", handler, &config).await?;
//! let client = new_client(&server, credential, &config)?;
//!
//! let response = client.get("/api/items", Some(2)).await?;
//! assert_eq!(response.status, 200);
//!
//! server.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fixture;
pub mod model;
pub mod response;
pub mod server;
pub mod validate;

pub use axum::http;

pub use client::{new_client, ApiClient, ApiResponse};
pub use config::Config;
pub use error::{
    config::ConfigError, contract::ContractViolation, fixture::FixtureError,
    verify::VerificationError, Error,
};
pub use model::{
    credential::TestCredential,
    expectation::RequestExpectation,
    fixture::{FixtureSource, FixtureSpec, WireFormat},
};
pub use server::{
    builder::MockServerBuilder,
    handler::{serve_file_as_json, serve_file_as_xml, RouteHandler},
    MockServer,
};
pub use validate::body::{AcceptAnyBody, BodyValidator, ExpectEmptyBody, ExpectJsonBody};
