//! Error types for the mock fixture server.
//!
//! Each concern owns its error enum (configuration, request contract, fixture loading,
//! post-test verification) and [`Error`] aggregates them so callers can propagate any of them
//! with `?`. The errors raised while answering a request implement `IntoResponse` so the
//! composed route handler can turn a failed check directly into the HTTP answer the client
//! under test receives.

pub mod config;
pub mod contract;
pub mod fixture;
pub mod verify;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    error::{
        config::ConfigError, contract::ContractViolation, fixture::FixtureError,
        verify::VerificationError,
    },
    model::api::ErrorDto,
};

/// Main error type for the mock fixture server.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying error types convert automatically
/// through the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid product token or environment variable).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A request did not match the expectation bound to the route.
    #[error(transparent)]
    ContractViolation(#[from] ContractViolation),
    /// A fixture could not be read.
    #[error(transparent)]
    FixtureError(#[from] FixtureError),
    /// Failures recorded by a mock server during the test.
    #[error(transparent)]
    VerificationError(#[from] VerificationError),
    /// The route is not a path pattern the mock server can bind.
    #[error("Invalid mock route {route:?}: {reason}")]
    InvalidRoute { route: String, reason: String },
    /// The ephemeral listener could not be bound.
    #[error("Failed to bind mock server listener: {0}")]
    BindError(#[source] std::io::Error),
    /// The mock server task ended abnormally.
    #[error("Mock server task failed: {0}")]
    ServerTaskError(String),
    /// HTTP client error raised by the client factory or while sending a request.
    #[error(transparent)]
    ClientError(#[from] reqwest::Error),
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and answers the client with an [`ErrorDto`] carrying the same
/// message, since the client here is a test and benefits from the detail.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
