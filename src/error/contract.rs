use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A mismatch between the request the client under test sent and the request the route
/// expected.
///
/// Every variant names the expected and the actual value so the failing test explains itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("Expected HTTP method is {expected} while client sent {actual}")]
    MethodMismatch { expected: Method, actual: Method },
    #[error("Expected header Accept: {expected} in the request but received {actual:?}")]
    AcceptMismatch {
        expected: String,
        actual: Option<String>,
    },
    #[error(
        "Invalid username / password combination, expected user {expected_username:?} but client sent user {actual_username:?}"
    )]
    BasicAuthMismatch {
        expected_username: String,
        actual_username: String,
    },
    #[error("Expected basic auth credentials for user {expected_username:?} but Authorization was {actual:?}")]
    MissingBasicAuth {
        expected_username: String,
        actual: Option<String>,
    },
    #[error("Invalid api token, expected {expected:?} but was {actual:?}")]
    TokenMismatch {
        expected: String,
        actual: Option<String>,
    },
    #[error("Client sent basic auth credentials for user {actual_username:?} while a bearer token was expected")]
    UnexpectedBasicAuth { actual_username: String },
    #[error("Request body was rejected: {0}")]
    BodyRejected(String),
    #[error("Request body could not be read: {0}")]
    UnreadableBody(String),
    #[error("No handler is bound for {method} {path}, the mock server only answers {route}")]
    UnboundRoute {
        method: Method,
        path: String,
        route: String,
    },
}

impl IntoResponse for ContractViolation {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let status = match self {
            Self::UnboundRoute { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
