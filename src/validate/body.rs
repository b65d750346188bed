use std::fmt;

use crate::error::contract::ContractViolation;

/// Caller-supplied check over the request body text.
///
/// Implemented for any `Fn(&str) -> Result<(), E>` where `E: Display`, so tests can pass a
/// closure:
///
/// ```
/// use routemock::{RequestExpectation, TestCredential};
/// use axum::http::Method;
///
/// let expectation = RequestExpectation::new(Method::POST, TestCredential::token("t"))
///     .with_body_validator(|body: &str| -> Result<(), String> {
///         if body.is_empty() {
///             Err("expected a pipeline definition".to_string())
///         } else {
///             Ok(())
///         }
///     });
/// ```
pub trait BodyValidator: Send + Sync {
    fn validate(&self, body: &str) -> Result<(), String>;
}

impl<F, E> BodyValidator for F
where
    F: Fn(&str) -> Result<(), E> + Send + Sync,
    E: fmt::Display,
{
    fn validate(&self, body: &str) -> Result<(), String> {
        self(body).map_err(|e| e.to_string())
    }
}

/// Accepts every body.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyBody;

impl BodyValidator for AcceptAnyBody {
    fn validate(&self, _body: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Requires an empty body, e.g. for `GET` and `DELETE` requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectEmptyBody;

impl BodyValidator for ExpectEmptyBody {
    fn validate(&self, body: &str) -> Result<(), String> {
        if body.is_empty() {
            Ok(())
        } else {
            Err(format!("expected an empty body but received {:?}", body))
        }
    }
}

/// Requires a JSON body semantically equal to the given value, ignoring formatting and key
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectJsonBody(pub serde_json::Value);

impl BodyValidator for ExpectJsonBody {
    fn validate(&self, body: &str) -> Result<(), String> {
        let actual: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| format!("expected a JSON body but parsing failed: {}", e))?;

        if actual == self.0 {
            Ok(())
        } else {
            Err(format!("expected JSON body {} but received {}", self.0, actual))
        }
    }
}

/// Pass `body` to `validator`, turning a rejection into a [`ContractViolation::BodyRejected`].
pub fn check_body(validator: &dyn BodyValidator, body: &str) -> Result<(), ContractViolation> {
    validator
        .validate(body)
        .map_err(ContractViolation::BodyRejected)
}
