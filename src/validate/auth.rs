use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::{
    error::contract::ContractViolation, model::credential::TestCredential, validate::header_value,
};

/// Check the request's credentials against `expected`.
///
/// Basic auth is looked at first: when the request carries it, both username and password
/// must match. Without basic auth the `Authorization` header must equal `bearer <token>`
/// exactly.
pub fn check_auth(expected: &TestCredential, headers: &HeaderMap) -> Result<(), ContractViolation> {
    match (basic_auth(headers), expected) {
        (
            Some((username, password)),
            TestCredential::Basic {
                username: expected_username,
                password: expected_password,
            },
        ) => {
            if username == *expected_username && password == *expected_password {
                Ok(())
            } else {
                Err(ContractViolation::BasicAuthMismatch {
                    expected_username: expected_username.clone(),
                    actual_username: username,
                })
            }
        }
        (Some((username, _)), TestCredential::Token(_)) => {
            Err(ContractViolation::UnexpectedBasicAuth {
                actual_username: username,
            })
        }
        (None, TestCredential::Basic { username, .. }) => Err(ContractViolation::MissingBasicAuth {
            expected_username: username.clone(),
            actual: header_value(headers, AUTHORIZATION),
        }),
        (None, TestCredential::Token(token)) => {
            let expected = TestCredential::bearer_header(token);
            let actual = header_value(headers, AUTHORIZATION);

            if actual.as_deref() == Some(expected.as_str()) {
                Ok(())
            } else {
                Err(ContractViolation::TokenMismatch { expected, actual })
            }
        }
    }
}

/// Username and password of an `Authorization: Basic <base64>` header.
///
/// The scheme is matched case-insensitively and the decoded pair is split at the first `:`.
/// Returns `None` when the header is absent, uses another scheme, or is malformed.
pub fn basic_auth(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}
