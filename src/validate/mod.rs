//! Request contract checks.
//!
//! Each check compares one property of the incoming request against the route's
//! [`RequestExpectation`] and returns the first mismatch as a [`ContractViolation`]. The route
//! handler runs [`check_head`] as soon as the request head arrives, reads the body only if it
//! passes, then runs [`check_body`]. No fixture bytes are written before both succeed.

pub mod accept;
pub mod auth;
pub mod body;
pub mod method;

use axum::http::{header::HeaderName, HeaderMap, Method};

use crate::{error::contract::ContractViolation, model::expectation::RequestExpectation};

pub use accept::check_accept;
pub use auth::check_auth;
pub use body::check_body;
pub use method::check_method;

/// Run the checks of `expectation` that only need the request head, in order: method, `Accept`
/// header, authentication.
///
/// The `Accept` check only runs when the expectation carries a version greater than zero.
pub fn check_head(
    expectation: &RequestExpectation,
    product: &str,
    method: &Method,
    headers: &HeaderMap,
) -> Result<(), ContractViolation> {
    check_method(&expectation.method, method)?;

    if let Some(version) = expectation.accept_version() {
        check_accept(product, version, headers)?;
    }

    check_auth(&expectation.credential, headers)
}

/// First value of header `name` as text, if present.
pub(crate) fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
