use axum::http::{header::ACCEPT, HeaderMap};

use crate::{
    error::contract::ContractViolation, model::media::versioned_json, validate::header_value,
};

/// The `Accept` header must equal `application/vnd.<product>.v<version>+json` exactly.
pub fn check_accept(
    product: &str,
    version: u32,
    headers: &HeaderMap,
) -> Result<(), ContractViolation> {
    let expected = versioned_json(product, version);
    let actual = header_value(headers, ACCEPT);

    if actual.as_deref() == Some(expected.as_str()) {
        return Ok(());
    }

    Err(ContractViolation::AcceptMismatch { expected, actual })
}
