use axum::http::Method;

use crate::error::contract::ContractViolation;

/// The request method must equal `expected` exactly.
pub fn check_method(expected: &Method, actual: &Method) -> Result<(), ContractViolation> {
    if expected == actual {
        return Ok(());
    }

    Err(ContractViolation::MethodMismatch {
        expected: expected.clone(),
        actual: actual.clone(),
    })
}
