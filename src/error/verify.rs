use thiserror::Error;

/// Outcome of checking a mock server after the client under test has run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Mock server for {route} recorded {} failed request(s):\n{}", .failures.len(), .failures.join("\n"))]
    RequestFailures { route: String, failures: Vec<String> },
    #[error("Expected {expected} request(s) to {route} but received {actual}")]
    HitCountMismatch {
        route: String,
        expected: usize,
        actual: usize,
    },
}
