use serde::{Deserialize, Serialize};

/// The response body when the mock server refuses to serve a fixture
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
