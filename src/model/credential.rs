//! Credentials a test expects the client under test to present.

/// Fixed credential shared by the client factory and the route's authentication check.
///
/// Passed explicitly into every test setup instead of living in process-wide state so tests
/// stay independent when run in parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestCredential {
    /// Standard HTTP basic auth.
    Basic { username: String, password: String },
    /// `Authorization: bearer <token>` header.
    Token(String),
}

impl TestCredential {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// The exact `Authorization` header value expected in token mode.
    pub fn bearer_header(token: &str) -> String {
        format!("bearer {}", token)
    }
}
