//! Test configuration constants for mock server and client setup.
//!
//! These values are not real credentials but placeholder values shared by the mock server's
//! expectations and the clients built against it. They are passed explicitly into each test
//! setup rather than read from global state.

/// Product name used in versioned media types during tests.
///
/// Produces media types such as `application/vnd.go.cd.v2+json`.
pub static TEST_PRODUCT: &str = "go.cd";

/// Basic auth username for test clients.
pub static TEST_USERNAME: &str = "admin";

/// Basic auth password for test clients.
pub static TEST_PASSWORD: &str = "badger";

/// Bearer token for test clients, sent as `Authorization: bearer api_token`.
pub static TEST_API_TOKEN: &str = "api_token";
