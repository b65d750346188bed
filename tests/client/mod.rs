//! Integration tests for the client factory.
//!
//! The outgoing requests are checked against a `mockito` server so the client's headers are
//! verified independently of the mock server's own checks.
