//! Integration tests for the route-bound mock server.
//!
//! Each test binds a fresh server through `TestBuilder`, drives the client at it, and checks
//! both what the client received and what the server recorded.

mod contract;
mod lifecycle;
mod transport;
mod xml;
