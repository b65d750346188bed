//! Test-scoped values describing what a mock route expects and what it serves.

pub mod api;
pub mod credential;
pub mod expectation;
pub mod fixture;
pub mod media;
