use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// A fixture resource that could not be read.
///
/// Missing fixtures are a test authoring bug, so the route handler never serves a partial or
/// substitute payload in their place.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Fixture {path:?} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
