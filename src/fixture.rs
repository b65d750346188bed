//! Fixture loading.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use dioxus_logger::tracing;

use crate::{config::Config, error::fixture::FixtureError, model::fixture::FixtureSource};

/// Read the entire fixture named by `source`.
///
/// Relative file paths resolve against [`Config::fixture_dir`]. Embedded and inline sources
/// cannot fail.
///
/// # Returns
/// - `Ok(Bytes)` - The complete fixture contents
/// - `Err(FixtureError::Unavailable)` - The file is missing or could not be fully read
pub fn load(source: &FixtureSource, config: &Config) -> Result<Bytes, FixtureError> {
    match source {
        FixtureSource::File(path) => {
            let path = resolve(path, config);
            let contents = std::fs::read(&path)
                .map_err(|source| FixtureError::Unavailable { path: path.clone(), source })?;

            tracing::debug!(path = %path.display(), bytes = contents.len(), "Loaded fixture");

            Ok(Bytes::from(contents))
        }
        FixtureSource::Embedded { bytes, .. } => Ok(Bytes::from_static(bytes)),
        FixtureSource::Inline(contents) => Ok(Bytes::from(contents.clone())),
    }
}

fn resolve(path: &Path, config: &Config) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        config.fixture_dir.join(path)
    }
}
