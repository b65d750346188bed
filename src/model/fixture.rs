//! Description of the canned payload a route answers with.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use axum::http::StatusCode;

/// Where fixture bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureSource {
    /// A file on disk. Relative paths resolve against [`Config::fixture_dir`](crate::Config).
    File(PathBuf),
    /// Bytes compiled into the test binary, usually with `include_bytes!`.
    Embedded {
        name: &'static str,
        bytes: &'static [u8],
    },
    /// A payload built in the test itself.
    Inline(String),
}

impl FixtureSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn embedded(name: &'static str, bytes: &'static [u8]) -> Self {
        Self::Embedded { name, bytes }
    }

    pub fn inline(contents: impl Into<String>) -> Self {
        Self::Inline(contents.into())
    }
}

impl fmt::Display for FixtureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded { name, .. } => write!(f, "embedded:{}", name),
            Self::Inline(_) => write!(f, "inline"),
        }
    }
}

impl From<&str> for FixtureSource {
    fn from(path: &str) -> Self {
        Self::file(path)
    }
}

impl From<PathBuf> for FixtureSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// Wire format a fixture is declared as. The format is never sniffed from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// JSON, optionally tagged with an API version for the versioned media type.
    Json { version: Option<u32> },
    Xml,
}

impl WireFormat {
    /// API version, treating `0` the same as no version.
    pub fn version(&self) -> Option<u32> {
        match self {
            Self::Json { version } => version.filter(|v| *v > 0),
            Self::Xml => None,
        }
    }
}

/// The fixture a route serves once a request passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSpec {
    pub source: FixtureSource,
    pub format: WireFormat,
    pub status: StatusCode,
}

impl FixtureSpec {
    pub fn json(source: impl Into<FixtureSource>, version: Option<u32>) -> Self {
        Self {
            source: source.into(),
            format: WireFormat::Json { version },
            status: StatusCode::OK,
        }
    }

    pub fn xml(source: impl Into<FixtureSource>) -> Self {
        Self {
            source: source.into(),
            format: WireFormat::Xml,
            status: StatusCode::OK,
        }
    }

    /// Serve the fixture with `status` instead of `200 OK`.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}
