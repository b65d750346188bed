use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error(
        "Invalid product name {0:?}: expected a non-empty token of ASCII letters, digits, '.', '-' or '_'"
    )]
    InvalidProduct(String),
}
