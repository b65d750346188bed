//! Factory functions for the standard test credentials and configuration.

use routemock::{Config, ConfigError, TestCredential};

use crate::{
    constant::{TEST_API_TOKEN, TEST_PASSWORD, TEST_PRODUCT, TEST_USERNAME},
    fixtures::fixture_dir,
};

/// Credential sent as `Authorization: bearer api_token`.
pub fn token_credential() -> TestCredential {
    TestCredential::token(TEST_API_TOKEN)
}

/// Basic auth credential for `admin` / `badger`.
pub fn basic_credential() -> TestCredential {
    TestCredential::basic(TEST_USERNAME, TEST_PASSWORD)
}

/// Configuration for [`TEST_PRODUCT`] resolving fixtures from this crate's `fixtures/`.
pub fn test_config() -> Result<Config, ConfigError> {
    Ok(Config::new(TEST_PRODUCT)?.with_fixture_dir(fixture_dir()))
}
