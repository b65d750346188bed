//! Fixture files and factory functions for test setup.
//!
//! - `factory` - Credentials and configuration with the standard test values
//! - the constants below - Fixture payloads shipped in this crate's `fixtures/` directory

pub mod factory;

use std::path::PathBuf;

/// Versioned JSON listing with no items.
pub static ITEMS_JSON: &str = "items.json";
/// GoCD pipeline config, served as API version 11.
pub static PIPELINE_CONFIG_JSON: &str = "pipeline_config.json";
/// Agent listing, served as API version 7.
pub static AGENTS_JSON: &str = "agents.json";
/// Full server configuration in XML.
pub static CRUISE_CONFIG_XML: &str = "cruise_config.xml";

/// Embedded copy of [`ITEMS_JSON`] for tests that avoid touching the file system.
pub static ITEMS_JSON_BYTES: &[u8] = include_bytes!("../../fixtures/items.json");

/// Directory holding this crate's fixture files.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Absolute path of fixture `name`.
pub fn fixture_path(name: &str) -> PathBuf {
    fixture_dir().join(name)
}

/// Contents of fixture `name`, for comparing against served bodies.
///
/// # Panics
/// Panics if the fixture does not exist
pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}
