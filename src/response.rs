//! Fixture response writer.

use axum::{
    body::{Body, Bytes},
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;

use crate::model::{
    fixture::{FixtureSpec, WireFormat},
    media::{versioned_json_content_type, XML_CONTENT_TYPE},
};

/// `Content-Type` a fixture of `format` is served with.
///
/// Unversioned JSON carries no content type, matching how the fixtures were recorded.
pub fn content_type(format: &WireFormat, product: &str) -> Option<String> {
    match format {
        WireFormat::Json { .. } => format
            .version()
            .map(|version| versioned_json_content_type(product, version)),
        WireFormat::Xml => Some(XML_CONTENT_TYPE.to_string()),
    }
}

/// Build the response serving `contents` verbatim as described by `fixture`.
pub fn write(contents: Bytes, fixture: &FixtureSpec, product: &str) -> Response {
    let mut response = (fixture.status, Body::from(contents)).into_response();

    if let Some(content_type) = content_type(&fixture.format, product) {
        match HeaderValue::from_str(&content_type) {
            Ok(value) => {
                response.headers_mut().insert(CONTENT_TYPE, value);
            }
            Err(e) => {
                tracing::error!(
                    content_type = %content_type,
                    "Serving fixture without Content-Type, value is not a valid header: {}",
                    e
                );
            }
        }
    }

    response
}
