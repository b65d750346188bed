//! Media types exchanged with versioned API clients.

/// Content type served with XML fixtures.
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// `Accept` value a client sends to request version `version` of the `product` API.
///
/// ```
/// use routemock::model::media::versioned_json;
///
/// assert_eq!(versioned_json("go.cd", 2), "application/vnd.go.cd.v2+json");
/// ```
pub fn versioned_json(product: &str, version: u32) -> String {
    format!("application/vnd.{}.v{}+json", product, version)
}

/// `Content-Type` value served with a versioned JSON fixture.
pub fn versioned_json_content_type(product: &str, version: u32) -> String {
    format!("{}; charset=utf-8", versioned_json(product, version))
}
