//! Client factory handing the code under test a client pointed at a mock server.

use axum::{
    body::Bytes,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
};

use crate::{
    config::Config,
    error::Error,
    model::{credential::TestCredential, media::versioned_json},
    server::MockServer,
};

/// Thin HTTP client configured with a base URL and a fixed credential.
///
/// No retries and no pooling beyond what `reqwest` does by default.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: TestCredential,
    product: String,
}

/// A fully read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl ApiResponse {
    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Body deserialized from JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Build a client for `server` presenting `credential`.
pub fn new_client(
    server: &MockServer,
    credential: TestCredential,
    config: &Config,
) -> Result<ApiClient, Error> {
    ApiClient::new(server.url(), credential, config)
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        credential: TestCredential,
        config: &Config,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
            product: config.product.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credential(&self) -> &TestCredential {
        &self.credential
    }

    /// Request builder for `path` with the credential and, for `Some(version)` greater than
    /// zero, the versioned `Accept` header applied.
    pub fn request(&self, method: Method, path: &str, version: Option<u32>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);

        builder = match &self.credential {
            TestCredential::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            TestCredential::Token(token) => {
                builder.header(AUTHORIZATION, TestCredential::bearer_header(token))
            }
        };

        if let Some(version) = version.filter(|v| *v > 0) {
            builder = builder.header(ACCEPT, versioned_json(&self.product, version));
        }

        builder
    }

    /// Send a request and read the whole response.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        version: Option<u32>,
        body: Option<String>,
    ) -> Result<ApiResponse, Error> {
        let mut builder = self.request(method, path, version);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        let body = response.bytes().await?;

        Ok(ApiResponse {
            status,
            content_type,
            body,
        })
    }

    pub async fn get(&self, path: &str, version: Option<u32>) -> Result<ApiResponse, Error> {
        self.send(Method::GET, path, version, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        version: Option<u32>,
        body: impl Into<String>,
    ) -> Result<ApiResponse, Error> {
        self.send(Method::POST, path, version, Some(body.into())).await
    }

    pub async fn put(
        &self,
        path: &str,
        version: Option<u32>,
        body: impl Into<String>,
    ) -> Result<ApiResponse, Error> {
        self.send(Method::PUT, path, version, Some(body.into())).await
    }

    pub async fn delete(&self, path: &str, version: Option<u32>) -> Result<ApiResponse, Error> {
        self.send(Method::DELETE, path, version, None).await
    }
}
