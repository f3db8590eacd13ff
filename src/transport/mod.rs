//! Request execution.
//!
//! The resolver never talks to the network directly. It hands a
//! [`HttpRequest`] to a [`Transport`] and gets back the status and the whole
//! body. [`ReqwestTransport`] is the production implementation; tests plug in
//! their own.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error_handling::{categorize_reqwest_error, InitializationError, TransportError};
use crate::initialization::init_client;

/// One outbound GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Fully formatted request URL
    pub url: String,
    /// Headers in the order they are sent
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// GET request for `url` with no headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Appends a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Status and fully read body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Complete response body
    pub body: Vec<u8>,
}

/// Anything that can execute a GET and return the complete response.
///
/// Implementations must read the whole body before returning so that the
/// connection is released on every path.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and reads the whole response.
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        (**self).execute(request).await
    }
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an already configured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds the client from `config` (user agent, optional timeout).
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(init_client(config)?))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            log::debug!("GET {} failed: {} ({})", request.url, e, categorize_reqwest_error(&e));
            e
        })?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        log::debug!("GET {} -> {} ({} bytes)", request.url, status, body.len());
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
