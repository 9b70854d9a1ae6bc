//! # Transport
//!
//! One HTTP round trip per call: send the request, check the status,
//! decode the JSON body into whatever shape the caller asks for.
//!
//! No retries and no caching here. Retrying is the user's call
//! (refresh key in the TUI).

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

/// Upper bound on how long a single request may hang.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while executing a request.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The request could not be constructed.
    InvalidUrl(String),
    /// Status outside 200..300.
    InvalidResponse { status: u16 },
    /// The body did not match the expected shape.
    DecodingFailed(String),
    /// Connection, timeout or DNS-level failure.
    Transport(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::InvalidUrl(_) => write!(f, "The request URL is invalid."),
            NetworkError::InvalidResponse { .. } => write!(f, "The server response was invalid."),
            NetworkError::DecodingFailed(cause) => write!(f, "Unable to decode data: {cause}"),
            NetworkError::Transport(cause) => write!(f, "Network request failed: {cause}"),
        }
    }
}

impl std::error::Error for NetworkError {}

/// A fully-formed request descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: Url,
    pub method: Method,
    pub timeout: Duration,
}

impl Request {
    /// A GET request. The timeout is clamped to [`MAX_TIMEOUT`].
    pub fn get(url: Url, timeout: Duration) -> Self {
        Self {
            url,
            method: Method::GET,
            timeout: timeout.min(MAX_TIMEOUT),
        }
    }
}

/// Executes requests over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpExecutor {
    client: reqwest::Client,
}

impl HttpExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Sends `request` and decodes a 2xx body into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: &Request) -> Result<T, NetworkError> {
        info!("{} {}", request.method, request.url);

        let response = self
            .client
            .request(request.method.clone(), request.url.clone())
            .timeout(request.timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Unexpected status {} from {}", status, request.url);
            return Err(NetworkError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        debug!("Response body: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode response body: {}", e);
            NetworkError::DecodingFailed(e.to_string())
        })
    }
}

/// Builder errors mean the request itself was bad; everything else is
/// the wire's fault.
fn map_reqwest_error(e: reqwest::Error) -> NetworkError {
    if e.is_builder() {
        NetworkError::InvalidUrl(e.to_string())
    } else {
        NetworkError::Transport(e.to_string())
    }
}
