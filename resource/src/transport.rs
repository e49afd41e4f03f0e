use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use std::future::Future;

use crate::{RequestOptions, ResponseMeta};

/// A fully read response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn meta(&self) -> ResponseMeta {
        ResponseMeta {
            headers: self.headers.clone(),
            status: self.status,
            status_text: self
                .status
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Whether the `Content-Type` header announces a JSON body.
    pub fn is_json(&self) -> bool {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// Sends one request and reads the whole response.
///
/// Futures returned by `send` may be dropped at any await point; this is
/// how an abandoned cycle is cancelled.
pub trait Transport {
    fn send(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

/// Transport backed by `reqwest`, which uses the browser's fetch API on
/// wasm32.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Base address that relative targets are resolved against. Empty means
    /// targets are used as given.
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, target: &str) -> String {
        if self.address.is_empty()
            || target.starts_with("http://")
            || target.starts_with("https://")
        {
            return target.to_string();
        }
        format!(
            "{}/{}",
            self.address.trim_end_matches('/'),
            target.trim_start_matches('/')
        )
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        target: &str,
        options: &RequestOptions,
    ) -> Result<RawResponse, TransportError> {
        let mut request = self
            .inner_client
            .request(options.method.clone(), self.format_url(target));
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        if let Some(body) = &options.body {
            request = request.body(body.clone());
        }

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
