//! HTTP transport used for both the release lookup and the CDN downloads

use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::StatusCode;

use crate::error::{FetchError, Result};

const USER_AGENT: &str = concat!("fxnc-fetch/", env!("CARGO_PKG_VERSION"));

/// A fully buffered response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Fail with `FetchError::Http` unless the status is 2xx
    pub fn error_for_status(self, url: &str) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Http {
                url: url.to_string(),
                status: self.status,
            })
        }
    }
}

/// Issues a single GET and hands back the whole body
///
/// Status codes are not interpreted here; callers decide what counts as
/// success via [`HttpResponse::error_for_status`].
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse>>;
}

impl<T: Transport> Transport for &T {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse>> {
        (**self).get(url)
    }
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a client; `timeout` of `None` leaves requests unbounded
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FetchError::Network {
            url: String::new(),
            source: Box::new(e),
        })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let network = |e: reqwest::Error| FetchError::Network {
            url: url.to_string(),
            source: Box::new(e),
        };

        debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(network)?;
        debug!("GET {url} -> {status} ({} bytes)", body.len());

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
