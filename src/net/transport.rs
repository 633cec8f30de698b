//! HTTP transport seam.
//!
//! `ApiClient` builds fully-resolved [`HttpRequest`] values and hands them to
//! a [`Transport`]. The browser build sends them with `gloo-net` and races
//! each request against a `gloo-timers` timeout. Non-browser builds get
//! [`UnavailableTransport`]; tests inject a scripted mock.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>, timeout: Duration) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None, timeout }
    }

    /// First header value matching `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),
    #[error("timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever status the server answered with.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport for builds without a browser; every request fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTransport;

#[async_trait::async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Network(format!(
            "{} {} not available outside the browser",
            request.method.as_str(),
            request.url
        )))
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `fetch`-backed transport.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTransport;

#[cfg(feature = "csr")]
impl GlooTransport {
    async fn send_inner(request: HttpRequest) -> Result<HttpResponse, gloo_net::Error> {
        use gloo_net::http::{Method as GlooMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
            Method::Put => GlooMethod::PUT,
            Method::Delete => GlooMethod::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body)?,
            None => builder.build()?,
        };
        let resp = prepared.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use futures::future::{Either, select};

        let timeout = request.timeout;
        let send = Box::pin(Self::send_inner(request));
        let deadline = Box::pin(gloo_timers::future::sleep(timeout));
        match select(send, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| TransportError::Network(e.to_string())),
            Either::Right(((), _)) => Err(TransportError::Timeout(timeout)),
        }
    }
}
