//! # HTTP Service
//!
//! Sends one request at a time with the blocking client and captures the
//! response as an [`HttpExchange`], whatever its status.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::repl::error::{ReplError, ReplResult};
use crate::repl::models::{CookieJar, HttpExchange, HttpRequest};

/// User agent sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Service for executing HTTP exchanges
///
/// Owns the HTTP client and the session cookie jar the client reads from
/// and writes to.
pub struct HttpService {
    client: Client,
    cookies: Arc<CookieJar>,
}

impl HttpService {
    /// Create a service with an empty cookie jar
    pub fn new() -> ReplResult<Self> {
        Self::with_cookie_jar(Arc::new(CookieJar::new()))
    }

    /// Create a service around an existing jar
    pub fn with_cookie_jar(cookies: Arc<CookieJar>) -> ReplResult<Self> {
        tracing::debug!("Creating HTTP client");
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::clone(&cookies))
            .build()
            .map_err(ReplError::Transport)?;
        Ok(Self { client, cookies })
    }

    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    /// Execute `request` with the persisted `default_headers` merged under
    /// the request's own headers.
    ///
    /// Non-2xx responses come back as `Ok`; only transport failures are errors.
    pub fn execute<'a>(
        &self,
        request: &HttpRequest,
        default_headers: impl IntoIterator<Item = (&'a str, &'a str)>,
        timeout: Option<Duration>,
    ) -> ReplResult<HttpExchange> {
        let mut headers = build_headers(default_headers);
        headers.extend(build_headers(
            request.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ));

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let started = std::time::Instant::now();
        let response = builder.send().map_err(ReplError::Transport)?;
        let version = response.version();
        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.bytes().map_err(ReplError::Transport)?.to_vec();

        tracing::debug!(
            "{} {} -> {} ({} bytes, {} ms)",
            request.method,
            request.url,
            status.as_u16(),
            body.len(),
            started.elapsed().as_millis()
        );

        Ok(HttpExchange {
            request: request.clone(),
            version,
            status,
            headers: response_headers,
            body,
        })
    }
}

/// Convert name/value pairs to a header map, skipping entries that are not
/// valid HTTP header syntax
fn build_headers<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                map.insert(name, value);
            }
            _ => tracing::warn!("Skipping invalid header '{}: {}'", name, value),
        }
    }
    map
}
