//! # HTTP Exchange
//!
//! One request/response round trip, kept only long enough to print it.

use std::io::Read;

use flate2::read::GzDecoder;
use reqwest::header::{HeaderMap, CONTENT_ENCODING};
use reqwest::{StatusCode, Version};

use crate::repl::error::{ReplError, ReplResult};
use crate::repl::models::request::HttpRequest;

/// A completed request/response cycle. Error statuses are ordinary exchanges.
#[derive(Debug, Clone)]
pub struct HttpExchange {
    pub request: HttpRequest,
    pub version: Version,
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Body exactly as received, still compressed if it was sent that way
    pub body: Vec<u8>,
}

impl HttpExchange {
    /// `HTTP/1.1 200 OK`
    pub fn status_line(&self) -> String {
        format!("{:?} {}", self.version, self.status)
    }

    /// Response headers one per line, as received
    pub fn header_block(&self) -> String {
        self.headers
            .iter()
            .map(|(name, value)| {
                format!("{}: {}", name, String::from_utf8_lossy(value.as_bytes()))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The body with any gzip content encoding removed
    pub fn decoded_body(&self) -> ReplResult<Vec<u8>> {
        decode_body(&self.headers, &self.body)
    }
}

/// Inflate `body` when `content-encoding` is gzip, otherwise pass it through
pub fn decode_body(headers: &HeaderMap, body: &[u8]) -> ReplResult<Vec<u8>> {
    let is_gzip = headers
        .get(CONTENT_ENCODING)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|encoding| encoding.trim().eq_ignore_ascii_case("gzip"));

    if !is_gzip {
        return Ok(body.to_vec());
    }

    let mut decoder = GzDecoder::new(body);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(ReplError::Decode)?;
    tracing::debug!("Inflated gzip body {} -> {} bytes", body.len(), inflated.len());
    Ok(inflated)
}
