//! # Request Builder
//!
//! Turns the argument string of an HTTP verb into a resolved request.

use std::collections::BTreeMap;

use reqwest::Method;
use url::Url;

use crate::repl::error::{ReplError, ReplResult};

/// Split `input` at the first space only.
///
/// The remainder is returned verbatim, so a JSON body keeps its spacing.
/// A trailing space with nothing after it yields `None` for the remainder.
pub fn split_first(input: &str) -> (&str, Option<&str>) {
    match input.split_once(' ') {
        Some((head, rest)) if !rest.is_empty() => (head, Some(rest)),
        Some((head, _)) => (head, None),
        None => (input, None),
    }
}

/// Resolve `path` against `base`.
///
/// An absolute path replaces the base path, a relative path is appended
/// to it and a full URL replaces the base entirely. The base is treated
/// as a directory, so `users` against `http://h/v1` gives `http://h/v1/users`.
pub fn resolve_url(base: &str, path: &str) -> ReplResult<Url> {
    let mut base_url = Url::parse(base).map_err(|source| ReplError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;
    if !base_url.path().ends_with('/') {
        let directory = format!("{}/", base_url.path());
        base_url.set_path(&directory);
    }
    base_url.join(path).map_err(|source| ReplError::InvalidUrl {
        url: path.to_string(),
        source,
    })
}

/// A request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<String>,
    /// Ad hoc headers for this request only; these win over the persisted ones
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    /// Build a request from `<path> [body]` against the session's base URL
    pub fn build(method: Method, base_url: Option<&str>, args: &str) -> ReplResult<Self> {
        let base = base_url.ok_or(ReplError::Configuration)?;

        let (path, body) = split_first(args.trim_start());
        let url = resolve_url(base, path)?;
        tracing::debug!("Resolved '{}' against '{}' to {}", path, base, url);

        Ok(Self {
            method,
            url,
            body: body.map(str::to_string),
            headers: BTreeMap::new(),
        })
    }

    /// Add a header for this request only.
    ///
    /// This is the per-request override point: [`HttpService::execute`]
    /// merges these over the persisted defaults, and these win on a clash.
    /// The REPL verbs send no ad hoc headers of their own.
    ///
    /// [`HttpService::execute`]: crate::repl::services::HttpService::execute
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// `METHOD URL [BODY]`, as echoed before the response
    pub fn request_line(&self) -> String {
        match &self.body {
            Some(body) => format!("{} {} {}", self.method, self.url, body),
            None => format!("{} {}", self.method, self.url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://api.example.com/v1";

    #[test]
    fn split_first_should_only_split_once() {
        assert_eq!(
            split_first(r#"/users {"name": "John Doe"}"#),
            ("/users", Some(r#"{"name": "John Doe"}"#))
        );
        assert_eq!(split_first("/users"), ("/users", None));
        assert_eq!(split_first("/users "), ("/users", None));
        assert_eq!(split_first(""), ("", None));
    }

    #[test]
    fn absolute_path_should_replace_base_path() {
        let url = resolve_url(BASE, "/users").unwrap();
        assert_eq!(url.as_str(), "http://api.example.com/users");
    }

    #[test]
    fn relative_path_should_append_to_base_path() {
        let url = resolve_url(BASE, "users").unwrap();
        assert_eq!(url.as_str(), "http://api.example.com/v1/users");
    }

    #[test]
    fn relative_path_should_append_when_base_has_trailing_slash() {
        let url = resolve_url("http://api.example.com/v1/", "users/42").unwrap();
        assert_eq!(url.as_str(), "http://api.example.com/v1/users/42");
    }

    #[test]
    fn full_url_should_replace_base() {
        let url = resolve_url(BASE, "https://other.example.org/ping").unwrap();
        assert_eq!(url.as_str(), "https://other.example.org/ping");
    }

    #[test]
    fn query_string_should_be_kept() {
        let url = resolve_url(BASE, "/users?limit=5").unwrap();
        assert_eq!(url.as_str(), "http://api.example.com/users?limit=5");
    }

    #[test]
    fn invalid_base_should_be_reported() {
        let err = resolve_url("not a url", "/users").unwrap_err();
        assert!(matches!(err, ReplError::InvalidUrl { .. }));
    }

    #[test]
    fn build_should_fail_without_base_url() {
        let err = HttpRequest::build(Method::GET, None, "/users").unwrap_err();
        assert!(matches!(err, ReplError::Configuration));
    }

    #[test]
    fn build_should_carry_body_verbatim() {
        let request = HttpRequest::build(
            Method::POST,
            Some(BASE),
            r#"/users {"name":  "Jane",  "tags": ["a b"]}"#,
        )
        .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), "http://api.example.com/users");
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"name":  "Jane",  "tags": ["a b"]}"#)
        );
    }

    #[test]
    fn build_without_body_should_send_none() {
        let request = HttpRequest::build(Method::DELETE, Some(BASE), "/users/1").unwrap();
        assert_eq!(request.body, None);
        assert_eq!(request.request_line(), "DELETE http://api.example.com/users/1");
    }

    #[test]
    fn empty_args_should_resolve_to_base() {
        let request = HttpRequest::build(Method::GET, Some(BASE), "").unwrap();
        assert_eq!(request.url.as_str(), "http://api.example.com/v1/");
    }

    #[test]
    fn request_line_should_include_body() {
        let request = HttpRequest::build(Method::PUT, Some(BASE), "/a {}").unwrap();
        assert_eq!(request.request_line(), "PUT http://api.example.com/a {}");
    }

    #[test]
    fn with_header_should_add_ad_hoc_header() {
        let request = HttpRequest::build(Method::GET, Some(BASE), "/a")
            .unwrap()
            .with_header("X-Request-Id", "42");
        assert_eq!(request.headers.get("X-Request-Id").map(String::as_str), Some("42"));
    }
}
