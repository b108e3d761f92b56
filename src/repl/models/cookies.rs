//! # Cookie Jar
//!
//! Session cookie state. The jar is installed as the HTTP client's cookie
//! provider, so `Set-Cookie` headers are merged on every response and
//! matching cookies are attached to every request without user action.
//! Nothing here is persisted; the jar lives for one REPL session.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use reqwest::header::HeaderValue;
use url::Url;

/// Identity of a cookie; a later cookie with the same key replaces it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CookieKey {
    pub domain: String,
    pub path: String,
    pub name: String,
}

/// One stored cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub value: String,
    /// `None` for session cookies
    pub expires: Option<DateTime<Utc>>,
    /// Only sent to the exact host that set it
    pub host_only: bool,
    pub secure: bool,
}

impl StoredCookie {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires.is_some_and(|at| at <= now)
    }
}

/// A `Set-Cookie` header after parsing, before it is keyed
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedCookie {
    name: String,
    value: String,
    domain: Option<String>,
    path: Option<String>,
    expires: Option<DateTime<Utc>>,
    secure: bool,
}

/// Session cookie jar keyed by (domain, path, name)
#[derive(Debug, Default)]
pub struct CookieJar {
    // The client's cookie provider interface requires Send + Sync
    cookies: Mutex<HashMap<CookieKey, StoredCookie>>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one `Set-Cookie` header received from `url`
    pub fn store_from_header(&self, header: &str, url: &Url) {
        self.store_at(header, url, Utc::now());
    }

    /// The `Cookie` header value to send to `url`, if any cookie matches
    pub fn header_for(&self, url: &Url) -> Option<String> {
        self.header_at(url, Utc::now())
    }

    /// Number of live cookies
    pub fn len(&self) -> usize {
        let now = Utc::now();
        self.lock()
            .values()
            .filter(|cookie| !cookie.is_expired(now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CookieKey, StoredCookie>> {
        // A poisoned jar still holds usable cookies
        self.cookies
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn store_at(&self, header: &str, url: &Url, now: DateTime<Utc>) {
        let Some(host) = url.host_str().map(str::to_ascii_lowercase) else {
            return;
        };
        let Some(parsed) = parse_set_cookie(header, now) else {
            tracing::debug!("Ignoring malformed Set-Cookie: {}", header);
            return;
        };

        let (domain, host_only) = match parsed.domain {
            Some(domain) => {
                if !domain_matches(&host, &domain) {
                    tracing::debug!(
                        "Ignoring cookie '{}' for foreign domain '{}'",
                        parsed.name,
                        domain
                    );
                    return;
                }
                (domain, false)
            }
            None => (host, true),
        };
        let path = parsed
            .path
            .unwrap_or_else(|| default_path(url.path()));

        let key = CookieKey {
            domain,
            path,
            name: parsed.name,
        };
        let cookie = StoredCookie {
            value: parsed.value,
            expires: parsed.expires,
            host_only,
            secure: parsed.secure,
        };

        let mut cookies = self.lock();
        if cookie.is_expired(now) {
            tracing::debug!("Dropping expired cookie '{}'", key.name);
            cookies.remove(&key);
        } else {
            tracing::debug!("Storing cookie '{}' for {}{}", key.name, key.domain, key.path);
            cookies.insert(key, cookie);
        }
    }

    fn header_at(&self, url: &Url, now: DateTime<Utc>) -> Option<String> {
        let host = url.host_str()?.to_ascii_lowercase();
        let request_path = url.path();
        let is_secure = url.scheme() == "https";

        let mut cookies = self.lock();
        cookies.retain(|_, cookie| !cookie.is_expired(now));

        let mut matching: Vec<(&CookieKey, &StoredCookie)> = cookies
            .iter()
            .filter(|(key, cookie)| {
                let domain_ok = if cookie.host_only {
                    key.domain == host
                } else {
                    domain_matches(&host, &key.domain)
                };
                domain_ok && path_matches(request_path, &key.path) && (is_secure || !cookie.secure)
            })
            .collect();

        if matching.is_empty() {
            return None;
        }

        // Longer paths first, then by name so the header is deterministic
        matching.sort_by(|(a, _), (b, _)| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.name.cmp(&b.name))
        });

        Some(
            matching
                .iter()
                .map(|(key, cookie)| format!("{}={}", key.name, cookie.value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

impl reqwest::cookie::CookieStore for CookieJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        for header in cookie_headers {
            match header.to_str() {
                Ok(text) => self.store_from_header(text, url),
                Err(_) => tracing::debug!("Ignoring non-ASCII Set-Cookie header"),
            }
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.header_for(url)
            .and_then(|value| HeaderValue::from_str(&value).ok())
    }
}

/// Parse one `Set-Cookie` header.
///
/// `Expires` accepts the RFC 1123, RFC 850, asctime and dashed Netscape date
/// forms; an unparseable date leaves the cookie without an expiry.
fn parse_set_cookie(header: &str, now: DateTime<Utc>) -> Option<ParsedCookie> {
    let parsed = cookie::Cookie::parse(header).ok()?;
    if parsed.name().trim().is_empty() {
        return None;
    }

    let domain = parsed
        .domain()
        .map(|domain| domain.trim_start_matches('.').to_ascii_lowercase())
        .filter(|domain| !domain.is_empty());
    let path = parsed
        .path()
        .filter(|path| path.starts_with('/'))
        .map(str::to_string);

    let expires_at = parsed.expires_datetime().map(|at| {
        DateTime::from_timestamp(at.unix_timestamp(), 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    });
    // Max-Age wins over Expires
    let expires = match parsed.max_age() {
        Some(ttl) if ttl.whole_seconds() <= 0 => Some(DateTime::<Utc>::MIN_UTC),
        Some(ttl) => Some(
            Duration::try_seconds(ttl.whole_seconds())
                .and_then(|ttl| now.checked_add_signed(ttl))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        ),
        None => expires_at,
    };

    Some(ParsedCookie {
        name: parsed.name().trim().to_string(),
        value: parsed.value().trim().trim_matches('"').to_string(),
        domain,
        path,
        expires,
        secure: parsed.secure().unwrap_or(false),
    })
}

/// `host` is `domain` or a subdomain of it
fn domain_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// RFC 6265 path-match
fn path_matches(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }
    request_path.starts_with(cookie_path)
        && (cookie_path.ends_with('/') || request_path[cookie_path.len()..].starts_with('/'))
}

/// RFC 6265 default-path: the request path up to its last `/`
fn default_path(request_path: &str) -> String {
    match request_path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => request_path[..idx].to_string(),
    }
}
