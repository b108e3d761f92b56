//! # Models
//!
//! Session data: persisted headers, session cookies, settings and the
//! per-command request/exchange values.

pub mod cookies;
pub mod exchange;
pub mod headers;
pub mod request;
pub mod session;

pub use cookies::CookieJar;
pub use exchange::{decode_body, HttpExchange};
pub use headers::{HeaderMap, HeaderStore, DEFAULT_HEADERS};
pub use request::{resolve_url, split_first, HttpRequest};
pub use session::SessionState;
