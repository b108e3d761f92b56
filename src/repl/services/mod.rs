//! # Services Layer
//!
//! Services encapsulate resources the command handlers use but do not own
//! the lifecycle of. Right now that is the HTTP client and its cookie jar.

pub mod http;

pub use http::{HttpService, USER_AGENT};
