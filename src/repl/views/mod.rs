//! # Views Module
//!
//! Everything that turns session data into terminal text.

pub mod ansi_escape_codes;
pub mod highlight;
pub mod pretty;

// Re-export main types for convenience
pub use highlight::{detect, highlight, Syntax};
pub use pretty::{format_body, terminal_width, ExchangeRenderer, DEFAULT_TERMINAL_WIDTH};
