//! ANSI escape code constants for response highlighting
//!
//! Raw SGR sequences plus the semantic aliases the highlighter and the
//! exchange renderer use.

// ============================================================================
// TEXT ATTRIBUTES
// ============================================================================

pub const RESET: &str = "\x1b[0m"; // Reset all attributes
pub const BOLD: &str = "\x1b[1m"; // Bold text
pub const DIM: &str = "\x1b[2m"; // Dimmed/faint text

// ============================================================================
// STANDARD FOREGROUND COLORS (30-37)
// ============================================================================

pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_MAGENTA: &str = "\x1b[35m";
pub const FG_CYAN: &str = "\x1b[36m";

// ============================================================================
// 256 COLOR MODE - FOREGROUND COLORS (38;5;n)
// ============================================================================

pub const FG_256_DEEP_SKY_BLUE: &str = "\x1b[38;5;25m";
pub const FG_256_GRAY: &str = "\x1b[38;5;244m";

// ============================================================================
// SEMANTIC COLOR ALIASES (Application-specific meanings)
// ============================================================================

// JSON tokens
pub const FG_JSON_KEY: &str = FG_BLUE;
pub const FG_JSON_STRING: &str = FG_GREEN;
pub const FG_JSON_NUMBER: &str = FG_CYAN;
pub const FG_JSON_LITERAL: &str = FG_MAGENTA; // true, false, null

// Markup tokens
pub const FG_MARKUP_TAG: &str = FG_BLUE;
pub const FG_MARKUP_ATTR_VALUE: &str = FG_GREEN;
pub const FG_MARKUP_COMMENT: &str = FG_256_GRAY;

// Exchange chrome
pub const FG_SEPARATOR: &str = FG_256_DEEP_SKY_BLUE; // Rules between sections
pub const FG_REQUEST_LINE: &str = FG_YELLOW;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Wrap `text` in `style` and a reset
pub fn paint(style: &str, text: &str) -> String {
    format!("{style}{text}{RESET}")
}

/// Remove every SGR sequence from `text`
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}
