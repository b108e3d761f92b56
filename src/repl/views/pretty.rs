//! # Exchange Rendering
//!
//! Formats an [`HttpExchange`] for the terminal: request echo, status,
//! optional raw headers, then the body reformatted and highlighted.

use std::io::Write;

use crate::repl::error::ReplResult;
use crate::repl::models::{HttpExchange, HttpRequest};
use crate::repl::views::ansi_escape_codes::{paint, FG_REQUEST_LINE, FG_SEPARATOR};
use crate::repl::views::highlight::highlight;

/// Rule width used when the terminal size cannot be read
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Current terminal width, or 80 when it cannot be determined
pub fn terminal_width() -> u16 {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _rows)| columns)
        .filter(|columns| *columns > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Re-indent `text` with two spaces when it parses as JSON, else return it as is
pub fn format_body(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}

/// Writes exchanges to an output stream
#[derive(Debug, Clone)]
pub struct ExchangeRenderer {
    /// `None` follows the terminal as it is resized
    fixed_width: Option<u16>,
}

impl ExchangeRenderer {
    /// Renderer with a fixed rule width
    pub fn with_width(width: u16) -> Self {
        Self {
            fixed_width: Some(width),
        }
    }

    /// Renderer whose rules match the terminal width at the time they are drawn
    pub fn for_terminal() -> Self {
        Self { fixed_width: None }
    }

    pub fn width(&self) -> u16 {
        self.fixed_width.unwrap_or_else(terminal_width)
    }

    /// A horizontal rule as wide as the terminal
    pub fn rule(&self) -> String {
        paint(FG_SEPARATOR, &"-".repeat(usize::from(self.width())))
    }

    /// Print one exchange: the request echo followed by the response
    pub fn render(
        &self,
        out: &mut dyn Write,
        exchange: &HttpExchange,
        show_headers: bool,
    ) -> ReplResult<()> {
        self.render_request(out, &exchange.request)?;
        self.render_response(out, exchange, show_headers)
    }

    /// Echo the request line; printed before the request is sent
    pub fn render_request(&self, out: &mut dyn Write, request: &HttpRequest) -> std::io::Result<()> {
        writeln!(out, "{}", self.rule())?;
        writeln!(out, "{}", paint(FG_REQUEST_LINE, &request.request_line()))?;
        out.flush()
    }

    /// Status line, optional raw headers and the formatted body.
    ///
    /// A body that fails to decode is printed raw and the decode error is
    /// returned for the caller to report.
    pub fn render_response(
        &self,
        out: &mut dyn Write,
        exchange: &HttpExchange,
        show_headers: bool,
    ) -> ReplResult<()> {
        writeln!(out, "{}", exchange.status_line())?;

        if show_headers {
            writeln!(out, "{}", self.rule())?;
            writeln!(out, "{}", exchange.header_block())?;
        }

        let (body, decode_error) = match exchange.decoded_body() {
            Ok(bytes) => (bytes, None),
            Err(e) => (exchange.body.clone(), Some(e)),
        };

        writeln!(out, "{}", self.rule())?;
        let text = String::from_utf8_lossy(&body);
        writeln!(out, "{}", highlight(&format_body(&text)))?;
        out.flush()?;

        decode_error.map_or(Ok(()), Err)
    }
}

impl Default for ExchangeRenderer {
    fn default() -> Self {
        Self::for_terminal()
    }
}
