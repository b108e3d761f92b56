//! # Syntax Highlighting
//!
//! Guesses the syntax of a response body from its content alone and
//! colours it for the terminal. Removing the escape codes from the output
//! always gives back the input unchanged.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::repl::views::ansi_escape_codes::{
    paint, FG_JSON_KEY, FG_JSON_LITERAL, FG_JSON_NUMBER, FG_JSON_STRING, FG_MARKUP_ATTR_VALUE,
    FG_MARKUP_COMMENT, FG_MARKUP_TAG,
};

/// How much of the body is inspected when sniffing markup
const SNIFF_CHARS: usize = 512;

static JSON_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<string>"(?:[^"\\]|\\.)*")(?P<colon>\s*:)?|(?P<number>-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)|(?P<literal>\b(?:true|false|null)\b)"#,
    )
    .expect("JSON token pattern is valid")
});

static MARKUP_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<comment><!--[\s\S]*?-->)|(?P<tag></?[A-Za-z!?][^>]*>)")
        .expect("markup token pattern is valid")
});

static ATTR_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).expect("attribute pattern is valid"));

/// Syntax guessed from a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Json,
    Html,
    Xml,
    Plain,
}

/// Guess the syntax of `text` without any content-type hint
pub fn detect(text: &str) -> Syntax {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Syntax::Plain;
    }

    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
    {
        return Syntax::Json;
    }

    let head: String = trimmed
        .chars()
        .take(SNIFF_CHARS)
        .collect::<String>()
        .to_ascii_lowercase();
    if head.starts_with("<!doctype html") || head.contains("<html") {
        return Syntax::Html;
    }
    if head.starts_with("<?xml") || (trimmed.starts_with('<') && trimmed.ends_with('>')) {
        return Syntax::Xml;
    }

    Syntax::Plain
}

/// Colour `text` according to its detected syntax
pub fn highlight(text: &str) -> String {
    let syntax = detect(text);
    tracing::trace!("Highlighting body as {:?}", syntax);
    match syntax {
        Syntax::Json => highlight_json(text),
        Syntax::Html | Syntax::Xml => highlight_markup(text),
        Syntax::Plain => text.to_string(),
    }
}

fn highlight_json(text: &str) -> String {
    JSON_TOKEN
        .replace_all(text, |caps: &Captures<'_>| {
            if let Some(string) = caps.name("string") {
                match caps.name("colon") {
                    Some(colon) => format!("{}{}", paint(FG_JSON_KEY, string.as_str()), colon.as_str()),
                    None => paint(FG_JSON_STRING, string.as_str()),
                }
            } else if let Some(number) = caps.name("number") {
                paint(FG_JSON_NUMBER, number.as_str())
            } else {
                paint(FG_JSON_LITERAL, &caps[0])
            }
        })
        .into_owned()
}

fn highlight_markup(text: &str) -> String {
    MARKUP_TOKEN
        .replace_all(text, |caps: &Captures<'_>| {
            if let Some(comment) = caps.name("comment") {
                return paint(FG_MARKUP_COMMENT, comment.as_str());
            }
            highlight_tag(&caps[0])
        })
        .into_owned()
}

/// A tag in the tag colour with its quoted attribute values picked out
fn highlight_tag(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len() * 2);
    let mut last = 0;
    for value in ATTR_VALUE.find_iter(tag) {
        out.push_str(&paint(FG_MARKUP_TAG, &tag[last..value.start()]));
        out.push_str(&paint(FG_MARKUP_ATTR_VALUE, value.as_str()));
        last = value.end();
    }
    out.push_str(&paint(FG_MARKUP_TAG, &tag[last..]));
    out
}
