//! Escape-aware measuring for strings that already carry ANSI styling.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Resets every SGR attribute.
pub const RESET: &str = "\x1b[0m";

static ESCAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap());

static SGR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

pub fn strip(text: &str) -> Cow<'_, str> {
    ESCAPE_REGEX.replace_all(text, "")
}

/// Terminal columns occupied by `text`, escape sequences excluded.
pub fn visible_len(text: &str) -> usize {
    strip(text).width()
}

/// Bytes spent on SGR escape sequences.
pub fn escape_overhead(text: &str) -> usize {
    SGR_REGEX.find_iter(text).map(|m| m.len()).sum()
}

pub fn has_escapes(text: &str) -> bool {
    ESCAPE_REGEX.is_match(text)
}

/// Keep at most `max_cols` visible columns of `text`, copying escape
/// sequences through untouched.
pub fn take_visible(text: &str, max_cols: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cols = 0;
    let mut cursor = 0;

    for m in ESCAPE_REGEX.find_iter(text) {
        if !take_chars(&text[cursor..m.start()], max_cols, &mut cols, &mut out) {
            return out;
        }
        out.push_str(m.as_str());
        cursor = m.end();
    }
    take_chars(&text[cursor..], max_cols, &mut cols, &mut out);
    out
}

fn take_chars(segment: &str, max_cols: usize, cols: &mut usize, out: &mut String) -> bool {
    for c in segment.chars() {
        let w = c.width().unwrap_or(0);
        if *cols + w > max_cols {
            return false;
        }
        *cols += w;
        out.push(c);
    }
    true
}
