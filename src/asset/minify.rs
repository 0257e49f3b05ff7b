//! Best-effort minification for inlined JS and CSS.
//!
//! Each pass is a global regex replacement over the whole text. Nothing is
//! tokenized: string, regex and template literals are not recognized, so a
//! `//` or `/*` inside a literal is treated as a comment and whitespace next
//! to punctuation inside a literal is removed. Only enable minification for
//! sources known not to depend on such literals.

use super::AssetKind;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// `/* ... */`, non-greedy, across lines.
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// `//` to end of line.
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());

static CSS_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static CSS_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{};:,>])\s*").unwrap());

static CSS_TRAILING_SEMI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r";\}").unwrap());

static JS_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

static JS_HSPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

static JS_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

static JS_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{};:,=+\-*/<>!&|?])\s*").unwrap());

/// Minify a stylesheet.
pub fn minify_css(source: &str) -> String {
    let text = BLOCK_COMMENT.replace_all(source, "");
    let text = CSS_WHITESPACE.replace_all(&text, " ");
    let text = CSS_PUNCT.replace_all(&text, "$1");
    let text = CSS_TRAILING_SEMI.replace_all(&text, "}");
    text.trim().to_string()
}

/// Minify a script.
///
/// Newlines are removed outright, so sources relying on automatic semicolon
/// insertion across lines will be joined incorrectly.
pub fn minify_js(source: &str) -> String {
    let text = BLOCK_COMMENT.replace_all(source, "");
    let text = LINE_COMMENT.replace_all(&text, "");
    let text = JS_BLANK_LINES.replace_all(&text, "\n");
    let text = JS_HSPACE.replace_all(&text, " ");
    let text = JS_NEWLINE.replace_all(&text, "");
    let text = JS_PUNCT.replace_all(&text, "$1");
    text.trim().to_string()
}

/// Minify content based on its kind. Markup is returned unchanged.
pub fn minify(kind: AssetKind, content: &str) -> Cow<'_, str> {
    match kind {
        AssetKind::Style => Cow::Owned(minify_css(content)),
        AssetKind::Script => Cow::Owned(minify_js(content)),
        AssetKind::Markup => Cow::Borrowed(content),
    }
}
