//! Document composition.
//!
//! Two strategies produce the same kind of result, a single document with
//! every artifact inlined:
//!
//! - **markers** - literal external references in a template (e.g.
//!   `<script src="script.js"></script>`) are replaced by inline blocks
//! - **skeleton** - the built-in page skeleton is filled with the title,
//!   stylesheet, runtime script and application logic, in that order
//!
//! Artifact text is embedded verbatim, except that a script containing
//! `</script` is rewritten to `<\/script` so it cannot close its own block.
//! A stylesheet containing `</style` is rejected.

use crate::{
    asset::{AssetKind, Artifact},
    embed::{
        demo::{self, SkeletonVars},
        substitute,
    },
    error::BundleError,
    log,
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static SCRIPT_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</(script)").unwrap());

static STYLE_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</style").unwrap());

/// Make artifact text safe to place inside its own element.
pub fn guard_embedded<'t>(
    artifact: &Artifact,
    text: &'t str,
) -> Result<Cow<'t, str>, BundleError> {
    match artifact.kind {
        // `<\/script` reads the same inside JS strings and regex literals
        AssetKind::Script => Ok(SCRIPT_CLOSE.replace_all(text, r"<\/$1")),
        AssetKind::Style if STYLE_CLOSE.is_match(text) => Err(BundleError::UnsafeEmbed {
            path: artifact.path.clone(),
            tag: "</style",
        }),
        AssetKind::Style | AssetKind::Markup => Ok(Cow::Borrowed(text)),
    }
}

/// Wrap text in its inline element: `<style>\n{text}\n</style>`.
///
/// Markup is returned as-is.
pub fn inline_block(kind: AssetKind, text: &str) -> String {
    match kind.element() {
        Some(tag) => format!("<{tag}>\n{text}\n</{tag}>"),
        None => text.to_string(),
    }
}

/// An artifact prepared for marker substitution.
#[derive(Debug)]
pub struct MarkerInline<'a> {
    pub marker: &'a str,
    pub artifact: &'a Artifact,
    /// Text to embed (possibly minified).
    pub text: &'a str,
}

/// Replace every occurrence of each marker with its inline block.
///
/// All markers are substituted in one pass over the template, so inlined
/// text is never searched for later markers. A marker absent from the
/// template is an error when `strict`, otherwise the artifact is skipped.
pub fn compose_markers(
    template: &Artifact,
    inlines: &[MarkerInline<'_>],
    strict: bool,
) -> Result<String, BundleError> {
    let mut blocks = Vec::with_capacity(inlines.len());

    for inline in inlines {
        if !template.text.contains(inline.marker) {
            if strict {
                return Err(BundleError::MarkerNotFound {
                    marker: inline.marker.to_string(),
                    template: template.path.clone(),
                });
            }
            log!("warning"; "marker `{}` not found in {}, skipping {}",
                inline.marker, template.path.display(), inline.artifact.path.display());
            continue;
        }
        let text = guard_embedded(inline.artifact, inline.text)?;
        blocks.push((inline.marker, inline_block(inline.artifact.kind, &text)));
    }

    let bindings: Vec<(&str, &str)> = blocks
        .iter()
        .map(|(marker, block)| (*marker, block.as_str()))
        .collect();
    Ok(substitute(&template.text, &bindings))
}

/// Inputs for the skeleton strategy. Texts may already be minified.
#[derive(Debug)]
pub struct SkeletonParts<'a> {
    pub title: &'a str,
    pub style: (&'a Artifact, &'a str),
    pub script: (&'a Artifact, &'a str),
    pub app: (&'a Artifact, &'a str),
}

/// Fill the built-in page skeleton.
pub fn compose_skeleton(parts: &SkeletonParts<'_>) -> Result<String, BundleError> {
    let title = escape_text(parts.title);
    let style = guard_embedded(parts.style.0, parts.style.1)?;
    let script = guard_embedded(parts.script.0, parts.script.1)?;
    let app = guard_embedded(parts.app.0, parts.app.1)?;

    Ok(demo::render_page(&SkeletonVars {
        title: &title,
        style: &style,
        script: &script,
        app: &app,
    }))
}

/// Escape `&`, `<` and `>` for HTML text content.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
