//! Asset kind definitions.

use serde::{Deserialize, Serialize};

/// Kind of text artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// HTML template or fragment.
    Markup,
    /// CSS stylesheet, embedded in `<style>`.
    Style,
    /// JavaScript, embedded in `<script>`.
    Script,
}

impl AssetKind {
    /// Element name used when the artifact is inlined.
    ///
    /// Markup is never wrapped, so it has none.
    pub const fn element(self) -> Option<&'static str> {
        match self {
            Self::Markup => None,
            Self::Style => Some("style"),
            Self::Script => Some("script"),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Style => "style",
            Self::Script => "script",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
