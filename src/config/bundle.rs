//! `[[bundle]]` definitions.
//!
//! # Example
//!
//! ```toml
//! [[bundle]]
//! name = "site"
//! strategy = "markers"
//! root = "website/src"
//! template = "index.html"
//! output = "lxclua_official_site.html"
//!
//! [[bundle.inline]]
//! kind = "style"
//! marker = '<link rel="stylesheet" href="style.css">'
//! path = "style.css"
//!
//! [[bundle]]
//! name = "demo"
//! strategy = "skeleton"
//! script = "lxclua.js"
//! output = "lxclua_standalone.html"
//! ```

use super::ConfigDiagnostics;
use crate::asset::{AssetKind, ArtifactSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How a bundle's document is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Replace literal external references in a template file.
    #[default]
    Markers,
    /// Fill the built-in page skeleton.
    Skeleton,
}

/// One marker-block substitution: `marker` is replaced by the inlined `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRule {
    pub kind: AssetKind,
    pub marker: String,
    pub path: PathBuf,
}

impl InlineRule {
    pub fn new(kind: AssetKind, marker: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            marker: marker.into(),
            path: path.into(),
        }
    }

    pub fn spec(&self) -> ArtifactSpec {
        ArtifactSpec::new(self.kind, &self.path)
    }
}

/// A single Load → Transform → Compose → Write pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    pub name: String,
    pub strategy: Strategy,
    /// Input directory, relative to the config directory.
    pub root: PathBuf,
    /// Output file, relative to the config directory.
    pub output: PathBuf,
    /// Overrides the top-level `minify` setting.
    pub minify: Option<bool>,

    /// Markup template (markers strategy).
    pub template: Option<PathBuf>,
    /// Marker substitutions, applied in order (markers strategy).
    pub inline: Vec<InlineRule>,

    /// Primary runtime script (skeleton strategy).
    pub script: Option<PathBuf>,
    /// Stylesheet; the built-in one is used when absent (skeleton strategy).
    pub style: Option<PathBuf>,
    /// Application logic; the built-in one is used when absent (skeleton strategy).
    pub app: Option<PathBuf>,
    /// Page title (skeleton strategy).
    pub title: Option<String>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            strategy: Strategy::Markers,
            root: PathBuf::from("."),
            output: PathBuf::new(),
            minify: None,
            template: None,
            inline: Vec::new(),
            script: None,
            style: None,
            app: None,
            title: None,
        }
    }
}

impl BundleConfig {
    /// Interpreter demo page: `lxclua.js` inside the built-in skeleton.
    pub fn demo() -> Self {
        Self {
            name: "demo".into(),
            strategy: Strategy::Skeleton,
            output: PathBuf::from("lxclua_standalone.html"),
            script: Some(PathBuf::from("lxclua.js")),
            ..Self::default()
        }
    }

    /// Project website: stylesheet and script inlined into `index.html`.
    pub fn site() -> Self {
        Self {
            name: "site".into(),
            strategy: Strategy::Markers,
            root: PathBuf::from("website/src"),
            output: PathBuf::from("lxclua_official_site.html"),
            template: Some(PathBuf::from("index.html")),
            inline: vec![
                InlineRule::new(
                    AssetKind::Style,
                    r#"<link rel="stylesheet" href="style.css">"#,
                    "style.css",
                ),
                InlineRule::new(
                    AssetKind::Script,
                    r#"<script src="script.js"></script>"#,
                    "script.js",
                ),
            ],
            ..Self::default()
        }
    }

    /// Whether minification applies, given the top-level default.
    pub fn minify_or(&self, default: bool) -> bool {
        self.minify.unwrap_or(default)
    }

    /// Files read from `root` for this bundle, template first.
    pub fn input_specs(&self) -> Vec<ArtifactSpec> {
        match self.strategy {
            Strategy::Markers => self
                .template
                .iter()
                .map(|t| ArtifactSpec::new(AssetKind::Markup, t))
                .chain(self.inline.iter().map(InlineRule::spec))
                .collect(),
            Strategy::Skeleton => [
                (AssetKind::Style, &self.style),
                (AssetKind::Script, &self.script),
                (AssetKind::Script, &self.app),
            ]
            .into_iter()
            .filter_map(|(kind, path)| path.as_ref().map(|p| ArtifactSpec::new(kind, p)))
            .collect(),
        }
    }

    /// Resolve the input directory against the config directory.
    pub fn input_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.root)
    }

    /// Resolve the output file against the config directory.
    pub fn output_path(&self, base: &Path) -> PathBuf {
        base.join(&self.output)
    }

    /// Validate one bundle; `index` locates it in diagnostics.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let at = |field: &str| format!("bundle[{index}].{field}");

        if self.name.trim().is_empty() {
            diag.error(at("name"), "bundle name must not be empty");
        }
        if self.output.as_os_str().is_empty() {
            diag.error(at("output"), "output path must not be empty");
        }

        match self.strategy {
            Strategy::Markers => {
                if self.template.is_none() {
                    diag.error_with_hint(
                        at("template"),
                        "markers strategy requires a template",
                        "set `template = \"index.html\"`",
                    );
                }
                if self.inline.is_empty() {
                    diag.error_with_hint(
                        at("inline"),
                        "markers strategy requires at least one [[bundle.inline]] rule",
                        "add a rule with `kind`, `marker` and `path`",
                    );
                }
                for (i, rule) in self.inline.iter().enumerate() {
                    if rule.kind == AssetKind::Markup {
                        diag.error(
                            at(&format!("inline[{i}].kind")),
                            "inline rules must be `style` or `script`",
                        );
                    }
                    if rule.marker.is_empty() {
                        diag.error(at(&format!("inline[{i}].marker")), "marker must not be empty");
                    }
                    if rule.path.as_os_str().is_empty() {
                        diag.error(at(&format!("inline[{i}].path")), "path must not be empty");
                    }
                }
            }
            Strategy::Skeleton => {
                if self.script.is_none() {
                    diag.error_with_hint(
                        at("script"),
                        "skeleton strategy requires a primary script",
                        "set `script = \"lxclua.js\"`",
                    );
                }
            }
        }
    }
}
