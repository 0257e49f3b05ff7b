//! Bundle configuration management for `monohtml.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── bundle     # [[bundle]] definitions and validation
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # Config file discovery
//! └── mod.rs     # BundlerConfig (this file)
//! ```
//!
//! The config file is optional. Without one, the built-in `demo` and `site`
//! bundles are used with the current directory as base.
//!
//! # Top-level fields
//!
//! | Field            | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `strict_markers` | Fail when a marker is absent from its template   |
//! | `minify`         | Default minification for every bundle            |
//! | `[[bundle]]`     | Bundle definitions (see `bundle`)                |

mod bundle;
mod error;
mod util;

pub use bundle::{BundleConfig, Strategy};
#[cfg(test)]
pub use bundle::InlineRule;
pub use error::{ConfigDiagnostics, ConfigError};
use util::find_config_file;

use crate::{cli::BuildArgs, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

/// Config file searched for when `--config` is not given.
pub const CONFIG_FILE: &str = "monohtml.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing monohtml.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundlerConfig {
    /// Absolute path to the config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Base directory - parent of config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Fail when a marker is missing from its template
    pub strict_markers: bool,

    /// Minify stylesheets and scripts unless a bundle overrides it
    pub minify: bool,

    /// Bundle definitions, built in config order
    pub bundle: Vec<BundleConfig>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            root: PathBuf::new(),
            strict_markers: true,
            minify: false,
            bundle: vec![BundleConfig::demo(), BundleConfig::site()],
        }
    }
}

impl BundlerConfig {
    /// Load configuration, searching upward from cwd.
    ///
    /// Without an explicit path a missing `monohtml.toml` falls back to the
    /// built-in bundles. An explicit path that cannot be found is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_name = explicit.unwrap_or(Path::new(CONFIG_FILE));

        let mut config = match find_config_file(&cwd, config_name) {
            Some(path) => {
                crate::debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None if explicit.is_some() => {
                let err = io::Error::new(io::ErrorKind::NotFound, "config file not found");
                return Err(ConfigError::Io(config_name.to_path_buf(), err).into());
            }
            None => {
                crate::debug!("config"; "{} not found, using built-in bundles", CONFIG_FILE);
                Self::default()
            }
        };

        if config.root.as_os_str().is_empty() {
            config.root = cwd;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the base directory all bundle paths are resolved against
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply build arguments from CLI.
    pub fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        if let Some(minify) = args.minify {
            self.minify = minify;
            // An explicit flag wins over per-bundle settings
            for bundle in &mut self.bundle {
                bundle.minify = None;
            }
        }
        if args.lenient_markers {
            self.strict_markers = false;
        }
    }

    /// Select bundles by name, preserving config order.
    ///
    /// An empty `names` selects every bundle.
    pub fn select(&self, names: &[String]) -> Result<Vec<&BundleConfig>> {
        if names.is_empty() {
            return Ok(self.bundle.iter().collect());
        }

        if let Some(unknown) = names
            .iter()
            .find(|name| !self.bundle.iter().any(|b| &b.name == *name))
        {
            let known: Vec<_> = self.bundle.iter().map(|b| b.name.as_str()).collect();
            bail!(
                "unknown bundle `{}` (available: {})",
                unknown,
                known.join(", ")
            );
        }

        Ok(self
            .bundle
            .iter()
            .filter(|b| names.contains(&b.name))
            .collect())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        if self.bundle.is_empty() {
            bail!(ConfigError::Validation("no bundles defined".into()));
        }

        let mut diag = ConfigDiagnostics::new();
        let mut seen = HashSet::new();

        for (i, bundle) in self.bundle.iter().enumerate() {
            bundle.validate(i, &mut diag);
            if !bundle.name.is_empty() && !seen.insert(bundle.name.as_str()) {
                diag.error(
                    format!("bundle[{i}].name"),
                    format!("duplicate bundle name `{}`", bundle.name),
                );
            }
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================
