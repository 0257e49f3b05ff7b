//! Artifact loading.
//!
//! Loading is all-or-nothing: the first unreadable file aborts the whole
//! request and nothing is returned.

use super::AssetKind;
use crate::error::BundleError;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A file to load, relative to a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: AssetKind,
    pub path: PathBuf,
}

impl ArtifactSpec {
    pub fn new(kind: AssetKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// Text content loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: AssetKind,
    /// Resolved path (base joined with the requested path).
    pub path: PathBuf,
    pub text: String,
}

impl Artifact {
    /// Artifact not backed by a file (built-in sources).
    pub fn inline(kind: AssetKind, name: &str, text: impl Into<String>) -> Self {
        Self {
            kind,
            path: PathBuf::from(name),
            text: text.into(),
        }
    }
}

/// Load one file as UTF-8 text.
pub fn load_artifact(base: &Path, spec: &ArtifactSpec) -> Result<Artifact, BundleError> {
    let path = base.join(&spec.path);
    let text = fs::read_to_string(&path).map_err(|err| BundleError::from_read(path.clone(), err))?;
    crate::debug!("load"; "{} {} ({} bytes)", spec.kind, path.display(), text.len());
    Ok(Artifact {
        kind: spec.kind,
        path,
        text,
    })
}

/// Load every requested file, failing on the first error.
pub fn load_artifacts(base: &Path, specs: &[ArtifactSpec]) -> Result<Vec<Artifact>, BundleError> {
    specs.iter().map(|spec| load_artifact(base, spec)).collect()
}
