//! Writing composed documents.
//!
//! The output file is overwritten in place: no backup, no temp-file rename.

use crate::error::BundleError;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// A fully composed single-file document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub html: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, html: String) -> Self {
        Self {
            path: path.into(),
            html,
        }
    }
}

/// Result of a successful write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WriteReport<'a> {
    pub path: &'a Path,
    pub bytes: u64,
}

impl WriteReport<'_> {
    pub fn kilobytes(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

impl fmt::Display for WriteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One decimal for both bundle kinds, matching the standalone page report
        write!(f, "{:.1} KB", self.kilobytes())
    }
}

/// Write the document as UTF-8, creating parent directories as needed.
pub fn write_document(doc: &Document) -> Result<WriteReport<'_>, BundleError> {
    let fail = |source| BundleError::WriteFailure {
        path: doc.path.clone(),
        source,
    };

    if let Some(parent) = doc.path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(fail)?;
    }
    fs::write(&doc.path, &doc.html).map_err(fail)?;
    let bytes = fs::metadata(&doc.path).map_err(fail)?.len();

    Ok(WriteReport {
        path: &doc.path,
        bytes,
    })
}
