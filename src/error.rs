//! Bundle pipeline error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, composing or writing a bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("input file `{}` not found", .path.display())]
    MissingInputFile { path: PathBuf },

    #[error("input file `{}` is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    #[error("failed to read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("marker `{marker}` not found in template `{}`", .template.display())]
    MarkerNotFound { marker: String, template: PathBuf },

    // NOTE: a stylesheet has no escape for `</style` that survives both the
    // HTML tokenizer and the CSS parser, so it is rejected instead.
    #[error("`{}` contains `{tag}` and would end its own inline block", .path.display())]
    UnsafeEmbed { path: PathBuf, tag: &'static str },
}

impl BundleError {
    /// Classify an I/O error from reading `path`.
    pub fn from_read(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::MissingInputFile { path },
            std::io::ErrorKind::InvalidData => Self::Encoding { path },
            _ => Self::Read { path, source: err },
        }
    }
}
