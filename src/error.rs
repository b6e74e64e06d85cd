use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    // Startup
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid worker count")]
    InvalidWorkerCount(usize),

    #[error("no pattern provided")]
    MissingPattern,

    // Traversal
    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("cannot open directory")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrawlError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "skipping <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied(p) | Self::Io { path: p, .. } => Some(p),
            _ => None,
        }
    }

    /// Whether the crawl can continue after this error.
    ///
    /// Recoverable errors (unreadable directories) are collected into
    /// [`Results::errors`](crate::Results::errors) and the walk keeps going —
    /// the affected subtree simply contributes nothing.
    ///
    /// Fatal errors (bad pattern, bad worker count) halt before any traversal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PermissionDenied(_) | Self::Io { .. })
    }
}

/// Classify an `io::Error` from opening or scanning a directory.
pub(crate) fn io_error(path: PathBuf, source: std::io::Error) -> CrawlError {
    if source.kind() == std::io::ErrorKind::PermissionDenied {
        CrawlError::PermissionDenied(path)
    } else {
        CrawlError::Io { path, source }
    }
}
