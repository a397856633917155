/// Error types for browsing and configuration.
///
/// Browsing failures deliberately carry very little detail: any OS-level
/// read failure becomes `NotFound`, whatever the underlying `io::ErrorKind`.
use std::path::PathBuf;
use thiserror::Error;

/// Failure while resolving or reading a directory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrowseError {
    /// The path is missing, unreadable, or not a directory.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The request names something that may not be served (path escapes
    /// its root, or the file extension is not allow-listed).
    #[error("forbidden: {0}")]
    Forbidden(String),
}

/// Invalid start-up configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}
