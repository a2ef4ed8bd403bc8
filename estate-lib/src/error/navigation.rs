//! Navigation error types

/// Errors that can occur when moving the navigation context to a new location.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The path (or path and query) could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Relative paths are not accepted.
    #[error("Path must be absolute: {0}")]
    RelativePath(String),
}
