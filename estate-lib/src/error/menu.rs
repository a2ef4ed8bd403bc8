//! Menu configuration error types

/// Errors raised while loading or validating a menu configuration.
///
/// Resolving breadcrumbs never fails; these only surface when a menu tree
/// is built from external configuration.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// A node URL is not an absolute path.
    #[error("Menu URL must start with '/': {url}")]
    InvalidUrl { url: String },

    /// Two nodes share the same URL.
    #[error("Duplicate menu URL: {url}")]
    DuplicateUrl { url: String },

    /// The configuration could not be parsed.
    #[error("Menu parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl MenuError {
    /// Creates a new invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a new duplicate URL error.
    pub fn duplicate_url(url: impl Into<String>) -> Self {
        Self::DuplicateUrl { url: url.into() }
    }
}
