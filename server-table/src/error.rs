//! Error types.

/// Errors raised while building a table configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Pages must hold at least one item.
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// The configuration document could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors a [`PageFetcher`](crate::source::PageFetcher) may report.
///
/// These never reach the pagination state machine. The fetch worker logs them
/// and delivers nothing for the failed request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// The backend rejected or failed the request.
    #[error("Backend error: {0}")]
    Backend(String),

    /// The delivery side hung up.
    #[error("delivery channel closed")]
    Closed,
}

impl FetchError {
    /// Creates a new backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Fetch error.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
