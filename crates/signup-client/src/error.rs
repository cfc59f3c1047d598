//! Error types for `signup-client`.

/// Errors from building an [`HttpSubmitter`](crate::HttpSubmitter).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The base URL is empty or not an absolute http(s) URL.
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
}
