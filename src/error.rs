//! Error types for fragment loading and configuration.
//!
//! ERROR HANDLING
//! ==============
//! Both load failures collapse to the same user-visible fallback; the
//! variants only exist so the diagnostic log line can say what happened.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a page fragment could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("fragment {page_id} unavailable: HTTP status {status}")]
    FragmentUnavailable { page_id: String, status: u16 },
    /// The request or the body read failed before a usable response arrived.
    #[error("fragment {page_id} transport failure: {message}")]
    TransportFailure { page_id: String, message: String },
}

impl LoadError {
    /// Page identifier of the failed request.
    #[must_use]
    pub fn page_id(&self) -> &str {
        match self {
            Self::FragmentUnavailable { page_id, .. } | Self::TransportFailure { page_id, .. } => page_id,
        }
    }
}

/// Configuration embedded in the shell could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Malformed(#[from] serde_json::Error),
}
