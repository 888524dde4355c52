//! Error types for the qa-widget crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Query text never appears in error messages.

/// Errors that can occur while mounting or feeding the search widget.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// The designated mount container was not found in the page tree.
    #[error("missing container: {0}")]
    MissingContainer(String),

    /// The shared dataset was not published within the polling budget.
    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),

    /// Invalid widget configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to parse dataset JSON or a QA source document.
    #[error("parse error: {0}")]
    Parse(String),

    /// A filesystem read or write failed.
    #[error("io error: {0}")]
    Io(String),
}

/// Convenience type alias for qa-widget results.
pub type Result<T> = std::result::Result<T, WidgetError>;
