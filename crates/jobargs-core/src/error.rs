//! Error types for jobargs-core

/// Result type for jobargs-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jobargs-core operations
///
/// Resolution itself never fails; see [`Resolved`](crate::Resolved) for the
/// non-fatal diagnostics it reports. These errors come from the layers
/// around it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Option dictionary could not be parsed
    #[error(transparent)]
    Meta(#[from] jobargs_meta::Error),

    /// Invalid log filter directive
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global tracing subscriber is already installed
    #[error("Failed to install log subscriber: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}
