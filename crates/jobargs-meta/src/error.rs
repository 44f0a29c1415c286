//! Error types for jobargs-meta
//!
//! These are the only fatal errors in the workspace. They are raised at the
//! container boundary, before a dictionary reaches a resolver. Everything a
//! resolver finds wrong with an individual option is a
//! [`Diagnostic`](crate::Diagnostic) instead.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid JSON option dictionary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML option dictionary: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Option dictionary must be a table at the top level, got {found}")]
    NotADictionary { found: String },
}
