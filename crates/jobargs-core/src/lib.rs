//! Typed job configurations for USD import and export
//!
//! This crate turns a loosely-typed option dictionary into an
//! [`ExportConfig`] or [`ImportConfig`]. It implements:
//!
//! - **Dictionary overlay**: user options over process-wide defaults, with
//!   type and token checks per key
//! - **Derivation rules**: UV flags, absolute scene paths, chaser arguments
//!   and material binding mode
//! - **Type filtering**: excluded type names expanded across the host type
//!   hierarchy
//! - **Diagnostics**: every problem with the input is returned next to the
//!   config, never raised as an error
//!
//! # Architecture
//!
//! ```text
//!                 import / export job
//!                         |
//!                   jobargs-core
//!                         |
//!                   jobargs-meta
//!       (schemas, tokens, values, type hierarchy)
//! ```
//!
//! # Example
//!
//! ```
//! use jobargs_core::{ImportConfigResolver, TimeInterval};
//! use jobargs_meta::dictionary;
//!
//! let resolved = ImportConfigResolver::resolve(
//!     &dictionary([("shadingMode", "bogus")]),
//!     false,
//!     None,
//! );
//!
//! assert_eq!(resolved.diagnostics.len(), 1);
//! assert_eq!(resolved.config.time_interval(), TimeInterval::full());
//! ```

pub mod config;
pub mod error;
pub mod interval;
pub mod logging;
pub mod resolved;
pub mod type_filter;

pub use config::{
    ChaserArgs, ExportConfig, ExportConfigResolver, ImportConfig, ImportConfigResolver,
    MaterialBinding, MergedOptions, OptionVocabulary, export_vocabulary, import_vocabulary,
};
pub use error::{Error, Result};
pub use interval::TimeInterval;
pub use resolved::Resolved;
pub use type_filter::TypeFilter;
