//! Resolution of option dictionaries into job configurations
//!
//! Both job kinds follow the same pipeline:
//!
//! 1. The user dictionary is overlaid on the job's default dictionary
//!    ([`MergedOptions`]). Unknown keys, wrong value kinds and tokens outside
//!    their domain are reported and fall back to the default.
//! 2. The merged options are converted into typed fields, and derived
//!    fields are computed (UV flags, absolute paths, chaser arguments).
//! 3. The result is returned as a [`Resolved`](crate::Resolved) record
//!    together with every diagnostic raised on the way.
//!
//! # Example
//!
//! ```
//! use jobargs_core::{ExportConfigResolver, MaterialBinding};
//! use jobargs_meta::{ShadingMode, Value, dictionary};
//!
//! let user = dictionary([
//!     ("shadingMode", Value::from("none")),
//!     ("exportUVs", Value::from(false)),
//! ]);
//! let resolved = ExportConfigResolver::resolve(&user, [], &[]);
//!
//! assert!(resolved.is_clean());
//! assert_eq!(resolved.config.shading_mode, ShadingMode::None);
//! assert!(!resolved.config.export_mesh_uvs);
//! assert_eq!(resolved.config.material_binding(), MaterialBinding::Direct);
//! ```

mod defaults;
mod export;
mod import;
mod merge;
mod render;

pub use defaults::{OptionVocabulary, export_vocabulary, import_vocabulary};
pub use export::{ChaserArgs, ExportConfig, ExportConfigResolver, MaterialBinding};
pub use import::{ImportConfig, ImportConfigResolver};
pub use merge::MergedOptions;
