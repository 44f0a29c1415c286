//! Shared test fixtures for the jobargs workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`hierarchy`]: a host-like type hierarchy with constraints, shapes and joints
//! - [`options`]: option dictionaries, scene selections and time samples

pub mod hierarchy;
pub mod options;
