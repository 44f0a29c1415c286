//! Token registry for option validation
//!
//! This module provides a registry of recognized option keys and, for keys
//! with a closed token domain, the accepted values.

use std::collections::BTreeMap;

use crate::diagnostic::Diagnostic;
use crate::schema::OptionSchema;

/// Registry mapping option keys to their accepted tokens.
///
/// Every registered key is recognized; keys registered with a domain only
/// accept the listed tokens.
///
/// # Example
///
/// ```
/// use jobargs_meta::TokenRegistry;
///
/// let mut registry = TokenRegistry::new();
/// registry.register("exportSkin", Some(&["none", "auto", "explicit"]));
/// assert!(registry.is_recognized("exportSkin", "auto"));
/// assert!(!registry.is_recognized("exportSkin", "always"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    /// Maps option key to its token domain, if closed
    domains: BTreeMap<&'static str, Option<&'static [&'static str]>>,
}

impl TokenRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            domains: BTreeMap::new(),
        }
    }

    /// Create a registry holding every key of `schema`.
    pub fn from_schema(schema: &OptionSchema) -> Self {
        let mut registry = Self::new();
        for spec in schema.iter() {
            registry.register(spec.key, spec.domain);
        }
        registry
    }

    /// Register an option key with an optional closed domain.
    ///
    /// If the key was already registered, the previous domain is replaced.
    pub fn register(&mut self, key: &'static str, domain: Option<&'static [&'static str]>) {
        self.domains.insert(key, domain);
    }

    /// Check if an option key is recognized.
    pub fn is_known_key(&self, key: &str) -> bool {
        self.domains.contains_key(key)
    }

    /// The token domain of `key`, or None for unknown or free-form keys.
    pub fn tokens(&self, key: &str) -> Option<&'static [&'static str]> {
        self.domains.get(key).copied().flatten()
    }

    /// Check if `token` is an accepted value for `key`.
    ///
    /// Free-form keys accept any token; unknown keys accept none.
    pub fn is_recognized(&self, key: &str, token: &str) -> bool {
        match self.domains.get(key) {
            Some(Some(domain)) => domain.contains(&token),
            Some(None) => true,
            None => false,
        }
    }

    /// Validate a token for `key`, producing the matching diagnostic on failure.
    pub fn validate(&self, key: &str, token: &str) -> Result<(), Diagnostic> {
        match self.domains.get(key) {
            None => Err(Diagnostic::UnrecognizedKey {
                key: key.to_string(),
            }),
            Some(Some(domain)) if !domain.contains(&token) => {
                Err(Diagnostic::unrecognized_enum_value(key, token, domain))
            }
            Some(_) => Ok(()),
        }
    }

    /// List all recognized keys (sorted).
    pub fn keys(&self) -> Vec<&'static str> {
        self.domains.keys().copied().collect()
    }

    /// List the keys that have a closed token domain (sorted).
    pub fn token_keys(&self) -> Vec<&'static str> {
        self.domains
            .iter()
            .filter(|(_, domain)| domain.is_some())
            .map(|(key, _)| *key)
            .collect()
    }

    /// Get the number of registered keys.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
