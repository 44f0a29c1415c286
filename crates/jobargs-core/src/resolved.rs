//! Resolution results and diagnostic collection

use jobargs_meta::Diagnostic;

/// A resolved configuration plus everything that was wrong with its input.
///
/// Resolution never fails: each diagnostic degraded one field to its
/// default, and `config` is usable regardless.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    pub config: T,
    /// Diagnostics in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Resolved<T> {
    /// True if the input resolved without any diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_config(self) -> T {
        self.config
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.config, self.diagnostics)
    }
}

/// Collects diagnostics during a single resolution, logging each one.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticSink {
    job: &'static str,
    entries: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub(crate) fn new(job: &'static str) -> Self {
        Self {
            job,
            entries: Vec::new(),
        }
    }

    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(job = self.job, key = ?diagnostic.key(), "{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub(crate) fn finish<T>(self, config: T) -> Resolved<T> {
        tracing::debug!(
            job = self.job,
            diagnostics = self.entries.len(),
            "Resolved job options"
        );
        Resolved {
            config,
            diagnostics: self.entries,
        }
    }
}
