//! Diagnostic sink port trait

use crate::error::FetchError;

/// Receives fetch failures for operators.
///
/// Failures never reach the rendered list; this is the only place their
/// detail is visible.
pub trait DiagnosticSink: Send + Sync {
    fn fetch_failed(&self, error: &FetchError);
}
