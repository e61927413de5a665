//! Diagnostic sink backed by `tracing`

use crate::domain::ports::DiagnosticSink;
use crate::error::FetchError;

/// Logs fetch failures as `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn fetch_failed(&self, error: &FetchError) {
        tracing::error!(kind = %error.kind(), "Failed to fetch messages: {}", error);
    }
}
