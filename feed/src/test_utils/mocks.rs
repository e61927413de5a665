//! Mock implementations of port traits

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::domain::entities::MessageRecord;
use crate::domain::ports::{DiagnosticSink, FeedSource};
use crate::error::{FetchError, FetchErrorKind};

// ============================================================================
// Mock Feed Source
// ============================================================================

/// Returns queued responses in order, then empty feeds.
///
/// A gated source holds every fetch until the returned `Notify` is signalled.
#[derive(Default)]
pub struct MockFeedSource {
    responses: Mutex<VecDeque<Result<Vec<MessageRecord>, FetchError>>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, records: Vec<MessageRecord>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(records));
        self
    }

    pub fn with_error(self, error: FetchError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_messages(&self) -> Result<Vec<MessageRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ============================================================================
// Recording Diagnostics
// ============================================================================

#[derive(Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<FetchErrorKind>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<FetchErrorKind> {
        self.entries.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn fetch_failed(&self, error: &FetchError) {
        self.entries.lock().unwrap().push(error.kind());
    }
}
