//! Feed store
//!
//! Single source of truth for the inbox screen. Holds the phase of the
//! current fetch attempt and publishes every change on a `watch` channel.
//! The store is owned by one screen and torn down with it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::entities::MessageRecord;
use crate::domain::ports::{DiagnosticSink, FeedSource};
use crate::error::{FetchError, FetchErrorKind};

/// Lifecycle phase of the feed
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedPhase {
    /// Before the first load
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Records in service order
    Loaded(Arc<Vec<MessageRecord>>),
    /// Last attempt failed; no records are kept
    Failed(FetchErrorKind),
}

impl FeedPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FeedPhase::Loaded(_) | FeedPhase::Failed(_))
    }
}

impl std::fmt::Display for FeedPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedPhase::Idle => write!(f, "idle"),
            FeedPhase::Loading => write!(f, "loading"),
            FeedPhase::Loaded(records) => write!(f, "loaded ({} records)", records.len()),
            FeedPhase::Failed(kind) => write!(f, "failed ({})", kind),
        }
    }
}

/// Owns the feed phase and drives fetches against a `FeedSource`
pub struct FeedStore<S> {
    inner: Arc<StoreInner<S>>,
}

struct StoreInner<S> {
    source: Arc<S>,
    diagnostics: Arc<dyn DiagnosticSink>,
    phase: watch::Sender<FeedPhase>,
    closed: AtomicBool,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl<S> FeedStore<S>
where
    S: FeedSource + 'static,
{
    pub fn new(source: Arc<S>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        let (phase, _) = watch::channel(FeedPhase::Idle);

        Self {
            inner: Arc::new(StoreInner {
                source,
                diagnostics,
                phase,
                closed: AtomicBool::new(false),
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Start a fetch.
    ///
    /// Moves to `Loading` before returning. A call while a fetch is in flight,
    /// or after teardown, does nothing. Must be called within a tokio runtime.
    pub fn load(&self) {
        if self.is_closed() {
            tracing::debug!("Ignoring load on torn down feed store");
            return;
        }

        // Held across the transition so the stored handle is always the live task
        let mut in_flight = self
            .inner
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let started = self.inner.phase.send_if_modified(|phase| {
            let closed = self.inner.closed.load(Ordering::Acquire);
            if closed || matches!(phase, FeedPhase::Loading) {
                return false;
            }
            *phase = FeedPhase::Loading;
            true
        });

        if !started {
            tracing::debug!("Load already in flight or store torn down");
            return;
        }

        let inner = Arc::clone(&self.inner);
        *in_flight = Some(tokio::spawn(async move {
            let result = inner.source.fetch_messages().await;
            inner.finish(result);
        }));
    }
}

impl<S> FeedStore<S> {
    /// Snapshot of the current phase
    pub fn phase(&self) -> FeedPhase {
        self.inner.phase.borrow().clone()
    }

    /// Records of the last successful load, if the store is `Loaded`
    pub fn records(&self) -> Option<Arc<Vec<MessageRecord>>> {
        match &*self.inner.phase.borrow() {
            FeedPhase::Loaded(records) => Some(Arc::clone(records)),
            _ => None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedPhase> {
        self.inner.phase.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Tear the store down.
    ///
    /// Aborts the in-flight fetch; a result that still arrives is discarded.
    pub fn shutdown(&self) {
        // Flip the flag under the channel lock so it orders against `finish`
        self.inner.phase.send_if_modified(|_| {
            self.inner.closed.store(true, Ordering::Release);
            false
        });

        let handle = self
            .inner
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

impl<S> StoreInner<S> {
    fn finish(&self, result: Result<Vec<MessageRecord>, FetchError>) {
        let (next, failure) = match result {
            Ok(records) => (FeedPhase::Loaded(Arc::new(records)), None),
            Err(error) => (FeedPhase::Failed(error.kind()), Some(error)),
        };

        let applied = self.phase.send_if_modified(|phase| {
            if self.closed.load(Ordering::Acquire) {
                return false;
            }
            *phase = next;
            true
        });

        if !applied {
            tracing::debug!("Discarding fetch result after teardown");
            return;
        }

        // Only failures that actually reached the view are reported
        if let Some(error) = failure {
            self.diagnostics.fetch_failed(&error);
        }
    }
}

impl<S> Drop for FeedStore<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
