//! Feed list renderer
//!
//! Projects the store's phase into keyed rows and keeps row identity
//! across passes. Also renders the list as plain text for terminals.

use std::collections::{HashMap, HashSet};

use tokio::sync::watch;

use crate::app::{FeedPhase, FeedStore};
use crate::domain::entities::MessageRecord;
use crate::domain::ports::FeedSource;

/// Screen title shown above the list
pub const SCREEN_TITLE: &str = "Messages & Chat";

/// One visible row of the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    /// Identity key, derived from the record id
    pub key: String,
    /// Generation in which this key was mounted; unchanged while retained
    pub mount: u64,
    pub avatar: Option<String>,
    pub name: String,
    pub message: String,
    /// Unread count, only when positive
    pub badge: Option<String>,
    pub time: String,
}

/// Keys affected by the last render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowChanges {
    pub mounted: Vec<String>,
    pub retained: Vec<String>,
    pub unmounted: Vec<String>,
}

/// The rendered list region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedList {
    /// A fetch is in flight; a presentation layer may show a spinner
    pub busy: bool,
    pub rows: Vec<FeedRow>,
    pub changes: RowChanges,
}

impl FeedList {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Project a phase into rows, in feed order.
///
/// Only `Loaded` produces rows. Returned rows are not mounted yet
/// (`mount == 0`).
pub fn project_rows(phase: &FeedPhase) -> Vec<FeedRow> {
    let FeedPhase::Loaded(records) = phase else {
        return Vec::new();
    };

    let mut emitted: HashSet<String> = HashSet::with_capacity(records.len());

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let base = row_key(record, index);
            let key = if emitted.contains(&base) {
                tracing::warn!(key = %base, "Duplicate message id in feed");
                (1..)
                    .map(|n| format!("{}~{}", base, n))
                    .find(|candidate| !emitted.contains(candidate))
                    .unwrap_or_else(|| base.clone())
            } else {
                base
            };
            emitted.insert(key.clone());

            project_row(key, record)
        })
        .collect()
}

/// Identity key for a record: its id, or its position when it has none
pub fn row_key(record: &MessageRecord, index: usize) -> String {
    match &record.id {
        Some(id) => id.to_string(),
        None => format!("#{}", index),
    }
}

fn project_row(key: String, record: &MessageRecord) -> FeedRow {
    FeedRow {
        key,
        mount: 0,
        avatar: record.avatar.clone(),
        name: record.name.clone().unwrap_or_default(),
        message: record.message.clone().unwrap_or_default(),
        badge: record
            .unread
            .filter(|count| *count > 0)
            .map(|count| count.to_string()),
        time: record.time.clone().unwrap_or_default(),
    }
}

/// Renders a `FeedStore` as a keyed list
pub struct FeedListRenderer<S> {
    store: FeedStore<S>,
    updates: watch::Receiver<FeedPhase>,
    activated: bool,
    list: FeedList,
    mounts: HashMap<String, u64>,
    generation: u64,
}

impl<S> FeedListRenderer<S>
where
    S: FeedSource + 'static,
{
    pub fn new(store: FeedStore<S>) -> Self {
        let updates = store.subscribe();

        let mut renderer = Self {
            store,
            updates,
            activated: false,
            list: FeedList::default(),
            mounts: HashMap::new(),
            generation: 0,
        };
        renderer.render();
        renderer
    }

    /// Trigger the screen's single load.
    ///
    /// Only the first call loads; later calls return the current list.
    pub fn activate(&mut self) -> &FeedList {
        if !self.activated {
            self.activated = true;
            self.store.load();
        }
        self.render()
    }
}

impl<S> FeedListRenderer<S> {
    /// Re-project the store's current phase
    pub fn render(&mut self) -> &FeedList {
        let phase = self.updates.borrow_and_update().clone();
        let busy = matches!(phase, FeedPhase::Loading);
        let rows = project_rows(&phase);

        self.reconcile(rows, busy);
        &self.list
    }

    /// Wait for the next phase change and re-render.
    ///
    /// Returns `None` once the store has been torn down.
    pub async fn next_frame(&mut self) -> Option<&FeedList> {
        if self.store.is_closed() {
            return None;
        }

        self.updates.changed().await.ok()?;

        if self.store.is_closed() {
            return None;
        }
        Some(self.render())
    }

    /// Wait until the current fetch attempt finishes and re-render.
    ///
    /// Returns immediately when the screen was never activated.
    pub async fn settle(&mut self) -> Option<&FeedList> {
        loop {
            if self.store.is_closed() {
                return None;
            }
            if !self.activated || self.updates.borrow().is_terminal() {
                break;
            }
            self.updates.changed().await.ok()?;
        }

        Some(self.render())
    }

    /// Tear down the screen's store; pending results are discarded
    pub fn deactivate(&mut self) {
        self.store.shutdown();
    }

    pub fn list(&self) -> &FeedList {
        &self.list
    }

    pub fn phase(&self) -> FeedPhase {
        self.store.phase()
    }

    fn reconcile(&mut self, rows: Vec<FeedRow>, busy: bool) {
        let mut previous = std::mem::take(&mut self.mounts);
        let mut changes = RowChanges::default();

        let rows: Vec<FeedRow> = rows
            .into_iter()
            .map(|mut row| {
                row.mount = match previous.remove(&row.key) {
                    Some(mount) => {
                        changes.retained.push(row.key.clone());
                        mount
                    }
                    None => {
                        self.generation += 1;
                        changes.mounted.push(row.key.clone());
                        self.generation
                    }
                };
                self.mounts.insert(row.key.clone(), row.mount);
                row
            })
            .collect();

        changes.unmounted = previous.into_keys().collect();
        changes.unmounted.sort();

        self.list = FeedList {
            busy,
            rows,
            changes,
        };
    }
}

/// Render a list to plain text
pub fn render_text(list: &FeedList) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", SCREEN_TITLE));

    if list.busy {
        buf.push_str("_Loading messages..._\n");
        return buf;
    }

    for row in &list.rows {
        buf.push_str(&render_row(row));
        buf.push('\n');
    }

    buf
}

fn render_row(row: &FeedRow) -> String {
    let avatar = if row.avatar.is_some() { "[@]" } else { "[ ]" };
    let badge = row
        .badge
        .as_ref()
        .map(|count| format!(" ({})", count))
        .unwrap_or_default();

    let mut line = format!("{} {}{}", avatar, row.name, badge);
    if !row.time.is_empty() {
        line.push_str(&format!(" | {}", row.time));
    }

    if !row.message.is_empty() {
        line.push_str(&format!("\n    {}", truncate(&row.message, 60)));
    }

    format!("{}\n", line)
}

/// Truncate a string with ellipsis, on character boundaries
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
