//! Test fixtures
//!
//! Factory functions for creating message records with sensible defaults.

use crate::domain::entities::{MessageId, MessageRecord};

/// Create a fully populated record
pub fn test_record(id: i64, name: &str) -> MessageRecord {
    MessageRecord {
        id: Some(MessageId::Int(id)),
        name: Some(name.to_string()),
        message: Some(format!("Hello from {}", name)),
        avatar: Some(format!("http://x/{}.png", id)),
        unread: Some(1),
        time: Some("09:00".to_string()),
    }
}

/// Create `count` records with ids 1..=count
pub fn test_records(count: i64) -> Vec<MessageRecord> {
    (1..=count)
        .map(|id| test_record(id, &format!("sender-{}", id)))
        .collect()
}

/// Create a record carrying only an id
pub fn bare_record(id: i64) -> MessageRecord {
    MessageRecord {
        id: Some(MessageId::Int(id)),
        ..Default::default()
    }
}
