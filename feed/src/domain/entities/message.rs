//! Message record entity
//!
//! One entry of the inbox feed as returned by the feed service. Decoding is
//! lenient: a missing or wrong-typed field decodes as `None` instead of
//! failing the whole response. Display defaults are applied by the renderer.

use serde::Deserialize;
use serde_json::Value;

/// Identifier of a message record (integer or string on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageId {
    Int(i64),
    Text(String),
}

impl MessageId {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => MessageId::Int(i),
                None => MessageId::Text(n.to_string()),
            }),
            Value::String(s) => Some(MessageId::Text(s.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageId::Int(i) => write!(f, "{}", i),
            MessageId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for MessageId {
    fn from(i: i64) -> Self {
        MessageId::Int(i)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        MessageId::Text(s.to_string())
    }
}

/// A message in the feed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct MessageRecord {
    pub id: Option<MessageId>,
    pub name: Option<String>,
    pub message: Option<String>,
    pub avatar: Option<String>,
    pub unread: Option<u64>,
    pub time: Option<String>,
}

impl From<Value> for MessageRecord {
    fn from(value: Value) -> Self {
        let Value::Object(fields) = value else {
            return MessageRecord::default();
        };

        MessageRecord {
            id: fields.get("id").and_then(MessageId::from_value),
            name: fields.get("name").and_then(text),
            message: fields.get("message").and_then(text),
            avatar: fields.get("avatar").and_then(uri),
            unread: fields.get("unread").and_then(count),
            time: fields.get("time").and_then(text),
        }
    }
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn uri(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn count(value: &Value) -> Option<u64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !n.is_finite() {
        return None;
    }

    // Negative counts mean "no badge", not an error
    Some(if n <= 0.0 { 0 } else { n.trunc() as u64 })
}
