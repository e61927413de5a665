//! Domain entities

pub mod message;

pub use message::{MessageId, MessageRecord};
