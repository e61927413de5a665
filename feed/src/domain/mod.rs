//! Domain layer
//!
//! Contains the feed's data model and the traits it depends on.
//! - `entities`: the message record
//! - `ports`: trait definitions for the feed source and diagnostics

pub mod entities;
pub mod ports;
