//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks are hand-written so tests control exactly what a fetch returns
//! and when it completes.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
