//! Test support utilities
//!
//! Shared between the unit and integration tests of the workspace: one-time
//! logging initialization and helpers for generating unique test data.

pub mod logging;
pub mod unique_helpers;

pub use unique_helpers::{unique_name, unique_str};
