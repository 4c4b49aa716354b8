#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod store;

// Re-exports for public API
pub use config::{GameConfig, StoreConfig};
pub use domain::{Phase, Player, PlayerId, SessionSnapshot, TaskDeck, TurnView, Winner};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use repos::{HallOfFame, HallOfFameEntry, HALL_OF_FAME_KEY};
pub use services::{AwardOutcome, SessionController, TurnOutcome};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
