//! Repositories over the key-value store.

pub mod hall_of_fame;

pub use hall_of_fame::{HallOfFame, HallOfFameEntry, HALL_OF_FAME_KEY};
