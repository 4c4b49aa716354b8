//! Domain layer: pure game rules and types, no I/O.

pub mod rng;
pub mod roster;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod task_deck;
pub mod turns;
pub mod winner;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_props_turns;
#[cfg(test)]
mod tests_props_winner;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use rng::{EntropySource, RandomSource, ScriptedSource, SeededSource};
pub use roster::PlayerRoster;
pub use snapshot::{SessionSnapshot, TurnView};
pub use state::{Phase, Player, PlayerId, RoundCursor};
pub use task_deck::TaskDeck;
pub use turns::{Advance, TurnOrder};
pub use winner::Winner;
