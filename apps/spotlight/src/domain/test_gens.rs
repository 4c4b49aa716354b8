//! Proptest generators for domain property tests.

use proptest::prelude::*;

use crate::domain::state::Player;
use crate::domain::test_state_helpers::players_with_scores;

/// Roster sizes a real party would use, plus some headroom.
pub fn roster_size() -> impl Strategy<Value = usize> {
    2usize..=9
}

pub fn rounds_per_player() -> impl Strategy<Value = u32> {
    1u32..=10
}

/// Scores with plenty of collisions so tie-handling gets exercised.
pub fn scored_roster() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(0u32..=6, 0..=8).prop_map(|scores| {
        let names: Vec<String> = (0..scores.len()).map(|i| format!("P{i}")).collect();
        let entries: Vec<(&str, u32)> = names
            .iter()
            .map(String::as_str)
            .zip(scores.iter().copied())
            .collect();
        players_with_scores(&entries)
    })
}

/// Host inputs for a whole session, including out-of-range ones.
pub fn point_inputs(len: usize, max_points: u32) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-5i64..=(max_points as i64 + 5), len)
}
