//! Property tests for the score book.
//!
//! For any sequence of host inputs, a player's score equals the sum of the
//! accepted points granted to them and stays within
//! `0..=rounds × max_points`.

use proptest::prelude::*;

use crate::domain::rng::SeededSource;
use crate::domain::rules::{max_total_score, total_turns, MAX_POINTS_PER_TASK};
use crate::domain::scoring::award;
use crate::domain::state::RoundCursor;
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::named_players;
use crate::domain::turns::{advance, build_order, current_player_index};

const ROUNDS: u32 = 3;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_scores_are_sums_of_accepted_points(
        (n, inputs) in test_gens::roster_size().prop_flat_map(|n| {
            (Just(n), test_gens::point_inputs(total_turns(n, ROUNDS) * 2, MAX_POINTS_PER_TASK))
        }),
        seed in any::<u64>(),
    ) {
        let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut roster = named_players(&name_refs);
        let order = build_order(n, &mut SeededSource::new(seed));
        let mut expected = vec![0u32; n];
        let mut cursor = RoundCursor::start();
        let mut inputs = inputs.into_iter();
        let mut complete = false;

        while !complete {
            let Some(points) = inputs.next() else { break };
            let idx = current_player_index(&order, cursor);
            match award(&roster, idx, points, MAX_POINTS_PER_TASK) {
                Ok(next) => {
                    roster = next;
                    expected[idx] += points as u32;
                    let step = advance(&order, cursor, ROUNDS);
                    complete = step.session_complete;
                    cursor = step.cursor;
                }
                Err(_) => {
                    prop_assert!(!(0..=MAX_POINTS_PER_TASK as i64).contains(&points));
                }
            }
        }

        let cap = max_total_score(ROUNDS, MAX_POINTS_PER_TASK);
        for (player, want) in roster.iter().zip(&expected) {
            prop_assert_eq!(player.score, *want);
            prop_assert!(player.score <= cap);
        }
    }
}
