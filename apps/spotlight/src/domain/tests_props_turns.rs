//! Property tests for turn scheduling (pure domain).
//!
//! - A session of n players and R rounds has exactly n × R turns.
//! - Every player gets exactly R turns.
//! - The cursor never leaves its bounds.

use proptest::prelude::*;

use crate::domain::rng::SeededSource;
use crate::domain::rules::total_turns;
use crate::domain::state::RoundCursor;
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::turns::{advance, build_order, current_player_index};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_every_player_gets_exactly_rounds_turns(
        n in test_gens::roster_size(),
        rounds in test_gens::rounds_per_player(),
        seed in any::<u64>(),
    ) {
        let order = build_order(n, &mut SeededSource::new(seed));
        let mut cursor = RoundCursor::start();
        let mut turns_per_player = vec![0u32; n];
        let mut turns = 0usize;

        loop {
            prop_assert!(cursor.turn_index < order.len());
            prop_assert!(cursor.round_index < rounds);
            prop_assert_eq!(cursor.turns_elapsed(n), turns);

            turns_per_player[current_player_index(&order, cursor)] += 1;
            turns += 1;

            let step = advance(&order, cursor, rounds);
            if step.session_complete {
                prop_assert_eq!(step.cursor, cursor);
                break;
            }
            cursor = step.cursor;
            prop_assert!(turns <= total_turns(n, rounds), "ran past the turn budget");
        }

        prop_assert_eq!(turns, total_turns(n, rounds));
        prop_assert!(turns_per_player.iter().all(|&t| t == rounds));
    }

    #[test]
    fn prop_each_round_visits_players_in_the_same_order(
        n in test_gens::roster_size(),
        seed in any::<u64>(),
    ) {
        let order = build_order(n, &mut SeededSource::new(seed));
        let mut cursor = RoundCursor::start();
        let mut seen = Vec::new();
        loop {
            seen.push(current_player_index(&order, cursor));
            let step = advance(&order, cursor, 3);
            if step.session_complete {
                break;
            }
            cursor = step.cursor;
        }
        for round in seen.chunks(n) {
            prop_assert_eq!(round, order.as_slice());
        }
    }
}
