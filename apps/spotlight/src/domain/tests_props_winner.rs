//! Property tests for ranking: an independent oracle cross-checks the
//! stable descending sort.

use proptest::prelude::*;

use crate::domain::state::Player;
use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::winner::{resolve, winner};

/// Oracle: repeatedly pull the first player holding the maximum score.
fn oracle_ranking(roster: &[Player]) -> Vec<Player> {
    let mut remaining = roster.to_vec();
    let mut out = Vec::with_capacity(remaining.len());
    while let Some(max) = remaining.iter().map(|p| p.score).max() {
        let pos = remaining
            .iter()
            .position(|p| p.score == max)
            .unwrap_or_default();
        out.push(remaining.remove(pos));
    }
    out
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_ranking_matches_oracle(roster in test_gens::scored_roster()) {
        prop_assert_eq!(resolve(&roster), oracle_ranking(&roster));
    }

    #[test]
    fn prop_winner_is_ranking_head(roster in test_gens::scored_roster()) {
        let w = winner(&roster);
        match resolve(&roster).first() {
            Some(head) => {
                prop_assert_eq!(&w.name, &head.name);
                prop_assert_eq!(w.points, head.score);
                prop_assert!(roster.iter().all(|p| p.score <= w.points));
            }
            None => prop_assert_eq!(w.name.as_str(), "Star"),
        }
    }
}
