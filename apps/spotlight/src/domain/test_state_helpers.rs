//! Test-only builders for session rosters.

use crate::domain::state::{Player, PlayerId};

/// Session roster with the given names, zero scores, ids `p1..`.
pub fn named_players(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Player {
            id: PlayerId::from_slot(i as u32 + 1),
            name: name.to_string(),
            score: 0,
        })
        .collect()
}

pub fn players_with_scores(entries: &[(&str, u32)]) -> Vec<Player> {
    let names: Vec<&str> = entries.iter().map(|(n, _)| *n).collect();
    named_players(&names)
        .into_iter()
        .zip(entries)
        .map(|(p, (_, score))| Player { score: *score, ..p })
        .collect()
}
