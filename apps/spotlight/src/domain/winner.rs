//! Final ranking and winner.

use serde::Serialize;

use crate::domain::rules::WINNER_FALLBACK_NAME;
use crate::domain::state::Player;

/// Name and final score of the session winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub name: String,
    pub points: u32,
}

impl Winner {
    /// Award banner, e.g. `BO CELEBRITIES`.
    pub fn title(&self) -> String {
        let name = if self.name.trim().is_empty() {
            WINNER_FALLBACK_NAME
        } else {
            self.name.as_str()
        };
        format!("{} CELEBRITIES", name.to_uppercase())
    }

    /// Text handed to the platform share sheet.
    pub fn share_message(&self) -> String {
        format!(
            "{} CELEBRITIES — winner of the Arena of the Shining Star!",
            self.name
        )
    }
}

/// Ranking by score, highest first. Ties keep roster order, so the player
/// registered first wins a tie.
pub fn resolve(roster: &[Player]) -> Vec<Player> {
    let mut ranking = roster.to_vec();
    // `sort_by` is stable.
    ranking.sort_by(|a, b| b.score.cmp(&a.score));
    ranking
}

/// Head of the ranking. Never fails: an empty roster yields the fallback
/// winner with zero points.
pub fn winner(roster: &[Player]) -> Winner {
    resolve(roster)
        .into_iter()
        .next()
        .map(|p| Winner {
            name: p.name,
            points: p.score,
        })
        .unwrap_or_else(|| Winner {
            name: WINNER_FALLBACK_NAME.to_string(),
            points: 0,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_state_helpers::players_with_scores;

    #[test]
    fn ties_keep_roster_order() {
        let roster = players_with_scores(&[("A", 5), ("B", 5), ("C", 3)]);
        let names: Vec<String> = resolve(&roster).into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn higher_scores_rank_first() {
        let roster = players_with_scores(&[("A", 1), ("B", 9), ("C", 4)]);
        let names: Vec<String> = resolve(&roster).into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["B", "C", "A"]);
        assert_eq!(
            winner(&roster),
            Winner {
                name: "B".into(),
                points: 9
            }
        );
    }

    #[test]
    fn all_zero_scores_crown_the_first_player() {
        let roster = players_with_scores(&[("A", 0), ("B", 0)]);
        assert_eq!(winner(&roster).name, "A");
    }

    #[test]
    fn empty_roster_yields_fallback_winner() {
        let w = winner(&[]);
        assert_eq!(w.name, "Star");
        assert_eq!(w.points, 0);
    }

    #[test]
    fn award_texts() {
        let w = Winner {
            name: "Bo".into(),
            points: 20,
        };
        assert_eq!(w.title(), "BO CELEBRITIES");
        assert_eq!(
            w.share_message(),
            "Bo CELEBRITIES — winner of the Arena of the Shining Star!"
        );
        let blank = Winner {
            name: " ".into(),
            points: 0,
        };
        assert_eq!(blank.title(), "STAR CELEBRITIES");
    }
}
