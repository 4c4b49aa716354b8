use crate::domain::rules::valid_points_range;
use crate::domain::state::Player;
use crate::errors::domain::{DomainError, ValidationKind};

/// Check `points` against `0..=max_points_per_task`.
pub fn validate_points(points: i64, max_points_per_task: u32) -> Result<u32, DomainError> {
    let range = valid_points_range(max_points_per_task);
    match u32::try_from(points) {
        Ok(p) if range.contains(&p) => Ok(p),
        _ => Err(DomainError::invalid_score(format!(
            "Points must be in range {range:?}, got {points}"
        ))),
    }
}

/// Add `points` to the player at `player_index`, returning the new roster.
/// The input roster is never modified, so a rejected award leaves no trace.
pub fn award(
    roster: &[Player],
    player_index: usize,
    points: i64,
    max_points_per_task: u32,
) -> Result<Vec<Player>, DomainError> {
    let points = validate_points(points, max_points_per_task)?;
    if player_index >= roster.len() {
        return Err(DomainError::validation(
            ValidationKind::UnknownPlayer,
            format!(
                "No player at index {player_index} (roster has {})",
                roster.len()
            ),
        ));
    }

    let mut next = roster.to_vec();
    let player = &mut next[player_index];
    player.score = player.score.saturating_add(points);
    Ok(next)
}

/// A skipped turn scores zero.
pub fn skip(roster: &[Player], player_index: usize) -> Result<Vec<Player>, DomainError> {
    award(roster, player_index, 0, 0)
}
