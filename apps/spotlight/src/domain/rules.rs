use std::ops::RangeInclusive;
use std::time::Duration;

/// Rounds every player performs in one session.
pub const ROUNDS_PER_PLAYER: u32 = 10;
/// Highest score the host may give a single performance.
pub const MAX_POINTS_PER_TASK: u32 = 20;
/// Minimum number of named players before a session can start.
pub const MIN_PLAYERS: usize = 2;
/// Blank player slots a fresh setup form starts with.
pub const DEFAULT_PLAYER_SLOTS: usize = 2;
/// Hall of Fame retention.
pub const HALL_OF_FAME_CAP: usize = 100;
/// Award playback is forced to finish after this long.
pub const AWARD_FALLBACK: Duration = Duration::from_secs(5);
/// Longest a Hall of Fame write may hold up the award.
pub const PERSIST_TIMEOUT: Duration = Duration::from_secs(3);
/// Winner name used when there is nobody to crown.
pub const WINNER_FALLBACK_NAME: &str = "Star";

/// Points the host may award for one performance.
pub fn valid_points_range(max_points_per_task: u32) -> RangeInclusive<u32> {
    0..=max_points_per_task
}

/// Scoring turns in a complete session.
pub fn total_turns(players: usize, rounds_per_player: u32) -> usize {
    players.saturating_mul(rounds_per_player as usize)
}

/// Upper bound for any single player's final score.
pub fn max_total_score(rounds_per_player: u32, max_points_per_task: u32) -> u32 {
    rounds_per_player.saturating_mul(max_points_per_task)
}
