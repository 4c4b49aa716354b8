use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::rules::{
    AWARD_FALLBACK, MAX_POINTS_PER_TASK, PERSIST_TIMEOUT, ROUNDS_PER_PLAYER,
};
use crate::error::AppError;

pub const ROUNDS_VAR: &str = "SPOTLIGHT_ROUNDS_PER_PLAYER";
pub const MAX_POINTS_VAR: &str = "SPOTLIGHT_MAX_POINTS_PER_TASK";
pub const AWARD_FALLBACK_VAR: &str = "SPOTLIGHT_AWARD_FALLBACK_MS";
pub const PERSIST_TIMEOUT_VAR: &str = "SPOTLIGHT_PERSIST_TIMEOUT_MS";

/// Tunable game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rounds_per_player: u32,
    pub max_points_per_task: u32,
    /// How long the award sequence may run before it is forced to finish.
    pub award_fallback: Duration,
    /// Bound on the Hall of Fame write made when the winner is confirmed.
    pub persist_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds_per_player: ROUNDS_PER_PLAYER,
            max_points_per_task: MAX_POINTS_PER_TASK,
            award_fallback: AWARD_FALLBACK,
            persist_timeout: PERSIST_TIMEOUT,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by `SPOTLIGHT_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            rounds_per_player: parse_var(ROUNDS_VAR)?.unwrap_or(defaults.rounds_per_player),
            max_points_per_task: parse_var(MAX_POINTS_VAR)?
                .unwrap_or(defaults.max_points_per_task),
            award_fallback: parse_var::<u64>(AWARD_FALLBACK_VAR)?
                .map(Duration::from_millis)
                .unwrap_or(defaults.award_fallback),
            persist_timeout: parse_var::<u64>(PERSIST_TIMEOUT_VAR)?
                .map(Duration::from_millis)
                .unwrap_or(defaults.persist_timeout),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_rounds_per_player(mut self, rounds: u32) -> Self {
        self.rounds_per_player = rounds;
        self
    }

    pub fn with_max_points_per_task(mut self, max_points: u32) -> Self {
        self.max_points_per_task = max_points;
        self
    }

    pub fn with_award_fallback(mut self, fallback: Duration) -> Self {
        self.award_fallback = fallback;
        self
    }

    pub fn with_persist_timeout(mut self, timeout: Duration) -> Self {
        self.persist_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.rounds_per_player == 0 {
            return Err(AppError::config(format!("{ROUNDS_VAR} must be at least 1")));
        }
        if self.max_points_per_task == 0 {
            return Err(AppError::config(format!(
                "{MAX_POINTS_VAR} must be at least 1"
            )));
        }
        if self.award_fallback.is_zero() {
            return Err(AppError::config(format!(
                "{AWARD_FALLBACK_VAR} must be at least 1"
            )));
        }
        if self.persist_timeout.is_zero() {
            return Err(AppError::config(format!(
                "{PERSIST_TIMEOUT_VAR} must be at least 1"
            )));
        }
        Ok(())
    }
}

/// `Ok(None)` when unset, an error when set but unparsable.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} must be a number, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}
