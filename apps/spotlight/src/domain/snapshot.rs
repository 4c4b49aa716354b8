//! Public snapshot API: what the presentation layer renders for each phase.

use serde::Serialize;

use crate::domain::state::{Phase, Player};
use crate::domain::winner::Winner;

/// The turn currently on stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnView {
    pub player: Player,
    pub prompt: String,
    /// 1-based round number.
    pub round_no: u32,
    pub rounds_total: u32,
    /// 1-based turn number across the whole session.
    pub turn_no: u32,
    pub turns_total: u32,
    pub max_points: u32,
}

/// Internally tagged union of phase-specific views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionSnapshot {
    Setup {
        host_name: String,
        players: Vec<Player>,
        ready: bool,
    },
    InProgress(TurnView),
    Result {
        ranking: Vec<Player>,
    },
    AwardPlaying {
        winner: Winner,
    },
    AwardDone {
        winner: Winner,
    },
}

impl SessionSnapshot {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Setup { .. } => Phase::Setup,
            Self::InProgress(_) => Phase::InProgress,
            Self::Result { .. } => Phase::Result,
            Self::AwardPlaying { .. } => Phase::AwardPlaying,
            Self::AwardDone { .. } => Phase::AwardDone,
        }
    }

    pub fn turn(&self) -> Option<&TurnView> {
        match self {
            Self::InProgress(view) => Some(view),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<&Winner> {
        match self {
            Self::AwardPlaying { winner } | Self::AwardDone { winner } => Some(winner),
            _ => None,
        }
    }
}
