use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Serialize, Serializer};

/// Stable player identifier derived from the slot position at creation
/// time (`p1`, `p2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Identifier for the 1-based form slot `slot`.
    pub const fn from_slot(slot: u32) -> Self {
        Self(slot)
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "p{}", self.0)
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A contestant. Only ScoreBook changes `score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn blank(id: PlayerId) -> Self {
        Self {
            id,
            name: String::new(),
            score: 0,
        }
    }

    /// Whether the player has a usable (non-blank) name.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Overall session progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Host fills in the setup form.
    Setup,
    /// Players perform prompts in turn order; the host scores each one.
    InProgress,
    /// All turns played; the ranking is on display.
    Result,
    /// Winner confirmed and recorded; award sequence running.
    AwardPlaying,
    /// Award sequence finished.
    AwardDone,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::InProgress => "in_progress",
            Self::Result => "result",
            Self::AwardPlaying => "award_playing",
            Self::AwardDone => "award_done",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Position within a session: which slot of the turn order is up, in which
/// round. Both indices are 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundCursor {
    pub turn_index: usize,
    pub round_index: u32,
}

impl RoundCursor {
    pub const fn start() -> Self {
        Self {
            turn_index: 0,
            round_index: 0,
        }
    }

    /// 0-based number of turns already taken before this one.
    pub fn turns_elapsed(&self, order_len: usize) -> usize {
        (self.round_index as usize) * order_len + self.turn_index
    }
}
