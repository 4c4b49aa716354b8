//! Setup form: host name plus the editable list of player slots.

use crate::domain::rules::{DEFAULT_PLAYER_SLOTS, MIN_PLAYERS};
use crate::domain::state::{Player, PlayerId};

/// Host name and player slots as entered before a session starts.
///
/// The roster is only a form. `snapshot_for_game` produces the session's
/// authoritative player list; editing the form afterwards never reaches a
/// running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRoster {
    host_name: String,
    players: Vec<Player>,
}

impl Default for PlayerRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRoster {
    /// A fresh form with the default number of blank player slots.
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_PLAYER_SLOTS)
    }

    pub fn with_slots(slots: usize) -> Self {
        let mut roster = Self {
            host_name: String::new(),
            players: Vec::with_capacity(slots),
        };
        for _ in 0..slots {
            roster.add_blank_player();
        }
        roster
    }

    /// Append an unnamed player slot. There is no upper bound.
    pub fn add_blank_player(&mut self) -> PlayerId {
        let id = PlayerId::from_slot(self.players.len() as u32 + 1);
        self.players.push(Player::blank(id));
        id
    }

    /// Set the trimmed name of the player with `id`. Unknown ids are ignored;
    /// the return value tells whether a slot matched.
    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.name = name.trim().to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_host_name(&mut self, name: &str) {
        self.host_name = name.trim().to_string();
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn named_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_named()).count()
    }

    pub fn is_ready_to_start(&self) -> bool {
        !self.host_name.trim().is_empty() && self.named_count() >= MIN_PLAYERS
    }

    /// Named players only, in form order, with scores reset to zero.
    pub fn snapshot_for_game(&self) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.is_named())
            .map(|p| Player {
                id: p.id,
                name: p.name.trim().to_string(),
                score: 0,
            })
            .collect()
    }
}
