//! Round-robin turn scheduling.

use crate::domain::rng::RandomSource;
use crate::domain::state::RoundCursor;

/// Permutation of roster indices, fixed for a whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder(Vec<usize>);

impl TurnOrder {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of moving past the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Next cursor, or the unchanged cursor when the session is complete.
    pub cursor: RoundCursor,
    pub session_complete: bool,
}

/// Fisher-Yates shuffle of `0..roster_size`.
pub fn build_order(roster_size: usize, rng: &mut dyn RandomSource) -> TurnOrder {
    let mut order: Vec<usize> = (0..roster_size).collect();
    for i in (1..order.len()).rev() {
        let j = rng.next_index(i + 1);
        order.swap(i, j);
    }
    TurnOrder(order)
}

/// Roster index of the player whose turn it is.
#[inline]
pub fn current_player_index(order: &TurnOrder, cursor: RoundCursor) -> usize {
    order.0[cursor.turn_index]
}

/// Step to the next turn; wrapping past the end of the order starts a new
/// round. Completing round `rounds_per_player - 1` ends the session.
pub fn advance(order: &TurnOrder, cursor: RoundCursor, rounds_per_player: u32) -> Advance {
    debug_assert!(!order.is_empty(), "turn order must not be empty");
    let next_turn = (cursor.turn_index + 1) % order.len();
    let next_round = if next_turn == 0 {
        cursor.round_index + 1
    } else {
        cursor.round_index
    };

    if next_round >= rounds_per_player {
        return Advance {
            cursor,
            session_complete: true,
        };
    }

    Advance {
        cursor: RoundCursor {
            turn_index: next_turn,
            round_index: next_round,
        },
        session_complete: false,
    }
}
