use tracing::{debug, info};

use super::{SessionController, TurnOutcome};
use crate::domain::scoring::{award, skip};
use crate::domain::state::{Phase, Player};
use crate::domain::turns::{advance, current_player_index};
use crate::domain::winner::resolve;
use crate::errors::domain::DomainError;

impl SessionController {
    /// Score the current performance and move to the next turn.
    ///
    /// Invalid points are rejected before anything changes: the same player
    /// keeps the stage with the same prompt.
    pub fn record_score(&self, points: i64) -> Result<TurnOutcome, DomainError> {
        self.play_turn("record_score", |roster, player_index, max_points| {
            award(roster, player_index, points, max_points)
        })
    }

    /// Pass on the current prompt; the player scores zero for it.
    pub fn skip_turn(&self) -> Result<TurnOutcome, DomainError> {
        self.play_turn("skip_turn", |roster, player_index, _| skip(roster, player_index))
    }

    /// Apply `score` to the player on stage, then advance the schedule.
    fn play_turn(
        &self,
        op: &'static str,
        score: impl FnOnce(&[Player], usize, u32) -> Result<Vec<Player>, DomainError>,
    ) -> Result<TurnOutcome, DomainError> {
        let mut state = self.lock(op)?;
        state.require_phase(Phase::InProgress, op)?;

        let max_points = state.config.max_points_per_task;
        let rounds = state.config.rounds_per_player;
        let game = state.require_game(op)?;
        let player_index = current_player_index(&game.order, game.cursor);
        let roster = score(&game.roster, player_index, max_points)?;
        let step = advance(&game.order, game.cursor, rounds);

        debug!(
            op,
            player = %roster[player_index].name,
            points = roster[player_index].score - game.roster[player_index].score,
            total = roster[player_index].score,
            round = game.cursor.round_index + 1,
            "Turn scored"
        );

        let next_prompt = if step.session_complete {
            None
        } else {
            Some(self.deck.draw(&mut *state.rng).to_string())
        };

        let Some(game) = state.game.as_mut() else {
            return Err(DomainError::phase_mismatch(format!(
                "Invariant violated: no live game ({op})"
            )));
        };
        game.roster = roster;
        game.cursor = step.cursor;
        if let Some(prompt) = next_prompt {
            game.prompt = prompt;
        }

        let outcome = if step.session_complete {
            let ranking = resolve(&state.require_game(op)?.roster);
            state.phase = Phase::Result;
            info!(
                leader = ranking.first().map(|p| p.name.as_str()).unwrap_or_default(),
                "All turns played"
            );
            TurnOutcome::Finished { ranking }
        } else {
            let game = state.require_game(op)?;
            TurnOutcome::Next(state.turn_view(game))
        };
        state.publish();
        Ok(outcome)
    }
}
