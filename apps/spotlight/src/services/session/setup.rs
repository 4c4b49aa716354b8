use tracing::{debug, info};

use super::{Game, SessionController};
use crate::domain::roster::PlayerRoster;
use crate::domain::rules::{total_turns, MIN_PLAYERS};
use crate::domain::snapshot::TurnView;
use crate::domain::state::{Phase, PlayerId, RoundCursor};
use crate::domain::turns::build_order;
use crate::errors::domain::DomainError;

impl SessionController {
    /// Replace the whole setup form: host name plus one slot per name.
    /// At least the default number of slots is kept so the form never
    /// shrinks below what a fresh one shows.
    pub fn configure<S: AsRef<str>>(&self, host_name: &str, names: &[S]) -> Result<(), DomainError> {
        let mut state = self.lock("configure")?;
        state.require_phase(Phase::Setup, "configure")?;

        let mut form = PlayerRoster::with_slots(0);
        form.set_host_name(host_name);
        for name in names {
            let id = form.add_blank_player();
            form.rename_player(id, name.as_ref());
        }
        while form.players().len() < MIN_PLAYERS {
            form.add_blank_player();
        }

        state.form = form;
        state.publish();
        Ok(())
    }

    pub fn set_host_name(&self, name: &str) -> Result<(), DomainError> {
        let mut state = self.lock("set_host_name")?;
        state.require_phase(Phase::Setup, "set_host_name")?;
        state.form.set_host_name(name);
        state.publish();
        Ok(())
    }

    pub fn add_blank_player(&self) -> Result<PlayerId, DomainError> {
        let mut state = self.lock("add_blank_player")?;
        state.require_phase(Phase::Setup, "add_blank_player")?;
        let id = state.form.add_blank_player();
        state.publish();
        Ok(id)
    }

    /// Rename a form slot. Unknown ids are ignored, matching the form's own
    /// contract; the flag reports whether anything changed.
    pub fn rename_player(&self, id: PlayerId, name: &str) -> Result<bool, DomainError> {
        let mut state = self.lock("rename_player")?;
        state.require_phase(Phase::Setup, "rename_player")?;
        let renamed = state.form.rename_player(id, name);
        if renamed {
            state.publish();
        }
        Ok(renamed)
    }

    pub fn is_ready_to_start(&self) -> Result<bool, DomainError> {
        let state = self.lock("is_ready_to_start")?;
        Ok(state.phase == Phase::Setup && state.form.is_ready_to_start())
    }

    /// Snapshot the form, shuffle the turn order, draw the first prompt.
    pub fn start_game(&self) -> Result<TurnView, DomainError> {
        let mut state = self.lock("start_game")?;
        state.require_phase(Phase::Setup, "start_game")?;

        if !state.form.is_ready_to_start() {
            return Err(DomainError::not_ready(format!(
                "Need a host name and at least {MIN_PLAYERS} named players (have {})",
                state.form.named_count()
            )));
        }

        let roster = state.form.snapshot_for_game();
        let order = build_order(roster.len(), &mut *state.rng);
        let prompt = self.deck.draw(&mut *state.rng).to_string();
        let game = Game {
            host_name: state.form.host_name().to_string(),
            roster,
            order,
            cursor: RoundCursor::start(),
            prompt,
        };

        info!(
            host = %game.host_name,
            players = game.roster.len(),
            rounds = state.config.rounds_per_player,
            turns = total_turns(game.roster.len(), state.config.rounds_per_player),
            "Session started"
        );
        debug!(order = ?game.order.as_slice(), "Turn order");

        state.epoch += 1;
        state.winner = None;
        state.phase = Phase::InProgress;
        let view = state.turn_view(&game);
        state.game = Some(game);
        state.publish();
        Ok(view)
    }
}
