//! Session controller: the state machine the presentation layer drives.
//!
//! ```text
//! Setup --start_game--> InProgress --record_score/skip_turn (last turn)--> Result
//! Result --confirm_winner--> AwardPlaying --playback finished | fallback timer--> AwardDone
//! any --reset--> Setup
//! ```
//!
//! Every transition takes the session lock without waiting. A call that
//! overlaps one still in flight (for example a second tap while the winner
//! is being persisted) is rejected with `Busy` instead of interleaving.

mod award;
mod setup;
mod turns;

use std::sync::Arc;

use tokio::sync::{watch, Mutex, MutexGuard};
use tokio::task::JoinHandle;

use crate::config::GameConfig;
use crate::domain::rng::{EntropySource, RandomSource};
use crate::domain::roster::PlayerRoster;
use crate::domain::rules::total_turns;
use crate::domain::snapshot::{SessionSnapshot, TurnView};
use crate::domain::state::{Phase, Player, RoundCursor};
use crate::domain::task_deck::TaskDeck;
use crate::domain::turns::{current_player_index, TurnOrder};
use crate::domain::winner::{resolve, Winner};
use crate::errors::domain::DomainError;
use crate::repos::hall_of_fame::{HallOfFame, HallOfFameEntry};

/// What happened after a turn was scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Next turn is up.
    Next(TurnView),
    /// That was the last turn; the session is in `Result`.
    Finished { ranking: Vec<Player> },
}

/// Result of confirming the winner.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardOutcome {
    pub winner: Winner,
    /// The Hall of Fame record, when persisting succeeded.
    pub entry: Option<HallOfFameEntry>,
    /// Non-fatal persistence failure. The session moved on regardless.
    pub warning: Option<DomainError>,
}

/// Live game data, present from `InProgress` until reset.
#[derive(Debug, Clone)]
struct Game {
    host_name: String,
    roster: Vec<Player>,
    order: TurnOrder,
    cursor: RoundCursor,
    prompt: String,
}

struct SessionState {
    config: GameConfig,
    phase: Phase,
    form: PlayerRoster,
    game: Option<Game>,
    winner: Option<Winner>,
    /// Bumped whenever a session starts or is discarded; scheduled work
    /// carries the epoch it was armed in and does nothing once it changed.
    epoch: u64,
    award_timer: Option<JoinHandle<()>>,
    rng: Box<dyn RandomSource>,
    view: watch::Sender<SessionSnapshot>,
}

impl SessionState {
    fn require_game(&self, ctx: &'static str) -> Result<&Game, DomainError> {
        self.game.as_ref().ok_or_else(|| {
            DomainError::phase_mismatch(format!("Invariant violated: no live game ({ctx})"))
        })
    }

    fn require_phase(&self, expected: Phase, op: &'static str) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DomainError::phase_mismatch(format!(
                "{op} requires phase {expected}, current phase is {}",
                self.phase
            )))
        }
    }

    fn cancel_award_timer(&mut self) {
        if let Some(timer) = self.award_timer.take() {
            timer.abort();
        }
    }

    fn turn_view(&self, game: &Game) -> TurnView {
        let order_len = game.order.len();
        let player = game.roster[current_player_index(&game.order, game.cursor)].clone();
        TurnView {
            player,
            prompt: game.prompt.clone(),
            round_no: game.cursor.round_index + 1,
            rounds_total: self.config.rounds_per_player,
            turn_no: game.cursor.turns_elapsed(order_len) as u32 + 1,
            turns_total: total_turns(order_len, self.config.rounds_per_player) as u32,
            max_points: self.config.max_points_per_task,
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        let winner = || self.winner.clone().unwrap_or_else(|| Winner {
            name: String::new(),
            points: 0,
        });
        match (self.phase, self.game.as_ref()) {
            (Phase::InProgress, Some(game)) => SessionSnapshot::InProgress(self.turn_view(game)),
            (Phase::Result, Some(game)) => SessionSnapshot::Result {
                ranking: resolve(&game.roster),
            },
            (Phase::AwardPlaying, _) => SessionSnapshot::AwardPlaying { winner: winner() },
            (Phase::AwardDone, _) => SessionSnapshot::AwardDone { winner: winner() },
            _ => SessionSnapshot::Setup {
                host_name: self.form.host_name().to_string(),
                players: self.form.players().to_vec(),
                ready: self.form.is_ready_to_start(),
            },
        }
    }

    /// Push the current view to subscribers.
    fn publish(&self) {
        self.view.send_replace(self.snapshot());
    }
}

/// Drives one party-game session at a time.
///
/// Cheap to share behind an `Arc`; all operations take `&self`.
pub struct SessionController {
    inner: Arc<Mutex<SessionState>>,
    view: watch::Receiver<SessionSnapshot>,
    hall_of_fame: HallOfFame,
    deck: TaskDeck,
}

impl SessionController {
    /// Controller with the standard prompt catalog and OS entropy.
    pub fn new(config: GameConfig, hall_of_fame: HallOfFame) -> Self {
        Self::with_parts(
            config,
            TaskDeck::standard(),
            hall_of_fame,
            Box::new(EntropySource::new()),
        )
    }

    pub fn with_parts(
        config: GameConfig,
        deck: TaskDeck,
        hall_of_fame: HallOfFame,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        let form = PlayerRoster::new();
        let initial = SessionSnapshot::Setup {
            host_name: String::new(),
            players: form.players().to_vec(),
            ready: false,
        };
        let (tx, rx) = watch::channel(initial);
        let state = SessionState {
            config,
            phase: Phase::Setup,
            form,
            game: None,
            winner: None,
            epoch: 0,
            award_timer: None,
            rng,
            view: tx,
        };
        Self {
            inner: Arc::new(Mutex::new(state)),
            view: rx,
            hall_of_fame,
            deck,
        }
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    /// Latest published view.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.view.borrow().clone()
    }

    pub fn phase(&self) -> Phase {
        self.view.borrow().phase()
    }

    /// Receiver that sees every published view, including transitions made
    /// by the award fallback timer.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.view.clone()
    }

    fn lock(&self, op: &'static str) -> Result<MutexGuard<'_, SessionState>, DomainError> {
        self.inner
            .try_lock()
            .map_err(|_| DomainError::busy(format!("{op} rejected: another call is in progress")))
    }
}
