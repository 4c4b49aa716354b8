//! Controller builders and drivers shared by the session tests.

use std::sync::Arc;
use std::time::Duration;

use spotlight::domain::{RandomSource, ScriptedSource};
use spotlight::{
    GameConfig, HallOfFame, KeyValueStore, MemoryStore, Player, SessionController, TaskDeck,
    TurnOutcome,
};

/// Rules small enough to play through in a test.
pub fn quick_config(rounds: u32) -> GameConfig {
    GameConfig::default()
        .with_rounds_per_player(rounds)
        .with_award_fallback(Duration::from_secs(60))
        .with_persist_timeout(Duration::from_secs(60))
}

pub fn controller_with(
    config: GameConfig,
    store: Arc<dyn KeyValueStore>,
    rng: Box<dyn RandomSource>,
) -> SessionController {
    SessionController::with_parts(config, TaskDeck::standard(), HallOfFame::new(store), rng)
}

/// Deterministic controller: identity-derived turn order, first prompt every
/// time, in-memory Hall of Fame.
pub fn scripted_controller(rounds: u32) -> (SessionController, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let ctl = controller_with(
        quick_config(rounds),
        store.clone(),
        Box::new(ScriptedSource::zeros()),
    );
    (ctl, store)
}

/// Fill the form and start.
pub fn start(ctl: &SessionController, host: &str, names: &[&str]) {
    ctl.configure(host, names).expect("configure");
    ctl.start_game().expect("start_game");
}

/// Score every remaining turn with `points_for(player_name)` and return the
/// final ranking.
pub fn play_out(ctl: &SessionController, mut points_for: impl FnMut(&str) -> i64) -> Vec<Player> {
    loop {
        let player = ctl
            .snapshot()
            .turn()
            .map(|t| t.player.name.clone())
            .expect("session in progress");
        match ctl.record_score(points_for(&player)).expect("record_score") {
            TurnOutcome::Next(_) => {}
            TurnOutcome::Finished { ranking } => return ranking,
        }
    }
}
