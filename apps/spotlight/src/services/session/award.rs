use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{AwardOutcome, SessionController, SessionState};
use crate::domain::roster::PlayerRoster;
use crate::domain::state::Phase;
use crate::domain::winner::winner;
use crate::errors::domain::DomainError;

impl SessionController {
    /// Record the winner in the Hall of Fame and start the award.
    ///
    /// A persistence failure does not block the award: it is logged and
    /// handed back as `warning`, and the session still moves to
    /// `AwardPlaying`. A write that outlasts `persist_timeout` is abandoned
    /// and reported the same way.
    pub async fn confirm_winner(&self) -> Result<AwardOutcome, DomainError> {
        let mut state = self.lock("confirm_winner")?;
        state.require_phase(Phase::Result, "confirm_winner")?;

        let champion = winner(&state.require_game("confirm_winner")?.roster);
        let bound = state.config.persist_timeout;

        let append = self.hall_of_fame.append(&champion.name, champion.points);
        let saved = match tokio::time::timeout(bound, append).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::persistence(format!(
                "Hall of Fame write timed out after {}ms",
                bound.as_millis()
            ))),
        };

        let (entry, warning) = match saved {
            Ok(entry) => (Some(entry), None),
            Err(e) => {
                warn!(error = %e, winner = %champion.name, "Failed to record Hall of Fame entry");
                (None, Some(e))
            }
        };

        state.phase = Phase::AwardPlaying;
        state.winner = Some(champion.clone());
        self.arm_award_timer(&mut state);
        info!(winner = %champion.name, points = champion.points, "Award started");
        state.publish();

        Ok(AwardOutcome {
            winner: champion,
            entry,
            warning,
        })
    }

    /// The award animation reported completion. Returns `false` when there
    /// was nothing to finish (the fallback timer got there first, or no
    /// award is playing).
    pub fn award_playback_finished(&self) -> Result<bool, DomainError> {
        let mut state = self.lock("award_playback_finished")?;
        if state.phase != Phase::AwardPlaying {
            debug!(phase = %state.phase, "Ignoring award completion outside AwardPlaying");
            return Ok(false);
        }
        state.cancel_award_timer();
        state.phase = Phase::AwardDone;
        info!("Award finished");
        state.publish();
        Ok(true)
    }

    /// Discard everything and return to an empty setup form. Legal from any
    /// phase; a pending award timer is cancelled.
    pub fn reset(&self) -> Result<(), DomainError> {
        let mut state = self.lock("reset")?;
        state.cancel_award_timer();
        state.epoch += 1;
        let from = state.phase;
        state.phase = Phase::Setup;
        state.form = PlayerRoster::new();
        state.game = None;
        state.winner = None;
        info!(from = %from, "Session reset");
        state.publish();
        Ok(())
    }

    fn arm_award_timer(&self, state: &mut SessionState) {
        state.cancel_award_timer();
        let inner = Arc::downgrade(&self.inner);
        let epoch = state.epoch;
        let delay = state.config.award_fallback;

        state.award_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let mut state = inner.lock().await;
            if state.epoch != epoch || state.phase != Phase::AwardPlaying {
                debug!(epoch, current = state.epoch, "Stale award timer ignored");
                return;
            }
            // Dropping our own handle; aborting it here would cancel this task.
            state.award_timer.take();
            state.phase = Phase::AwardDone;
            info!(after_ms = delay.as_millis() as u64, "Award finished by fallback timer");
            state.publish();
        }));
    }
}
