//! Game controller - orchestrates a session over time
//!
//! The session is a pure state machine. The controller adds the parts that
//! depend on time and on collaborators:
//!
//! - After the second card of a pair is flipped it marks the session as
//!   processing and schedules a [`PendingResolution`]. The pair is compared
//!   once `resolve_delay_ms` of unpaused time has passed.
//! - A pending resolution carries the session generation it was scheduled
//!   for. `initialize` and `reset` drop it, and a resolution whose generation
//!   no longer matches is discarded instead of applied.
//! - Sound cues go to a [`SoundPlayer`]; the final result goes to a
//!   [`CompletionSink`] exactly once per completed session.
//!
//! Time is supplied by the caller through [`GameController::advance`], so the
//! controller is deterministic and needs no runtime.

use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::error::Result;
use crate::matching::evaluate_match;
use crate::session::GameSession;
use crate::snapshot::SessionSnapshot;
use crate::types::{
    CardId, Difficulty, GamePhase, GameResult, GridConfig, Intent, PairableItem, SoundEffect,
    MATCH_RESOLVE_DELAY_MS,
};

/// Receives sound cues. Must return immediately.
///
/// Players without a mute switch keep the default `is_enabled`/`set_enabled`.
pub trait SoundPlayer {
    fn play(&mut self, effect: SoundEffect);

    fn is_enabled(&self) -> bool {
        true
    }

    fn set_enabled(&mut self, _enabled: bool) {}
}

impl<F: FnMut(SoundEffect)> SoundPlayer for F {
    fn play(&mut self, effect: SoundEffect) {
        self(effect)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSound;

impl SoundPlayer for SilentSound {
    fn play(&mut self, _effect: SoundEffect) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Receives the result of a completed game.
pub trait CompletionSink {
    fn complete(&mut self, result: GameResult);
}

impl<F: FnMut(GameResult)> CompletionSink for F {
    fn complete(&mut self, result: GameResult) {
        self(result)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCompletion;

impl CompletionSink for NoopCompletion {
    fn complete(&mut self, _result: GameResult) {}
}

/// A two-card comparison waiting for its delay to run out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingResolution {
    pub generation: u64,
    pub first: CardId,
    pub second: CardId,
    pub remaining_ms: u32,
}

pub struct GameController<P = SilentSound, C = NoopCompletion> {
    session: GameSession,
    catalog: Vec<PairableItem>,
    rng: StdRng,
    resolve_delay_ms: u32,
    pending: Option<PendingResolution>,
    /// Generation whose completion was already reported.
    reported_generation: Option<u64>,
    sound: P,
    completion: C,
}

impl<P: SoundPlayer, C: CompletionSink> GameController<P, C> {
    /// Create a controller with no deck dealt yet.
    pub fn new(catalog: Vec<PairableItem>, rng: StdRng, sound: P, completion: C) -> Self {
        Self {
            session: GameSession::new(),
            catalog,
            rng,
            resolve_delay_ms: MATCH_RESOLVE_DELAY_MS,
            pending: None,
            reported_generation: None,
            sound,
            completion,
        }
    }

    pub fn with_resolve_delay(mut self, delay_ms: u32) -> Self {
        self.resolve_delay_ms = delay_ms;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = self.session.snapshot();
        snap.sound_enabled = self.sound.is_enabled();
        snap
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound.is_enabled()
    }

    pub fn catalog(&self) -> &[PairableItem] {
        &self.catalog
    }

    pub fn resolve_delay_ms(&self) -> u32 {
        self.resolve_delay_ms
    }

    pub fn pending_resolution(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }

    pub fn has_pending_resolution(&self) -> bool {
        self.pending.is_some()
    }

    pub fn initialize(&mut self, difficulty: Difficulty) -> Result<()> {
        self.initialize_grid(&difficulty.grid())
    }

    /// Deal a fresh deck. Any pending resolution is dropped.
    pub fn initialize_grid(&mut self, grid: &GridConfig) -> Result<()> {
        self.session.initialize(&self.catalog, grid, &mut self.rng)?;
        self.pending = None;
        self.sound.play(SoundEffect::ButtonPress);
        Ok(())
    }

    /// Handle a press on a card. Returns false when the press is rejected.
    pub fn press_card(&mut self, card_id: &CardId) -> bool {
        if !self.session.can_flip(card_id) {
            trace!(card = %card_id, "press ignored");
            return false;
        }

        self.sound.play(SoundEffect::CardFlip);
        if !self.session.flip(card_id) {
            return false;
        }

        if let [first, second] = self.session.flipped() {
            let pending = PendingResolution {
                generation: self.session.generation(),
                first: first.clone(),
                second: second.clone(),
                remaining_ms: self.resolve_delay_ms,
            };
            self.session.set_processing(true);
            debug!(first = %pending.first, second = %pending.second, "pair scheduled");

            if pending.remaining_ms == 0 {
                self.resolve(pending);
            } else {
                self.pending = Some(pending);
            }
        }

        true
    }

    /// Advance game time by `elapsed_ms`.
    ///
    /// Drives the session timer and the pending resolution. Both are frozen
    /// while the game is paused. Returns true when visible state changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.session.phase() == GamePhase::Paused {
            return false;
        }

        let mut changed = self.session.tick(elapsed_ms);

        let due = match self.pending.as_mut() {
            Some(pending) => {
                pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
                pending.remaining_ms == 0
            }
            None => false,
        };

        if due {
            if let Some(pending) = self.pending.take() {
                changed |= self.resolve(pending);
            }
        }

        changed
    }

    /// Resolve the pending pair immediately, ignoring the remaining delay.
    pub fn resolve_now(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => self.resolve(pending),
            None => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        let paused = self.session.pause();
        if paused {
            self.sound.play(SoundEffect::ButtonPress);
        }
        paused
    }

    pub fn resume(&mut self) -> bool {
        let resumed = self.session.resume();
        if resumed {
            self.sound.play(SoundEffect::ButtonPress);
        }
        resumed
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.session.phase() {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Start the same deck over. Any pending resolution is dropped.
    pub fn reset(&mut self) {
        self.session.reset();
        self.pending = None;
        self.sound.play(SoundEffect::ButtonPress);
    }

    /// Flip the sound player's mute switch. Returns the new setting.
    pub fn toggle_sound(&mut self) -> bool {
        let enabled = !self.sound.is_enabled();
        self.sound.set_enabled(enabled);
        self.sound.is_enabled()
    }

    /// Dispatch a UI intent. Only `Initialize` can fail.
    pub fn handle(&mut self, intent: Intent) -> Result<bool> {
        let changed = match intent {
            Intent::Initialize(difficulty) => {
                self.initialize(difficulty)?;
                true
            }
            Intent::PressCard(card_id) => self.press_card(&card_id),
            Intent::Pause => self.pause(),
            Intent::Resume => self.resume(),
            Intent::TogglePause => self.toggle_pause(),
            Intent::Reset => {
                self.reset();
                true
            }
            Intent::ToggleSound => {
                let before = self.sound.is_enabled();
                self.toggle_sound() != before
            }
        };
        Ok(changed)
    }

    fn resolve(&mut self, pending: PendingResolution) -> bool {
        if pending.generation != self.session.generation() {
            debug!(
                scheduled = pending.generation,
                current = self.session.generation(),
                "stale resolution discarded"
            );
            return false;
        }

        let outcome = evaluate_match(&pending.first, &pending.second, self.session.cards());
        if outcome.is_match {
            self.sound.play(SoundEffect::Match);
            self.session.record_match(&outcome.matched_ids);
        } else {
            self.sound.play(SoundEffect::Mismatch);
            self.session.record_mismatch();
        }
        self.session.set_processing(false);

        self.report_completion();
        true
    }

    fn report_completion(&mut self) {
        let generation = self.session.generation();
        if self.session.phase() != GamePhase::Completed
            || self.reported_generation == Some(generation)
        {
            return;
        }

        self.reported_generation = Some(generation);
        let result = self.session.result();
        info!(
            score = result.score,
            elapsed = result.elapsed_seconds,
            mistakes = result.mistakes,
            "game complete"
        );
        self.sound.play(SoundEffect::GameComplete);
        self.completion.complete(result);
    }
}
