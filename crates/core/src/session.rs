//! Game session module - the authoritative mutable game state
//!
//! A [`GameSession`] owns the dealt cards, the face-up selections, the matched
//! set, counters, the timer and the phase. Every mutation goes through the
//! transition methods below; presses that arrive at the wrong moment are
//! rejected without touching state.
//!
//! | From | Event | To |
//! |------|-------|----|
//! | any | `initialize` | Waiting |
//! | Waiting | `flip` | Playing |
//! | Playing | `flip` (second card) | Playing |
//! | Playing | `pause` | Paused |
//! | Paused | `resume` | Playing |
//! | Playing | `record_match` | Playing or Completed |
//! | Playing | `record_mismatch` | Playing |
//! | any | `reset` | Waiting |
//!
//! Timing lives outside the session: the controller decides when a pair is
//! resolved. The session only counts elapsed seconds from [`GameSession::tick`].

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::{debug, trace};

use crate::deck::build_deck;
use crate::error::Result;
use crate::scoring::calculate_score;
use crate::types::{
    Card, CardId, GamePhase, GameResult, GridConfig, PairableItem, TIMER_INTERVAL_MS,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSession {
    cards: Vec<Card>,
    grid: Option<GridConfig>,
    /// Face-up, unresolved cards in flip order.
    flipped: ArrayVec<CardId, 2>,
    /// Permanently face-up cards in match order.
    matched: Vec<CardId>,
    first_selection: Option<CardId>,
    second_selection: Option<CardId>,
    mistakes: u32,
    elapsed_seconds: u32,
    /// Milliseconds accumulated toward the next elapsed second.
    timer_ms: u32,
    phase: GamePhase,
    processing: bool,
    move_count: u32,
    /// Bumped by `initialize` and `reset`; deferred work tagged with an older
    /// generation must not touch this session.
    generation: u64,
}

impl GameSession {
    /// Empty session with no cards, waiting for `initialize`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal a new deck and replace the whole session.
    ///
    /// On error the current session is left untouched.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        catalog: &[PairableItem],
        grid: &GridConfig,
        rng: &mut R,
    ) -> Result<()> {
        let cards = build_deck(catalog, grid, rng)?;
        let generation = self.generation.wrapping_add(1);

        *self = Self {
            cards,
            grid: Some(*grid),
            generation,
            ..Self::new()
        };

        debug!(
            generation,
            cards = self.cards.len(),
            rows = grid.rows,
            cols = grid.cols,
            "session initialized"
        );
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == card_id)
    }

    pub fn grid(&self) -> Option<GridConfig> {
        self.grid
    }

    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    pub fn matched(&self) -> &[CardId] {
        &self.matched
    }

    pub fn first_selection(&self) -> Option<&CardId> {
        self.first_selection.as_ref()
    }

    pub fn second_selection(&self) -> Option<&CardId> {
        self.second_selection.as_ref()
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_flipped(&self, card_id: &CardId) -> bool {
        self.flipped.contains(card_id)
    }

    pub fn is_matched(&self, card_id: &CardId) -> bool {
        self.matched.contains(card_id)
    }

    /// All cards matched, and there is at least one card.
    pub fn is_game_won(&self) -> bool {
        !self.cards.is_empty() && self.matched.len() == self.cards.len()
    }

    pub fn score(&self) -> u32 {
        calculate_score(self.mistakes, self.elapsed_seconds)
    }

    pub fn result(&self) -> GameResult {
        GameResult {
            score: self.score(),
            elapsed_seconds: self.elapsed_seconds,
            mistakes: self.mistakes,
        }
    }

    /// Whether a press on `card_id` would be honored right now.
    pub fn can_flip(&self, card_id: &CardId) -> bool {
        !self.processing
            && !self.is_flipped(card_id)
            && !self.is_matched(card_id)
            && self.flipped.len() < 2
            && !matches!(self.phase, GamePhase::Paused | GamePhase::Completed)
            && self.card(card_id).is_some()
    }

    /// Turn a card face-up. Returns false (and changes nothing) when
    /// [`can_flip`](Self::can_flip) rejects the card.
    pub fn flip(&mut self, card_id: &CardId) -> bool {
        if !self.can_flip(card_id) {
            trace!(card = %card_id, "flip rejected");
            return false;
        }

        let was_first = self.flipped.is_empty();
        if self.flipped.try_push(card_id.clone()).is_err() {
            return false;
        }

        if was_first {
            self.first_selection = Some(card_id.clone());
            self.second_selection = None;
        } else {
            self.second_selection = Some(card_id.clone());
            self.move_count += 1;
        }

        if self.phase == GamePhase::Waiting {
            self.phase = GamePhase::Playing;
            debug!(generation = self.generation, "game started");
        }

        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.phase = GamePhase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Playing;
        true
    }

    pub fn set_processing(&mut self, processing: bool) {
        self.processing = processing;
    }

    /// Lock `ids` in as matched and clear the face-up selection.
    ///
    /// Ids that are not cards of this session, or are already matched, are
    /// skipped. Matching the last card completes the game.
    pub fn record_match(&mut self, ids: &[CardId]) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        for id in ids {
            if self.card(id).is_some() && !self.is_matched(id) {
                self.matched.push(id.clone());
            }
        }
        self.clear_selection();

        if self.is_game_won() {
            self.phase = GamePhase::Completed;
            debug!(
                generation = self.generation,
                mistakes = self.mistakes,
                elapsed = self.elapsed_seconds,
                "all pairs matched"
            );
        }
        true
    }

    /// Count a mistake and turn the face-up cards back down.
    pub fn record_mismatch(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.mistakes += 1;
        self.clear_selection();
        true
    }

    /// Start over with the same deck order.
    pub fn reset(&mut self) {
        let cards = std::mem::take(&mut self.cards);
        let generation = self.generation.wrapping_add(1);

        *self = Self {
            cards,
            grid: self.grid,
            generation,
            ..Self::new()
        };
        debug!(generation, "session reset");
    }

    /// Advance the game clock. Counts only while Playing.
    ///
    /// Returns true when `elapsed_seconds` changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        self.timer_ms = self.timer_ms.saturating_add(elapsed_ms);
        let whole_seconds = self.timer_ms / TIMER_INTERVAL_MS;
        self.timer_ms %= TIMER_INTERVAL_MS;
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(whole_seconds);

        whole_seconds > 0
    }

    fn clear_selection(&mut self) {
        self.flipped.clear();
        self.first_selection = None;
        self.second_selection = None;
    }
}
