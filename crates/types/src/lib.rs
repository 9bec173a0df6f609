//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no game logic attached, making them usable
//! in any context (core state machine, async runtime, terminal rendering).
//!
//! # Grid Tiers
//!
//! | Difficulty | Rows | Cols | Cards | Pairs |
//! |------------|------|------|-------|-------|
//! | Easy       | 2    | 3    | 6     | 3     |
//! | Medium     | 4    | 4    | 16    | 8     |
//! | Hard       | 4    | 5    | 20    | 10    |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_RESOLVE_DELAY_MS` | 1000 | Both cards stay face-up before a pair resolves |
//! | `TIMER_INTERVAL_MS` | 1000 | One elapsed second |
//! | `RUNTIME_TICK_MS` | 50 | Real-time driver tick |
//!
//! # Scoring
//!
//! `score = max(BASE_SCORE - mistakes * MISTAKE_PENALTY - seconds * SECOND_PENALTY, SCORE_FLOOR)`
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{CardId, Difficulty, SoundEffect};
//!
//! let grid = Difficulty::Medium.grid();
//! assert_eq!(grid.total_cards, 16);
//! assert!(grid.validate());
//!
//! assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
//! assert_eq!(CardId::for_item("4", 2).as_str(), "4-2");
//! assert_eq!(SoundEffect::Match.file_name(), "match-success.wav");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub mod catalog;

pub use catalog::animal_catalog;

/// Delay before two face-up cards are compared (1000ms)
pub const MATCH_RESOLVE_DELAY_MS: u32 = 1000;

/// Length of one elapsed-time second in milliseconds
pub const TIMER_INTERVAL_MS: u32 = 1000;

/// Real-time driver tick (50ms)
pub const RUNTIME_TICK_MS: u32 = 50;

/// Score before any penalty
pub const BASE_SCORE: u32 = 1000;

/// Points lost per mistake
pub const MISTAKE_PENALTY: u32 = 50;

/// Points lost per elapsed second
pub const SECOND_PENALTY: u32 = 2;

/// Lowest score a finished game can earn
pub const SCORE_FLOOR: u32 = 100;

/// An item that appears on exactly two cards of a deck.
///
/// `display_primary` is the English name and `display_secondary` the Māori
/// name. Catalog files may use either the camelCase field names or the
/// short `english`/`maori`/`image` keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairableItem {
    pub id: String,
    #[serde(alias = "english")]
    pub display_primary: String,
    #[serde(alias = "maori")]
    pub display_secondary: String,
    #[serde(alias = "image")]
    pub image_ref: String,
}

impl PairableItem {
    pub fn new(
        id: impl Into<String>,
        display_primary: impl Into<String>,
        display_secondary: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_primary: display_primary.into(),
            display_secondary: display_secondary.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// Card identifier, `"<itemId>-1"` or `"<itemId>-2"` for dealt cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of copy `copy` (1 or 2) of the item with id `item_id`.
    pub fn for_item(item_id: &str, copy: u8) -> Self {
        Self(format!("{item_id}-{copy}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A dealt card. Immutable; identity is `id`.
///
/// Both cards of a pair share the same `item` allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub item: Arc<PairableItem>,
}

impl Card {
    pub fn new(id: CardId, item: Arc<PairableItem>) -> Self {
        Self { id, item }
    }

    /// True when both cards show the same item.
    pub fn is_pair_of(&self, other: &Card) -> bool {
        self.item.id == other.item.id
    }
}

/// Grid shape for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub rows: u8,
    pub cols: u8,
    pub total_cards: usize,
    pub pairs: usize,
}

impl GridConfig {
    pub const fn new(rows: u8, cols: u8, pairs: usize) -> Self {
        Self {
            rows,
            cols,
            total_cards: pairs.saturating_mul(2),
            pairs,
        }
    }

    /// `total_cards == rows * cols == pairs * 2`
    pub fn validate(&self) -> bool {
        let cells = self.rows as usize * self.cols as usize;
        self.pairs > 0
            && self.total_cards == cells
            && self.pairs.checked_mul(2) == Some(self.total_cards)
    }
}

/// Difficulty tiers offered on the welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("Medium"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("extreme"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn grid(self) -> GridConfig {
        match self {
            Difficulty::Easy => GridConfig::new(2, 3, 3),
            Difficulty::Medium => GridConfig::new(4, 4, 8),
            Difficulty::Hard => GridConfig::new(4, 5, 10),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Coarse session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    #[default]
    Waiting,
    Playing,
    Paused,
    Completed,
}

impl GamePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Waiting => "waiting",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::Completed => "completed",
        }
    }
}

/// User intents sent from the UI layer into the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Initialize(Difficulty),
    PressCard(CardId),
    Pause,
    Resume,
    TogglePause,
    Reset,
    ToggleSound,
}

/// Sound cues emitted by the game. Playback is fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundEffect {
    CardFlip,
    Match,
    Mismatch,
    GameComplete,
    ButtonPress,
}

impl SoundEffect {
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::CardFlip => "card-flip.wav",
            SoundEffect::Match => "match-success.wav",
            SoundEffect::Mismatch => "match-fail.wav",
            SoundEffect::GameComplete => "game-complete.wav",
            SoundEffect::ButtonPress => "button-press.wav",
        }
    }

    /// Map a gameplay event name to its sound cue.
    ///
    /// ```
    /// use tui_memory_types::SoundEffect;
    ///
    /// assert_eq!(SoundEffect::from_game_event("cards_matched"), Some(SoundEffect::Match));
    /// assert_eq!(SoundEffect::from_game_event("unknown"), None);
    /// ```
    pub fn from_game_event(event: &str) -> Option<Self> {
        match event {
            "card_flipped" => Some(SoundEffect::CardFlip),
            "cards_matched" => Some(SoundEffect::Match),
            "cards_mismatched" => Some(SoundEffect::Mismatch),
            "game_completed" => Some(SoundEffect::GameComplete),
            "button_pressed" => Some(SoundEffect::ButtonPress),
            _ => None,
        }
    }
}

/// Final figures handed to the result screen when a game completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub score: u32,
    pub elapsed_seconds: u32,
    pub mistakes: u32,
}

/// Format seconds as `m:ss`.
///
/// ```
/// use tui_memory_types::format_time;
///
/// assert_eq!(format_time(0), "0:00");
/// assert_eq!(format_time(75), "1:15");
/// ```
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
