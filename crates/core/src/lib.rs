//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory-matching rules: dealing, the flip/match
//! state machine, the game clock and scoring. It has **no dependencies** on
//! UI, async runtimes, or I/O, making it:
//!
//! - **Deterministic**: Same seed deals the same deck; time only moves when the
//!   caller advances it
//! - **Testable**: Every transition is a plain method call
//! - **Portable**: Can be driven by a terminal loop, an async task, or a test
//!
//! # Module Structure
//!
//! - [`deck`]: Deals a shuffled deck from a catalog prefix
//! - [`matching`]: Decides whether two face-up cards are a pair
//! - [`session`]: The session state machine and game clock
//! - [`controller`]: Resolution delay, stale-work guard, sound and result sinks
//! - [`scoring`]: Score derivation
//! - [`snapshot`]: Read-only views for renderers
//! - [`rng`]: Fisher-Yates shuffling over a seedable generator
//!
//! # Game Rules
//!
//! - **Deal**: The first `pairs` animals of the catalog, two cards each, shuffled
//! - **Flip**: At most two unresolved cards face-up; the first flip starts the clock
//! - **Resolve**: One second after the second flip the pair locks in or turns back
//! - **Mistakes**: Every mismatched pair counts one
//! - **Score**: `max(1000 - 50 * mistakes - 2 * seconds, 100)`
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{rng::seeded_rng, GameController, NoopCompletion, SilentSound};
//! use tui_memory_core::types::{animal_catalog, Difficulty, GamePhase};
//!
//! let rng = seeded_rng(7);
//! let mut game = GameController::new(animal_catalog(), rng, SilentSound, NoopCompletion);
//! game.initialize(Difficulty::Easy).unwrap();
//!
//! let first = game.session().cards()[0].id.clone();
//! assert!(game.press_card(&first));
//! assert_eq!(game.session().phase(), GamePhase::Playing);
//!
//! game.advance(1000);
//! assert_eq!(game.session().elapsed_seconds(), 1);
//! ```

pub mod controller;
pub mod deck;
pub mod error;
pub mod matching;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use controller::{
    CompletionSink, GameController, NoopCompletion, PendingResolution, SilentSound, SoundPlayer,
};
pub use deck::build_deck;
pub use error::ConfigError;
pub use matching::{evaluate_flipped, evaluate_match, MatchOutcome};
pub use scoring::calculate_score;
pub use session::GameSession;
pub use snapshot::{CardView, Selection, SessionSnapshot};
