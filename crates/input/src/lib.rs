//! Terminal input module.
//!
//! Maps `crossterm` key events into [`UiAction`]s and tracks the card under
//! the cursor. Turning a flip into a card press is left to the caller, which
//! knows the current deck.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::{Direction, GridCursor};
pub use map::{handle_key_event, should_quit, UiAction};
