//! Terminal rendering module.
//!
//! [`GameView`] turns a session snapshot into plain lines of text and
//! [`TerminalRenderer`] flushes those lines to the terminal, rewriting only
//! the rows that changed since the last frame.

pub mod renderer;
pub mod view;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::GameView;
