//! Error types for tui-memory-core.
//!
//! Only malformed configuration is an error. Presses that arrive at the wrong
//! moment are rejected by returning `false` instead.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that prevent a deck from being dealt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid grid {rows}x{cols}: {total_cards} cards for {pairs} pairs")]
    InvalidGrid {
        rows: u8,
        cols: u8,
        total_cards: usize,
        pairs: usize,
    },

    #[error("catalog has {available} items but the grid needs {required} pairs")]
    CatalogTooSmall { required: usize, available: usize },

    #[error("duplicate item id {id} in catalog")]
    DuplicateItemId { id: String },
}
