//! Deck builder
//!
//! Deals a shuffled deck for one session: the first `pairs` catalog items,
//! two cards each, in Fisher-Yates order.

use std::collections::HashSet;
use std::sync::Arc;

use rand::Rng;

use crate::error::{ConfigError, Result};
use crate::rng::fisher_yates;
use crate::types::{Card, CardId, GridConfig, PairableItem};

/// Build the shuffled card sequence for a grid.
///
/// Items are taken as a prefix of `catalog` in the order given, so easier
/// tiers always show the first animals of the catalog.
pub fn build_deck<R: Rng + ?Sized>(
    catalog: &[PairableItem],
    grid: &GridConfig,
    rng: &mut R,
) -> Result<Vec<Card>> {
    if !grid.validate() {
        return Err(ConfigError::InvalidGrid {
            rows: grid.rows,
            cols: grid.cols,
            total_cards: grid.total_cards,
            pairs: grid.pairs,
        });
    }

    if catalog.len() < grid.pairs {
        return Err(ConfigError::CatalogTooSmall {
            required: grid.pairs,
            available: catalog.len(),
        });
    }

    let mut seen = HashSet::with_capacity(grid.pairs);
    let mut cards = Vec::with_capacity(grid.total_cards);

    for item in &catalog[..grid.pairs] {
        if !seen.insert(item.id.as_str()) {
            return Err(ConfigError::DuplicateItemId {
                id: item.id.clone(),
            });
        }

        let item = Arc::new(item.clone());
        cards.push(Card::new(CardId::for_item(&item.id, 1), Arc::clone(&item)));
        cards.push(Card::new(CardId::for_item(&item.id, 2), item));
    }

    fisher_yates(&mut cards, rng);
    Ok(cards)
}
