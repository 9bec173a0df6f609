use serde::{Deserialize, Serialize};

use crate::session::GameSession;
use crate::types::{CardId, GamePhase};

/// Which selection a face-up card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    pub item_id: String,
    pub primary: String,
    pub secondary: String,
    pub image_ref: String,
    /// Flipped or matched.
    pub face_up: bool,
    pub matched: bool,
    pub selection: Option<Selection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub rows: u8,
    pub cols: u8,
    pub cards: Vec<CardView>,
    pub phase: GamePhase,
    pub mistakes: u32,
    pub elapsed_seconds: u32,
    pub move_count: u32,
    pub processing: bool,
    pub score: u32,
    pub won: bool,
    pub generation: u64,
    pub first_selection: Option<CardId>,
    pub second_selection: Option<CardId>,
    /// Filled in by the controller; a bare session has no sound player.
    pub sound_enabled: bool,
}

impl SessionSnapshot {
    pub fn card(&self, card_id: &CardId) -> Option<&CardView> {
        self.cards.iter().find(|c| &c.id == card_id)
    }

    /// `(secondary, primary)` of the most recent selection, for the word display.
    pub fn selected_word(&self) -> Option<(&str, &str)> {
        let id = self.second_selection.as_ref().or(self.first_selection.as_ref())?;
        let card = self.card(id)?;
        Some((card.secondary.as_str(), card.primary.as_str()))
    }

    pub fn playable(&self) -> bool {
        !self.processing && matches!(self.phase, GamePhase::Waiting | GamePhase::Playing)
    }
}

impl GameSession {
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        let grid = self.grid();
        out.rows = grid.map_or(0, |g| g.rows);
        out.cols = grid.map_or(0, |g| g.cols);

        out.cards.clear();
        out.cards.extend(self.cards().iter().map(|card| {
            let matched = self.is_matched(&card.id);
            let selection = if self.first_selection() == Some(&card.id) {
                Some(Selection::First)
            } else if self.second_selection() == Some(&card.id) {
                Some(Selection::Second)
            } else {
                None
            };
            CardView {
                id: card.id.clone(),
                item_id: card.item.id.clone(),
                primary: card.item.display_primary.clone(),
                secondary: card.item.display_secondary.clone(),
                image_ref: card.item.image_ref.clone(),
                face_up: matched || self.is_flipped(&card.id),
                matched,
                selection,
            }
        }));

        out.phase = self.phase();
        out.mistakes = self.mistakes();
        out.elapsed_seconds = self.elapsed_seconds();
        out.move_count = self.move_count();
        out.processing = self.is_processing();
        out.score = self.score();
        out.won = self.is_game_won();
        out.generation = self.generation();
        out.first_selection = self.first_selection().cloned();
        out.second_selection = self.second_selection().cloned();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
