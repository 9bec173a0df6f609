//! GameView: maps a `SessionSnapshot` into lines of terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardView, SessionSnapshot};
use crate::types::{format_time, GamePhase, GameResult};

/// Width of one card cell in terminal columns, brackets included.
const CELL_WIDTH: usize = 12;

/// A line-oriented view of the card grid.
pub struct GameView {
    cell_width: usize,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_width: CELL_WIDTH,
        }
    }
}

impl GameView {
    pub fn new(cell_width: usize) -> Self {
        Self {
            cell_width: cell_width.max(4),
        }
    }

    /// Render the board with the cursor on card `cursor`.
    pub fn render(&self, snap: &SessionSnapshot, cursor: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(snap.rows as usize + 6);
        lines.push(format!(
            "Time {}   Mistakes {}   Moves {}   Score {}",
            format_time(snap.elapsed_seconds),
            snap.mistakes,
            snap.move_count,
            snap.score
        ));
        lines.push(String::new());

        let cols = snap.cols.max(1) as usize;
        for (row, chunk) in snap.cards.chunks(cols).enumerate() {
            let mut line = String::new();
            for (col, card) in chunk.iter().enumerate() {
                let selected = row * cols + col == cursor;
                line.push_str(&self.cell(card, selected));
            }
            lines.push(line.trim_end().to_string());
        }
        lines.push(String::new());

        lines.push(match snap.selected_word() {
            Some((secondary, primary)) => format!("{secondary} - {primary}"),
            None => String::new(),
        });
        lines.push(status_line(snap));
        lines
    }

    /// Lines shown once the last pair is matched.
    pub fn render_result(&self, result: &GameResult) -> Vec<String> {
        vec![
            "Ka pai! All pairs found.".to_string(),
            format!(
                "Score {}   Time {}   Mistakes {}",
                result.score,
                format_time(result.elapsed_seconds),
                result.mistakes
            ),
            "1/2/3 new game   r play again   q quit".to_string(),
        ]
    }

    fn cell(&self, card: &CardView, selected: bool) -> String {
        let label = if card.matched {
            format!("*{}", card.secondary)
        } else if card.face_up {
            card.secondary.clone()
        } else {
            "??".to_string()
        };
        let (open, close) = if selected { ('>', '<') } else { ('[', ']') };
        let inner = self.cell_width.saturating_sub(3);
        let label: String = label.chars().take(inner).collect();
        format!("{open}{label:^inner$}{close} ")
    }
}

fn status_line(snap: &SessionSnapshot) -> String {
    let phase = match snap.phase {
        GamePhase::Waiting => "Flip a card to start",
        GamePhase::Playing if snap.processing => "Checking...",
        GamePhase::Playing => "Playing",
        GamePhase::Paused => "Paused (p to resume)",
        GamePhase::Completed => "Completed",
    };
    let sound = if snap.sound_enabled { "on" } else { "off" };
    format!(
        "{phase}   [arrows] move  [enter] flip  [p] pause  [r] reset  [m] sound {sound}  [q] quit"
    )
}
