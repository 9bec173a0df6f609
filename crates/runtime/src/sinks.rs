//! Collaborator implementations used by the terminal game.

use tokio::sync::mpsc;
use tracing::info;

use crate::core::{CompletionSink, SoundPlayer};
use crate::types::{GameResult, SoundEffect};

/// Sound player that only logs the cue and the file it would play.
#[derive(Debug, Clone, Copy)]
pub struct TracingSound {
    enabled: bool,
}

impl TracingSound {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for TracingSound {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SoundPlayer for TracingSound {
    fn play(&mut self, effect: SoundEffect) {
        if self.enabled {
            info!(?effect, file = effect.file_name(), "sound effect");
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        info!(enabled, "sound toggled");
    }
}

/// Forwards completed-game results to a channel.
#[derive(Debug, Clone)]
pub struct ChannelCompletion {
    tx: mpsc::UnboundedSender<GameResult>,
}

impl ChannelCompletion {
    pub fn new(tx: mpsc::UnboundedSender<GameResult>) -> Self {
        Self { tx }
    }
}

impl CompletionSink for ChannelCompletion {
    fn complete(&mut self, result: GameResult) {
        // Receiver gone means nobody is showing results any more.
        let _ = self.tx.send(result);
    }
}
