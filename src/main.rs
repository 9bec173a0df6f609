//! Terminal memory game runner (default binary).
//!
//! The session runs on a tokio task; this thread polls crossterm for keys,
//! forwards them as intents and redraws from the latest snapshot.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tui_memory::input::{handle_key_event, should_quit, GridCursor, UiAction};
use tui_memory::runtime::{
    catalog_from_config, ChannelCompletion, RuntimeConfig, SessionHandle, SessionRuntime,
    TracingSound,
};
use tui_memory::term::{GameView, TerminalRenderer};
use tui_memory::types::{GamePhase, GameResult, Intent};

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        init_tracing(path)?;
    }
    info!(difficulty = config.difficulty.label(), seed = ?config.seed, "starting");

    let catalog = catalog_from_config(&config)?;
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let (done_tx, mut done_rx) = mpsc::unbounded_channel();

    let handle = {
        let _guard = rt.enter();
        SessionRuntime::spawn(
            &config,
            catalog,
            TracingSound::new(config.sound_enabled),
            ChannelCompletion::new(done_tx),
        )?
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let frame = Duration::from_millis(u64::from(config.tick_ms.max(1)));
    let result = run(&mut term, &handle, &mut done_rx, frame);

    // Always try to restore terminal state.
    let _ = term.exit();
    rt.block_on(handle.shutdown())?;
    info!("stopped");
    result
}

/// Log to a file; stdout belongs to the game.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    handle: &SessionHandle,
    done_rx: &mut mpsc::UnboundedReceiver<GameResult>,
    frame: Duration,
) -> Result<()> {
    let view = GameView::default();
    let mut cursor = GridCursor::default();
    let mut last_result: Option<GameResult> = None;

    loop {
        let snap = handle.snapshot();
        cursor.resize(snap.rows, snap.cols);
        while let Ok(result) = done_rx.try_recv() {
            last_result = Some(result);
        }

        // Render.
        let mut lines = view.render(&snap, cursor.index());
        if snap.phase == GamePhase::Completed {
            if let Some(result) = last_result.as_ref() {
                lines.push(String::new());
                lines.extend(view.render_result(result));
            }
        }
        term.draw(lines)?;

        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let intent = match handle_key_event(key) {
                    Some(UiAction::Move(direction)) => {
                        cursor.move_by(direction);
                        None
                    }
                    Some(UiAction::Flip) => snap
                        .cards
                        .get(cursor.index())
                        .map(|card| Intent::PressCard(card.id.clone())),
                    Some(UiAction::TogglePause) => Some(Intent::TogglePause),
                    Some(UiAction::Reset) => Some(Intent::Reset),
                    Some(UiAction::ToggleSound) => Some(Intent::ToggleSound),
                    Some(UiAction::NewGame(difficulty)) => Some(Intent::Initialize(difficulty)),
                    None => None,
                };
                if let Some(intent) = intent {
                    handle.try_send(intent);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
