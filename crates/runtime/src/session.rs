//! Session runtime - the async task that owns a game controller.
//!
//! Bridges the sync terminal loop with tokio: intents arrive on an `mpsc`
//! channel, snapshots leave on a `watch` channel, and a `tokio::time`
//! interval supplies elapsed time to the controller.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::config::RuntimeConfig;
use crate::core::rng::{entropy_rng, seeded_rng};
use crate::core::{CompletionSink, GameController, SessionSnapshot, SoundPlayer};
use crate::types::{Intent, PairableItem};

pub struct SessionRuntime;

impl SessionRuntime {
    /// Deal the configured deck and start driving it.
    ///
    /// Configuration errors surface here, before any task is spawned. Must be
    /// called from within a tokio runtime.
    pub fn spawn<P, C>(
        config: &RuntimeConfig,
        catalog: Vec<PairableItem>,
        sound: P,
        completion: C,
    ) -> Result<SessionHandle>
    where
        P: SoundPlayer + Send + 'static,
        C: CompletionSink + Send + 'static,
    {
        let rng = match config.seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        };

        let mut controller = GameController::new(catalog, rng, sound, completion)
            .with_resolve_delay(config.resolve_delay_ms);
        controller
            .initialize(config.difficulty)
            .with_context(|| format!("failed to deal a {} deck", config.difficulty.label()))?;

        let (intent_tx, intent_rx) = mpsc::channel(config.max_pending_intents.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
        let tick = Duration::from_millis(u64::from(config.tick_ms.max(1)));

        let task = tokio::spawn(drive(controller, intent_rx, snapshot_tx, tick));

        Ok(SessionHandle {
            intents: Some(intent_tx),
            snapshots: snapshot_rx,
            task: Some(task),
        })
    }
}

/// Handle to a running session.
///
/// Dropping the handle aborts the task, cancelling its timer and any pending
/// pair resolution.
pub struct SessionHandle {
    intents: Option<mpsc::Sender<Intent>>,
    snapshots: watch::Receiver<SessionSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl SessionHandle {
    pub async fn send(&self, intent: Intent) -> Result<()> {
        let tx = self
            .intents
            .as_ref()
            .ok_or_else(|| anyhow!("session runtime has stopped"))?;
        tx.send(intent)
            .await
            .map_err(|_| anyhow!("session runtime has stopped"))
    }

    /// Queue an intent without waiting. A full queue drops the intent, which
    /// the game treats the same as a press that arrived too late.
    pub fn try_send(&self, intent: Intent) -> bool {
        let Some(tx) = self.intents.as_ref() else {
            return false;
        };
        match tx.try_send(intent) {
            Ok(()) => true,
            Err(err) => {
                debug!(error = %err, "intent dropped");
                false
            }
        }
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop the task after it finishes the intents already queued.
    pub async fn shutdown(mut self) -> Result<()> {
        self.intents.take();
        if let Some(task) = self.task.take() {
            task.await.context("session task failed")?;
        }
        Ok(())
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn drive<P, C>(
    mut controller: GameController<P, C>,
    mut intents: mpsc::Receiver<Intent>,
    snapshots: watch::Sender<SessionSnapshot>,
    tick: Duration,
) where
    P: SoundPlayer,
    C: CompletionSink,
{
    let mut ticker = time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    loop {
        tokio::select! {
            intent = intents.recv() => {
                let Some(intent) = intent else {
                    break;
                };
                // Bring the clock up to date so the intent lands at the right time.
                let now = Instant::now();
                controller.advance(elapsed_ms(last, now));
                last = now;

                if let Err(err) = controller.handle(intent) {
                    warn!(error = %err, "intent rejected");
                }
            }
            _ = ticker.tick() => {
                let now = Instant::now();
                let changed = controller.advance(elapsed_ms(last, now));
                last = now;
                if !changed {
                    continue;
                }
            }
        }

        snapshots.send_replace(controller.snapshot());
    }

    debug!("session runtime stopped");
}

fn elapsed_ms(from: Instant, to: Instant) -> u32 {
    u32::try_from(to.saturating_duration_since(from).as_millis()).unwrap_or(u32::MAX)
}
