//! Runtime module - drives a game session in real time
//!
//! The core controller only moves when it is told how much time has passed.
//! This crate owns that clock: a tokio task holds the controller, feeds it
//! intents from a channel, advances it on a fixed interval and publishes
//! snapshots for the renderer.
//!
//! # Lifecycle
//!
//! 1. [`RuntimeConfig::from_env`] reads settings (see [`config`])
//! 2. [`catalog_from_config`] loads the animal catalog
//! 3. [`SessionRuntime::spawn`] deals the first deck and starts the task
//! 4. The UI sends [`Intent`](crate::types::Intent)s and reads snapshots
//!    through the returned [`SessionHandle`]
//! 5. [`SessionHandle::shutdown`] stops the task; dropping the handle aborts it
//!
//! Every timer and pending pair resolution lives inside the task, so nothing
//! outlives the handle.

pub mod catalog;
pub mod config;
pub mod session;
pub mod sinks;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use catalog::{catalog_from_config, load_catalog};
pub use config::RuntimeConfig;
pub use session::{SessionHandle, SessionRuntime};
pub use sinks::{ChannelCompletion, TracingSound};
