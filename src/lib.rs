//! TUI Memory (workspace facade crate).
//!
//! Re-exports the member crates under `tui_memory::{core,input,runtime,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_runtime as runtime;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
