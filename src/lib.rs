//! RogueMaze (workspace facade crate).
//!
//! Re-exports the workspace crates as `roguemaze::{core,engine,input,term,types}`
//! and hosts the crossterm-backed [`frontend::TerminalFrontend`] used by the binary.

pub mod frontend;

pub use roguemaze_core as core;
pub use roguemaze_engine as engine;
pub use roguemaze_input as input;
pub use roguemaze_term as term;
pub use roguemaze_types as types;
