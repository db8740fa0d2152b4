//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into menu navigation and provides a list-selection
//! handler in the style of an interactive list prompt: move the highlight,
//! confirm, or jump straight to an entry by hotkey.

pub mod handler;
pub mod map;

pub use roguemaze_types as types;

pub use handler::{MenuEvent, MenuHandler, MenuItem, MAX_MENU_ITEMS};
pub use map::{map_menu_key, should_quit, MenuKey};
