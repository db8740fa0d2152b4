//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from a snapshot only; the game state is never touched by drawing
//! - Allow precise control over aspect ratio (2 columns per grid cell)

pub mod banner;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use roguemaze_core as core;
pub use roguemaze_types as types;

pub use banner::{TITLE_BANNER, TITLE_TEXT};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    tone_style, Footer, GameView, MenuView, Viewport, EMPTY_GLYPH, ENEMY_GLYPH, PLAYER_GLYPH,
};
pub use renderer::{encode_frame, TerminalRenderer};
