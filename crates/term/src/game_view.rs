//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom:
//!
//! - title banner (or a one-line title on short terminals)
//! - the map with a stats panel, or during a battle the enemy art with both
//!   health values
//! - as many recent log messages as fit
//! - the open menu (or an end-of-game notice) and a key hint

use crate::banner::{banner_height, TITLE_BANNER, TITLE_TEXT};
use crate::core::entity::PLAYER_ART;
use crate::core::{GameSnapshot, Phase, Tile, Tone};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Archetype, Position};

pub const EMPTY_GLYPH: char = '·';
pub const ENEMY_GLYPH: char = '&';
pub const PLAYER_GLYPH: char = '@';

const CYAN: Rgb = Rgb::new(80, 220, 220);
const GREEN: Rgb = Rgb::new(100, 220, 120);
const RED: Rgb = Rgb::new(220, 80, 80);
const YELLOW: Rgb = Rgb::new(240, 220, 80);
const BLUE: Rgb = Rgb::new(80, 140, 240);
const MAGENTA: Rgb = Rgb::new(200, 120, 220);
const WHITE: Rgb = Rgb::new(220, 220, 220);
const GREY: Rgb = Rgb::new(110, 110, 120);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// An open list menu, as the view should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView<'a> {
    pub prompt: &'a str,
    pub labels: &'a [&'static str],
    pub selected: usize,
}

/// What fills the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footer<'a> {
    Menu(MenuView<'a>),
    /// A closing line, e.g. once the run is over.
    Notice(&'a str),
}

/// A lightweight terminal renderer for the dungeon.
pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
    /// Rows below which the figlet banner is replaced by a plain title.
    banner_min_rows: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            banner_min_rows: 32,
        }
    }
}

impl GameView {
    /// Render a frame into an existing framebuffer.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        footer: &Footer<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let mut y = self.draw_title(fb, viewport);

        let main_h = match &snap.encounter {
            Some(_) => self.draw_battle(fb, snap, y),
            None => self.draw_map(fb, snap, y),
        };
        y = y.saturating_add(main_h).saturating_add(1);

        let footer_h = footer_height(footer);
        let footer_y = viewport.height.saturating_sub(footer_h).max(y);
        self.draw_messages(fb, snap, y, footer_y.saturating_sub(y));
        self.draw_footer(fb, footer, footer_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        footer: &Footer<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, footer, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, viewport: Viewport) -> u16 {
        let style = CellStyle::fg(CYAN).bold();
        if viewport.height >= self.banner_min_rows {
            let rows = fb.put_block(0, 0, TITLE_BANNER, style);
            debug_assert_eq!(rows, banner_height());
            rows + 1
        } else {
            fb.put_str(0, 0, TITLE_TEXT, style);
            2
        }
    }

    /// Map frame plus stats panel. Returns rows used.
    fn draw_map(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, top: u16) -> u16 {
        let size = u16::from(snap.grid_size);
        let frame_w = size * self.cell_w + 3;
        let frame_h = size + 2;

        draw_border(fb, 0, top, frame_w, frame_h, CellStyle::fg(GREY));

        for x in 0..snap.grid_size {
            for y in 0..snap.grid_size {
                let pos = Position::new(x, y);
                let (ch, style) = if pos == snap.player {
                    (PLAYER_GLYPH, CellStyle::fg(BLUE).bold())
                } else {
                    match snap.tile(pos) {
                        Some(Tile::Enemy) => (ENEMY_GLYPH, CellStyle::fg(MAGENTA).bold()),
                        _ => (EMPTY_GLYPH, CellStyle::fg(GREY).dim()),
                    }
                };
                let px = 2 + u16::from(y) * self.cell_w;
                let py = top + 1 + u16::from(x);
                fb.put_char(px, py, ch, style);
            }
        }

        let label = CellStyle::fg(WHITE).bold();
        let value = CellStyle::fg(WHITE);
        let panel_x = frame_w + 2;
        let mut y = top;

        fb.put_str(panel_x, y, "HEALTH", label);
        y += 1;
        let end = fb.put_str(panel_x, y, &snap.player_health.to_string(), health_style(snap));
        fb.put_str(end, y, &format!("/{}", snap.max_health()), value);
        y += 2;

        fb.put_str(panel_x, y, "ROOMS CLEARED", label);
        y += 1;
        fb.put_str(
            panel_x,
            y,
            &format!("{}/{}", snap.rooms_cleared().min(u16::from(snap.rooms)), snap.rooms),
            value,
        );
        y += 2;

        fb.put_str(panel_x, y, "POSITION", label);
        y += 1;
        fb.put_str(
            panel_x,
            y,
            &format!("({}, {})", snap.player.x, snap.player.y),
            value,
        );

        frame_h.max(y - top + 1)
    }

    /// Enemy art with the health readout beside it. Returns rows used.
    fn draw_battle(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, top: u16) -> u16 {
        let Some(enemy) = &snap.encounter else {
            return 0;
        };

        let art = enemy.art.trim_matches('\n');
        let art_w = art.lines().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let art_h = fb.put_block(0, top, art, CellStyle::fg(archetype_color(enemy.archetype)));

        let panel_x = art_w + 3;
        let mut y = top;
        fb.put_str(
            panel_x,
            y,
            &format!("A {} appears!", enemy.name),
            CellStyle::fg(RED).bold(),
        );
        y += 2;
        fb.put_str(
            panel_x,
            y,
            &format!("Your Health: {}", snap.player_health),
            CellStyle::fg(GREEN),
        );
        y += 1;
        fb.put_str(
            panel_x,
            y,
            &format!("{} Health: {}", enemy.name, enemy.health),
            CellStyle::fg(RED),
        );
        y += 2;
        let player_h = fb.put_block(
            panel_x,
            y,
            PLAYER_ART.trim_matches('\n'),
            CellStyle::fg(GREEN),
        );
        y += player_h;

        art_h.max(y - top)
    }

    /// Most recent messages that fit in `rows`.
    fn draw_messages(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, top: u16, rows: u16) {
        let skip = snap.messages.len().saturating_sub(rows as usize);
        for (i, msg) in snap.messages.iter().skip(skip).enumerate() {
            fb.put_str(0, top + i as u16, &msg.text, tone_style(msg.tone));
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, footer: &Footer<'_>, top: u16) {
        let hint = CellStyle::fg(GREY).dim();
        match footer {
            Footer::Menu(menu) => {
                let end = fb.put_str(0, top, "? ", CellStyle::fg(GREEN).bold());
                fb.put_str(end, top, menu.prompt, CellStyle::fg(WHITE).bold());
                for (i, label) in menu.labels.iter().enumerate() {
                    let y = top + 1 + i as u16;
                    if i == menu.selected {
                        fb.put_str(0, y, "> ", CellStyle::fg(CYAN).bold());
                        fb.put_str(2, y, label, CellStyle::fg(CYAN).bold());
                    } else {
                        fb.put_str(2, y, label, CellStyle::fg(WHITE));
                    }
                }
                let y = top + 1 + menu.labels.len() as u16;
                fb.put_str(0, y, "up/down: move  enter: choose  q: quit", hint);
            }
            Footer::Notice(text) => {
                fb.put_str(0, top, text, CellStyle::fg(WHITE).bold());
                fb.put_str(0, top + 1, "Press any key to exit", hint);
            }
        }
    }
}

fn footer_height(footer: &Footer<'_>) -> u16 {
    match footer {
        Footer::Menu(menu) => menu.labels.len() as u16 + 2,
        Footer::Notice(_) => 2,
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn health_style(snap: &GameSnapshot) -> CellStyle {
    if snap.phase == Phase::Dead || snap.player_health * 4 <= snap.max_health() {
        CellStyle::fg(RED).bold()
    } else {
        CellStyle::fg(GREEN).bold()
    }
}

fn archetype_color(archetype: Archetype) -> Rgb {
    match archetype {
        Archetype::Goblin => MAGENTA,
        Archetype::Orc => YELLOW,
        Archetype::Dragon => RED,
    }
}

/// Colour for a log line.
pub fn tone_style(tone: Tone) -> CellStyle {
    match tone {
        Tone::Title => CellStyle::fg(MAGENTA).bold(),
        Tone::Success => CellStyle::fg(GREEN),
        Tone::Danger => CellStyle::fg(RED),
        Tone::Warning => CellStyle::fg(YELLOW),
        Tone::Heal => CellStyle::fg(BLUE),
    }
}
