//! Terminal frontend: draws snapshots and reads menu choices with crossterm.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::core::GameSnapshot;
use crate::engine::{Frontend, GameOutcome};
use crate::input::{MenuEvent, MenuHandler, MenuItem};
use crate::term::{Footer, FrameBuffer, GameView, MenuView, TerminalRenderer, Viewport};
use crate::types::{BattleAction, Direction};

pub const DIRECTION_PROMPT: &str = "Move in which direction?";
pub const ACTION_PROMPT: &str = "Choose your action:";

pub struct TerminalFrontend<'a> {
    renderer: &'a mut TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl<'a> TerminalFrontend<'a> {
    pub fn new(renderer: &'a mut TerminalRenderer) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    fn draw(&mut self, snap: &GameSnapshot, footer: &Footer<'_>) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snap, footer, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    /// Block until one entry of `items` is picked. `None` on quit.
    fn prompt<T: MenuItem>(
        &mut self,
        snap: &GameSnapshot,
        prompt: &'static str,
        items: &[T],
    ) -> Result<Option<T>> {
        let mut menu = MenuHandler::new(prompt, items);
        loop {
            let labels = menu.labels();
            let footer = Footer::Menu(MenuView {
                prompt: menu.prompt(),
                labels: labels.as_slice(),
                selected: menu.selected(),
            });
            self.draw(snap, &footer)?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match menu.handle_key(key) {
                    MenuEvent::Selected(item) => {
                        debug!(choice = item.label(), "menu choice");
                        return Ok(Some(item));
                    }
                    MenuEvent::Quit => return Ok(None),
                    MenuEvent::Moved | MenuEvent::Ignored => {}
                },
                Event::Resize(..) => self.renderer.invalidate(),
                _ => {}
            }
        }
    }
}

impl Frontend for TerminalFrontend<'_> {
    fn choose_direction(&mut self, snap: &GameSnapshot) -> Result<Option<Direction>> {
        self.prompt(snap, DIRECTION_PROMPT, &Direction::ALL)
    }

    fn choose_action(&mut self, snap: &GameSnapshot) -> Result<Option<BattleAction>> {
        self.prompt(snap, ACTION_PROMPT, &BattleAction::ALL)
    }

    fn present_outcome(&mut self, snap: &GameSnapshot, outcome: GameOutcome) -> Result<()> {
        let footer = Footer::Notice(outcome.farewell());
        loop {
            self.draw(snap, &footer)?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
                Event::Resize(..) => self.renderer.invalidate(),
                _ => {}
            }
        }
    }
}
