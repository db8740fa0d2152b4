//! List-selection handler for the movement and combat menus.

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;

use crate::map::{map_menu_key, MenuKey};
use crate::types::{BattleAction, Direction};

/// Largest menu the handler holds.
pub const MAX_MENU_ITEMS: usize = 4;

/// Anything that can be listed in a menu.
pub trait MenuItem: Copy {
    fn label(&self) -> &'static str;

    /// Lowercase first letter of the label.
    fn hotkey(&self) -> Option<char> {
        self.label()
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
    }
}

impl MenuItem for Direction {
    fn label(&self) -> &'static str {
        Direction::label(self)
    }
}

impl MenuItem for BattleAction {
    fn label(&self) -> &'static str {
        BattleAction::label(self)
    }
}

/// Result of feeding one key to a [`MenuHandler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent<T> {
    /// Key had no effect.
    Ignored,
    /// The highlight moved; redraw.
    Moved,
    Selected(T),
    Quit,
}

/// Tracks the highlighted entry of one open menu.
#[derive(Debug, Clone)]
pub struct MenuHandler<T: MenuItem> {
    prompt: &'static str,
    items: ArrayVec<T, MAX_MENU_ITEMS>,
    selected: usize,
}

impl<T: MenuItem> MenuHandler<T> {
    /// Open a menu over `items`; anything past `MAX_MENU_ITEMS` is dropped.
    pub fn new(prompt: &'static str, items: &[T]) -> Self {
        Self {
            prompt,
            items: items.iter().copied().take(MAX_MENU_ITEMS).collect(),
            selected: 0,
        }
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn labels(&self) -> ArrayVec<&'static str, MAX_MENU_ITEMS> {
        self.items.iter().map(|item| item.label()).collect()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> MenuEvent<T> {
        match map_menu_key(key) {
            Some(k) => self.handle_menu_key(k),
            None => MenuEvent::Ignored,
        }
    }

    pub fn handle_menu_key(&mut self, key: MenuKey) -> MenuEvent<T> {
        let len = self.items.len();
        if len == 0 {
            return match key {
                MenuKey::Quit => MenuEvent::Quit,
                _ => MenuEvent::Ignored,
            };
        }

        match key {
            MenuKey::Previous => {
                self.selected = (self.selected + len - 1) % len;
                MenuEvent::Moved
            }
            MenuKey::Next => {
                self.selected = (self.selected + 1) % len;
                MenuEvent::Moved
            }
            MenuKey::Confirm => MenuEvent::Selected(self.items[self.selected]),
            MenuKey::Number(i) => self.select_index(i),
            MenuKey::Letter(c) => match self.items.iter().position(|it| it.hotkey() == Some(c)) {
                Some(i) => self.select_index(i),
                None => MenuEvent::Ignored,
            },
            MenuKey::Quit => MenuEvent::Quit,
        }
    }

    fn select_index(&mut self, i: usize) -> MenuEvent<T> {
        match self.items.get(i) {
            Some(&item) => {
                self.selected = i;
                MenuEvent::Selected(item)
            }
            None => MenuEvent::Ignored,
        }
    }
}
