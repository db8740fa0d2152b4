//! Key mapping from terminal events to menu keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// Move the highlight up one entry.
    Previous,
    /// Move the highlight down one entry.
    Next,
    /// Pick the highlighted entry.
    Confirm,
    /// Pick the entry at this zero-based index.
    Number(usize),
    /// Pick the entry whose label starts with this (lowercase) letter.
    Letter(char),
    Quit,
}

/// Map keyboard input to menu keys.
///
/// Letters that double as navigation (`j`, `k`) and quit (`q`) are handled
/// before hotkeys, so no menu label may start with them.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuKey> {
    if should_quit(key) {
        return Some(MenuKey::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(MenuKey::Previous)
        }
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(MenuKey::Next)
        }

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuKey::Confirm),
        KeyCode::Char(c @ '1'..='9') => Some(MenuKey::Number((c as usize) - ('1' as usize))),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(MenuKey::Letter(c.to_ascii_lowercase()))
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Up)),
            Some(MenuKey::Previous)
        );
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Down)),
            Some(MenuKey::Next)
        );
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('k'))),
            Some(MenuKey::Previous)
        );
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('J'))),
            Some(MenuKey::Next)
        );
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Enter)),
            Some(MenuKey::Confirm)
        );
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('3'))),
            Some(MenuKey::Number(2))
        );
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(MenuKey::Letter('h'))
        );
        assert_eq!(map_menu_key(KeyEvent::from(KeyCode::Char('0'))), None);
        assert_eq!(map_menu_key(KeyEvent::from(KeyCode::F(1))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_menu_key(KeyEvent::from(KeyCode::Char('Q'))),
            Some(MenuKey::Quit)
        );
    }
}
