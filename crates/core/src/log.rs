//! Rolling message log shown under the map.

use std::collections::VecDeque;

/// Lines kept by default; older lines scroll off.
pub const DEFAULT_LOG_CAPACITY: usize = 8;

/// Colour class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Welcome and other banner-style lines.
    Title,
    /// Good news for the player: hits, victories.
    Success,
    /// Bad news: enemy appears, enemy hits, death.
    Danger,
    /// Blocked moves and blocked attacks.
    Warning,
    /// Healing.
    Heal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

impl Message {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessageLog {
    lines: VecDeque<Message>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl MessageLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(Message::new(text, tone));
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.lines.iter()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_lines_scroll_off() {
        let mut log = MessageLog::with_capacity(2);
        log.push("one", Tone::Title);
        log.push("two", Tone::Warning);
        log.push("three", Tone::Danger);

        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
    }

    #[test]
    fn zero_capacity_still_keeps_the_latest_line() {
        let mut log = MessageLog::with_capacity(0);
        log.push("a", Tone::Success);
        log.push("b", Tone::Heal);
        assert_eq!(log.iter().count(), 1);
        assert_eq!(log.iter().next().map(|m| m.text.as_str()), Some("b"));
    }
}
