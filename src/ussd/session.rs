use crate::ussd::input::{is_keypad_char, MAX_PENDING_INPUT};
use crate::ussd::screen::ScreenId;

/// The one mutable entity of a dial-in: where the subscriber is, how they got
/// there, and what they have typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current: ScreenId,
    /// Screens visited before `current`, most recent last.
    history: Vec<ScreenId>,
    pending_input: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current: ScreenId::Welcome,
            history: Vec::new(),
            pending_input: String::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn history(&self) -> &[ScreenId] {
        &self.history
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn is_at_welcome(&self) -> bool {
        self.current == ScreenId::Welcome
    }

    pub(crate) fn push(&mut self, next: ScreenId) {
        self.history.push(self.current);
        self.current = next;
    }

    /// Restore the previous screen, or welcome when there is none.
    pub(crate) fn pop(&mut self) -> ScreenId {
        self.current = self.history.pop().unwrap_or(ScreenId::Welcome);
        self.current
    }

    pub(crate) fn clear(&mut self) {
        self.current = ScreenId::Welcome;
        self.history.clear();
        self.pending_input.clear();
    }

    pub(crate) fn push_input(&mut self, ch: char) -> bool {
        if !is_keypad_char(ch) || self.pending_input.len() >= MAX_PENDING_INPUT {
            return false;
        }
        self.pending_input.push(ch);
        true
    }

    pub(crate) fn pop_input(&mut self) -> Option<char> {
        self.pending_input.pop()
    }

    pub(crate) fn take_input(&mut self) -> String {
        std::mem::take(&mut self.pending_input)
    }

    pub(crate) fn clear_input(&mut self) {
        self.pending_input.clear();
    }
}
