//! The session engine: resolves submitted keys against the menu registry and
//! applies Navigate, Back or Exit.

use serde::Serialize;
use uuid::Uuid;

use crate::ussd::input::{normalize_key, BACK_KEY};
use crate::ussd::registry::{MenuRegistry, RegistryError};
use crate::ussd::screen::{ScreenDefinition, ScreenId, Target};
use crate::ussd::session::Session;
use crate::ussd::snapshot::SessionSnapshot;

/// Outcome of a submission, reported to the presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransitionResult {
    Navigated { from: ScreenId, to: ScreenId },
    WentBack { to: ScreenId },
    /// Welcome's exit option was chosen. The session is back at welcome and
    /// can be used again.
    SessionTerminated,
    /// No option on the current screen has that key. Nothing moved.
    InvalidSelection,
}

/// Rule chosen for a resolved key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Navigate(ScreenId),
    Back,
    Exit,
}

/// Owns the single session and the registry it walks.
#[derive(Debug)]
pub struct UssdEngine {
    registry: MenuRegistry,
    session: Session,
    session_id: Uuid,
}

impl UssdEngine {
    /// Validate `registry` and dial in.
    pub fn new(registry: MenuRegistry) -> Result<Self, RegistryError> {
        registry.validate()?;
        let session_id = Uuid::new_v4();
        tracing::info!(session = %session_id, "USSD session opened");
        Ok(Self {
            registry,
            session: Session::new(),
            session_id,
        })
    }

    pub fn with_builtin_menu() -> Result<Self, RegistryError> {
        Self::new(MenuRegistry::builtin())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    pub fn current_screen(&self) -> &'static ScreenDefinition {
        self.registry.screen(self.session.current())
    }

    /// Submit a key typed by the subscriber.
    pub fn submit(&mut self, raw_key: &str) -> TransitionResult {
        self.session.clear_input();
        let key = normalize_key(raw_key);
        let from = self.session.current();

        let Some(transition) = self.resolve(key) else {
            tracing::debug!(session = %self.session_id, screen = %from, key, "Invalid selection");
            return TransitionResult::InvalidSelection;
        };

        let result = match transition {
            Transition::Navigate(to) => {
                self.session.push(to);
                TransitionResult::Navigated { from, to }
            }
            Transition::Back => TransitionResult::WentBack {
                to: self.session.pop(),
            },
            Transition::Exit => {
                self.terminate();
                TransitionResult::SessionTerminated
            }
        };
        tracing::debug!(
            session = %self.session_id,
            screen = %from,
            key,
            ?result,
            depth = self.session.history().len(),
            "Transition applied"
        );
        result
    }

    /// Submit whatever is in the pending input buffer.
    pub fn submit_pending(&mut self) -> TransitionResult {
        let key = self.session.take_input();
        self.submit(&key)
    }

    /// Home button: back to welcome with no history.
    pub fn reset(&mut self) {
        self.session.clear();
        tracing::debug!(session = %self.session_id, "Session reset to welcome");
    }

    /// Dedicated back button. Does nothing when there is no history.
    pub fn go_back_one_step(&mut self) {
        if self.session.history().is_empty() {
            return;
        }
        let to = self.session.pop();
        tracing::debug!(session = %self.session_id, screen = %to, "Stepped back");
    }

    pub fn push_input(&mut self, ch: char) -> bool {
        self.session.push_input(ch)
    }

    pub fn pop_input(&mut self) -> Option<char> {
        self.session.pop_input()
    }

    /// Titles from welcome to the current screen.
    pub fn breadcrumb(&self) -> Vec<&'static str> {
        self.breadcrumb_screens()
            .map(|id| self.registry.screen(id).title)
            .collect()
    }

    /// Screens from welcome to the current screen.
    pub fn breadcrumb_screens(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.session
            .history()
            .iter()
            .copied()
            .chain(std::iter::once(self.session.current()))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    /// Table lookup plus the structural back override for key `0`.
    fn resolve(&self, key: &str) -> Option<Transition> {
        let current = self.session.current();
        let option = self.registry.screen(current).option(key)?;

        if key == BACK_KEY && current != ScreenId::Welcome {
            return Some(Transition::Back);
        }

        Some(match option.target {
            Target::Screen(id) => Transition::Navigate(id),
            Target::Back => Transition::Back,
            Target::Exit => Transition::Exit,
        })
    }

    fn terminate(&mut self) {
        tracing::info!(session = %self.session_id, "USSD session terminated");
        self.session.clear();
        self.session_id = Uuid::new_v4();
        tracing::info!(session = %self.session_id, "USSD session opened");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> UssdEngine {
        UssdEngine::with_builtin_menu().expect("builtin menu is valid")
    }

    #[test]
    fn zero_off_welcome_ignores_declared_target() {
        // Faith Paths declares 0 -> welcome as a forward move; the engine pops instead.
        let mut engine = engine();
        engine.submit("2");
        engine.submit("1");
        assert_eq!(
            engine.submit("0"),
            TransitionResult::WentBack {
                to: ScreenId::FaithPaths
            }
        );
        assert_eq!(engine.session().history(), &[ScreenId::Welcome]);
    }

    #[test]
    fn exit_issues_new_session_id() {
        let mut engine = engine();
        let before = engine.session_id();
        assert_eq!(engine.submit("0"), TransitionResult::SessionTerminated);
        assert_ne!(engine.session_id(), before);
    }

    #[test]
    fn submit_pending_consumes_buffer() {
        let mut engine = engine();
        assert!(engine.push_input('7'));
        assert_eq!(
            engine.submit_pending(),
            TransitionResult::Navigated {
                from: ScreenId::Welcome,
                to: ScreenId::Events
            }
        );
        assert!(engine.session().pending_input().is_empty());
    }

    #[test]
    fn submit_pending_with_empty_buffer_is_invalid() {
        let mut engine = engine();
        assert_eq!(engine.submit_pending(), TransitionResult::InvalidSelection);
        assert_eq!(engine.session().current(), ScreenId::Welcome);
    }
}
