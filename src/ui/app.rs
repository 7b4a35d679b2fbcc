use crate::config::Config;
use crate::ui::mvi::Reducer;
use crate::ui::notice::{NoticeIntent, NoticeReducer, NoticeState};
use crate::ussd::{TransitionResult, UssdEngine};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The simulated handset: owns the engine and the notice overlay.
pub struct App {
    should_quit: bool,
    engine: UssdEngine,
    notice: NoticeState,
    config: Config,
}

impl App {
    pub fn new(config: Config, engine: UssdEngine) -> Self {
        Self {
            should_quit: false,
            engine,
            notice: NoticeState::default(),
            config,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn engine(&self) -> &UssdEngine {
        &self.engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn notice(&self) -> &NoticeState {
        &self.notice
    }

    pub fn notice_is_modal(&self) -> bool {
        self.notice.is_modal()
    }

    pub fn type_char(&mut self, ch: char) {
        self.engine.push_input(ch);
    }

    pub fn backspace(&mut self) {
        self.engine.pop_input();
    }

    /// Send the pending input, like pressing the call key.
    pub fn send(&mut self) -> TransitionResult {
        let key = self.engine.session().pending_input().to_string();
        let result = self.engine.submit_pending();
        match result {
            TransitionResult::InvalidSelection => {
                dispatch_mvi!(self, notice, NoticeReducer, NoticeIntent::InvalidSelection { key });
            }
            TransitionResult::SessionTerminated => {
                let message = self.config.session.exit_notice.clone();
                dispatch_mvi!(
                    self,
                    notice,
                    NoticeReducer,
                    NoticeIntent::SessionTerminated { message }
                );
            }
            TransitionResult::Navigated { .. } | TransitionResult::WentBack { .. } => {
                self.clear_flash();
            }
        }
        result
    }

    pub fn go_back(&mut self) {
        self.engine.go_back_one_step();
        self.clear_flash();
    }

    pub fn go_home(&mut self) {
        self.engine.reset();
        self.clear_flash();
    }

    pub fn dismiss_notice(&mut self) {
        dispatch_mvi!(self, notice, NoticeReducer, NoticeIntent::Dismiss);
    }

    pub fn on_tick(&mut self) {
        dispatch_mvi!(self, notice, NoticeReducer, NoticeIntent::Tick);
    }

    fn clear_flash(&mut self) {
        if matches!(self.notice, NoticeState::InvalidSelection { .. }) {
            self.dismiss_notice();
        }
    }
}
