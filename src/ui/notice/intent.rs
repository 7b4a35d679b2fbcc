use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NoticeIntent {
    /// The subscriber exited from the welcome menu.
    SessionTerminated { message: String },
    /// A key matched no option on the current screen.
    InvalidSelection { key: String },
    /// Enter/Esc on a modal notice, or a successful transition.
    Dismiss,
    /// UI tick; ages the invalid-option flash.
    Tick,
}

impl Intent for NoticeIntent {}
