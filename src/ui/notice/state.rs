use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoticeState {
    #[default]
    Hidden,
    /// Modal. Stays until dismissed.
    Terminated { message: String },
    /// Non-modal hint under the input line.
    InvalidSelection { key: String, ticks_left: u8 },
}

impl UiState for NoticeState {}

impl NoticeState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether the notice swallows keypad input.
    pub fn is_modal(&self) -> bool {
        matches!(self, Self::Terminated { .. })
    }
}
