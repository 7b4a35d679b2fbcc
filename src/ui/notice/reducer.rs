use crate::ui::mvi::Reducer;
use crate::ui::notice::intent::NoticeIntent;
use crate::ui::notice::state::NoticeState;

/// Ticks an invalid-option flash stays on screen.
pub const FLASH_TICKS: u8 = 4;

pub struct NoticeReducer;

impl Reducer for NoticeReducer {
    type State = NoticeState;
    type Intent = NoticeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NoticeIntent::SessionTerminated { message } => NoticeState::Terminated { message },
            NoticeIntent::InvalidSelection { key } => match state {
                // A pending exit message outranks the flash
                terminated @ NoticeState::Terminated { .. } => terminated,
                _ => NoticeState::InvalidSelection {
                    key,
                    ticks_left: FLASH_TICKS,
                },
            },
            NoticeIntent::Dismiss => NoticeState::Hidden,
            NoticeIntent::Tick => match state {
                NoticeState::InvalidSelection { ticks_left, .. } if ticks_left <= 1 => {
                    NoticeState::Hidden
                }
                NoticeState::InvalidSelection { key, ticks_left } => {
                    NoticeState::InvalidSelection {
                        key,
                        ticks_left: ticks_left - 1,
                    }
                }
                other => other,
            },
        }
    }
}
