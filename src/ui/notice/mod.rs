//! Notices raised by session outcomes: the exit message and the
//! invalid-option flash.

mod intent;
mod reducer;
mod state;

pub use intent::NoticeIntent;
pub use reducer::{NoticeReducer, FLASH_TICKS};
pub use state::NoticeState;
