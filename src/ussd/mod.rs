//! USSD session simulator core.
//!
//! ```text
//! key ──→ UssdEngine::submit ──→ MenuRegistry lookup ──→ Navigate | Back | Exit
//!                                                             │
//!                          SessionSnapshot ←── Session ←──────┘
//! ```
//!
//! Everything here is synchronous and owns no I/O; adapters in `ui` and
//! `script` drive it.

pub mod engine;
pub mod input;
pub mod registry;
pub mod screen;
pub mod session;
pub mod snapshot;

pub use engine::{TransitionResult, UssdEngine};
pub use registry::{MenuRegistry, RegistryError};
pub use screen::{MenuOption, ScreenDefinition, ScreenId, Target};
pub use session::Session;
pub use snapshot::{OptionView, SessionSnapshot};
