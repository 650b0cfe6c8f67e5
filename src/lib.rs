pub mod config;
pub mod core;

pub use crate::config::SessionConfig;
pub use crate::core::converter::convert;
pub use crate::core::hangul_fsm::{Action, CompositionError, HangulAutomata, State};
pub use crate::core::jamo_mapper::KeyState;
pub use crate::core::session::InputSession;
