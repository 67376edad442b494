//! Narration gateway: the consumed voice interface and the bounded-wait
//! wrapper the orchestrator actually awaits on.

pub mod announcer;
pub mod dictation;

pub use announcer::{Announcer, Narrator, SilentNarrator, NARRATION_CAP};
pub use dictation::{Dictation, DictationError};
