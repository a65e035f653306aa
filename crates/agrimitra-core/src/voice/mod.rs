//! Voice assistant module.
//!
//! Simulated listening cycle: a toggle starts listening, and a single delayed
//! transition returns to idle with an advisory tip unless the user stops first.

mod model;

pub use model::{
    DEFAULT_ADVISORY_TIP, LISTENING_MESSAGE, PLACEHOLDER_MESSAGE, STOPPED_MESSAGE, Ticket,
    VoiceMode, VoiceState, VoiceTransition,
};
