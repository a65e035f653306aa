//! Voice assistant state machine.

use serde::{Deserialize, Serialize};

/// Message shown while listening.
pub const LISTENING_MESSAGE: &str = "Listening... (demo mode)";
/// Message shown after a manual stop.
pub const STOPPED_MESSAGE: &str = "Stopped listening.";
/// Tip delivered when the listening window elapses.
pub const DEFAULT_ADVISORY_TIP: &str =
    "Suggested Tip: Irrigate wheat fields in the morning to retain moisture.";
/// Shown by the panel before any interaction.
pub const PLACEHOLDER_MESSAGE: &str = "Ask AgriMitra for crop tips, weather updates, and advice.";

/// Identifies one listening period. Increments on every start.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VoiceMode {
    #[default]
    Idle,
    Listening,
}

/// Outcome of a toggle, telling the caller what to do with the delay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    /// Listening started; a delay for `ticket` must be scheduled.
    Started { ticket: Ticket },
    /// Listening stopped by hand; the pending delay must be cancelled.
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceState {
    pub mode: VoiceMode,
    /// Empty until the first toggle.
    pub message: String,
    pub advisory_tip: String,
    ticket: Ticket,
}

impl Default for VoiceState {
    fn default() -> Self {
        Self::with_tip(DEFAULT_ADVISORY_TIP)
    }
}

impl VoiceState {
    pub fn with_tip(tip: impl Into<String>) -> Self {
        Self {
            mode: VoiceMode::Idle,
            message: String::new(),
            advisory_tip: tip.into(),
            ticket: 0,
        }
    }

    /// Flips between idle and listening.
    pub fn toggle(&mut self) -> VoiceTransition {
        match self.mode {
            VoiceMode::Idle => {
                self.ticket += 1;
                self.mode = VoiceMode::Listening;
                self.message = LISTENING_MESSAGE.to_string();
                VoiceTransition::Started {
                    ticket: self.ticket,
                }
            }
            VoiceMode::Listening => {
                self.mode = VoiceMode::Idle;
                self.message = STOPPED_MESSAGE.to_string();
                VoiceTransition::Stopped
            }
        }
    }

    /// Applies the delayed transition for `ticket`.
    ///
    /// Returns `false` and changes nothing when the ticket is stale or the
    /// assistant is no longer listening.
    pub fn delay_elapsed(&mut self, ticket: Ticket) -> bool {
        if self.mode != VoiceMode::Listening || ticket != self.ticket {
            return false;
        }
        self.mode = VoiceMode::Idle;
        self.message = self.advisory_tip.clone();
        true
    }

    pub fn is_listening(&self) -> bool {
        self.mode == VoiceMode::Listening
    }

    /// Text the panel should show.
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            PLACEHOLDER_MESSAGE
        } else {
            &self.message
        }
    }
}
