//! Collaborator interfaces the coordinator drives.
//!
//! The coordinator owns one implementation of each port and calls into it;
//! it never renders, displays, or sleeps on its own. Hosts supply real
//! adapters (a GUI, a terminal, an async runtime). The headless adapters in
//! this module are enough to run the engine deterministically.
//!
//! # Visual slot contract
//!
//! [`PresentationPort::render_token`] receives the [`Slot`] the new token
//! must occupy. Stack tokens are appended, queue tokens are prepended, so
//! the queue front is always the visually last token. Removal never relies
//! on that convention: the coordinator hands back the exact
//! [`TokenHandle`] it was given when the removed label was rendered.

mod manual_timer;
mod recording;

pub use manual_timer::ManualTimer;
pub use recording::{Notice, NoticeLog, RecordingSurface, RenderedToken, SurfaceCall};

use crate::coordinator::TimerEvent;
use crate::core::{DisplaySnapshot, Label, ModeDescription, Slot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identifies one rendered token for the lifetime of its element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TokenHandle(pub u64);

impl fmt::Display for TokenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token#{}", self.0)
    }
}

/// Styling level for a status notice.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
}

/// Renders tokens and the surrounding controls.
pub trait PresentationPort {
    /// Draw a new token for `label` at `slot` and return its handle.
    fn render_token(&mut self, label: &Label, slot: Slot) -> TokenHandle;
    fn mark_entering(&mut self, token: TokenHandle);
    fn clear_entering(&mut self, token: TokenHandle);
    fn mark_leaving(&mut self, token: TokenHandle);
    /// Remove the token's element. Unknown handles are ignored.
    fn detach_token(&mut self, token: TokenHandle);
    fn mark_peeked(&mut self, token: TokenHandle);
    fn clear_peeked(&mut self, token: TokenHandle);
    /// Remove every rendered token.
    fn clear_tokens(&mut self);
    /// Enable or disable the add/remove/peek/reset controls and the input.
    fn set_interactive_enabled(&mut self, enabled: bool);
    fn set_input_value(&mut self, value: &str);
    fn update_metrics(&mut self, snapshot: &DisplaySnapshot);
    fn update_recent(&mut self, last_added: &str, last_removed: &str);
    fn update_mode_description(&mut self, description: &ModeDescription);
}

/// Shows a transient status line.
pub trait NotificationPort {
    /// Replace the current notice.
    fn show(&mut self, message: &str, severity: Severity);
    /// Drop the error styling from the notice currently shown.
    fn expire_error(&mut self);
}

/// Fire-once delayed delivery of coordinator events.
///
/// When the delay elapses the host must pass `event` back to
/// [`OperationCoordinator::handle_timer`](crate::coordinator::OperationCoordinator::handle_timer).
/// No cancellation is required.
pub trait TimerPort {
    fn after(&mut self, delay: Duration, event: TimerEvent);
}
