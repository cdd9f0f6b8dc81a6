//! Results of user requests.

use crate::core::{Label, Mode};
use thiserror::Error;

/// Expected, user-facing rejections.
///
/// The `Display` text is exactly what the notification surface shows.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OperationError {
    #[error("Please enter a value")]
    BlankInput,

    #[error("{} is full!", .mode.noun())]
    Full { mode: Mode },

    #[error("{} is empty!", .mode.noun())]
    Empty { mode: Mode },
}

/// What became of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// The request ran. Carries the label added, removed, or peeked.
    Accepted(Option<Label>),
    /// Ignored without notice: the lock was held or nothing would change.
    Dropped,
    /// Refused with an error notice.
    Rejected(OperationError),
}

impl RequestOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::Dropped)
    }

    /// Label carried by an accepted request.
    pub fn label(&self) -> Option<&Label> {
        match self {
            Self::Accepted(label) => label.as_ref(),
            _ => None,
        }
    }
}
