//! Deferred work handed to the timer.

use crate::core::{Label, Mode, OperationKind};
use crate::ports::TokenHandle;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sequence number of a shown notice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct NoticeId(pub u64);

/// An add or remove whose data change is already committed and whose
/// visual finalization is still outstanding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Correlates the settle event with the operation that scheduled it.
    pub id: Uuid,
    pub kind: OperationKind,
    /// Label inserted or removed.
    pub label: Label,
    /// Token rendered for an add, or marked leaving for a remove.
    pub token: TokenHandle,
    /// Mode in force when the operation began.
    pub mode: Mode,
}

impl PendingOperation {
    pub(crate) fn new(kind: OperationKind, label: Label, token: TokenHandle, mode: Mode) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            label,
            token,
            mode,
        }
    }
}

/// Continuations the coordinator schedules through the timer port.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Second phase of an add or remove.
    Settle(PendingOperation),
    /// End of a peek highlight.
    ClearPeek(TokenHandle),
    /// End of an error notice's styling.
    ExpireNotice(NoticeId),
}
