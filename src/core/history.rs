//! Lock transition history.
//!
//! Records every move between [`Phase::Idle`] and [`Phase::Animating`],
//! which operation caused it, and when.

use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The structural operation that drove a phase change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Remove,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Remove => f.write_str("remove"),
        }
    }
}

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// Operation that began or settled
    pub operation: OperationKind,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of phase changes.
///
/// `record` returns a new history and leaves the receiver untouched.
/// `push` appends in place. A history built with [`with_limit`] keeps
/// only the most recent transitions.
///
/// [`with_limit`]: PhaseHistory::with_limit
///
/// # Example
///
/// ```rust
/// use bucketviz::core::{OperationKind, Phase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new().record(PhaseTransition {
///     from: Phase::Idle,
///     to: Phase::Animating,
///     operation: OperationKind::Add,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&Phase::Idle, &Phase::Animating]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: Vec<PhaseTransition>,
    #[serde(default)]
    limit: Option<usize>,
}

impl PhaseHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// History that retains at most `limit` transitions (minimum 1),
    /// dropping the oldest first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::with_capacity(limit.max(1)),
            limit: Some(limit.max(1)),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: PhaseTransition) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append a transition in place, evicting the oldest past the limit.
    pub fn push(&mut self, transition: PhaseTransition) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            if excess > 0 {
                self.transitions.drain(..excess);
            }
        }
    }

    /// Forget every transition. The limit is kept.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Phases traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// Number of operations that have run to completion.
    pub fn settled_count(&self, operation: OperationKind) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.operation == operation && t.to == Phase::Idle)
            .count()
    }

    pub fn transitions(&self) -> &[PhaseTransition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&PhaseTransition> {
        self.transitions.last()
    }
}
