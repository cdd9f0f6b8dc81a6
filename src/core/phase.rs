//! Coordinator phases and the animation lock.

use super::guard::Guard;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the coordinator in its two-state cycle.
///
/// `Idle` accepts requests. `Animating` spans from the moment an add or
/// remove is accepted until its settle event has been handled. There is no
/// terminal phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Animating,
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Animating => "Animating",
        }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Animating)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The gate every structural request passes through.
///
/// ```rust
/// use bucketviz::core::{animation_lock, Phase};
///
/// let lock = animation_lock();
/// assert!(lock.check(&Phase::Idle));
/// assert!(!lock.check(&Phase::Animating));
/// ```
pub fn animation_lock() -> Guard<Phase> {
    Guard::new(|phase: &Phase| !phase.is_locked())
}
