//! Guard predicates that decide whether a request may proceed.
//!
//! Guards are pure boolean functions over a state value. The coordinator
//! evaluates one before every structural request and drops the request when
//! it fails.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate over a state value.
///
/// Cloning a guard shares the predicate.
///
/// # Example
///
/// ```rust
/// use bucketviz::core::{Guard, Phase};
///
/// let idle_only = Guard::new(|p: &Phase| matches!(p, Phase::Idle));
///
/// assert!(idle_only.check(&Phase::Idle));
/// assert!(!idle_only.check(&Phase::Animating));
/// ```
pub struct Guard<S> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and side-effect free.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check whether the guard admits this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<S> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
