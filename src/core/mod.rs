//! Pure data model for the bucket.
//!
//! Nothing in this module touches a port or a timer:
//! - labels and the bounded collection
//! - modes and the end-selection policy
//! - the phase lock and its history
//! - derived display metrics

mod collection;
mod guard;
mod history;
mod label;
mod mode;
mod phase;
mod snapshot;

pub use collection::{BoundedCollection, CollectionError, DEFAULT_CAPACITY};
pub use guard::Guard;
pub use history::{OperationKind, PhaseHistory, PhaseTransition};
pub use label::Label;
pub use mode::{ends_for, End, Mode, ModeDescription, ModeEnds, Slot, UnknownMode};
pub use phase::{animation_lock, Phase};
pub use snapshot::{DisplaySnapshot, EMPTY_MARKER};
