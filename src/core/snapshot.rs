//! Derived display metrics.

use super::collection::BoundedCollection;
use super::label::Label;
use super::mode::{ends_for, Mode};
use serde::{Deserialize, Serialize};

/// Placeholder shown wherever no label applies.
pub const EMPTY_MARKER: &str = "-";

/// Metrics a surface shows after every committed mutation.
///
/// Never stored; always recomputed from the collection and mode.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    pub size: usize,
    /// `"size/capacity"`
    pub capacity_label: String,
    /// Label at the peek end, or `"-"` when empty.
    pub top_or_front: String,
}

impl DisplaySnapshot {
    pub fn new(size: usize, capacity: usize, top_or_front: Option<&Label>) -> Self {
        Self {
            size,
            capacity_label: format!("{size}/{capacity}"),
            top_or_front: top_or_front
                .map(Label::to_string)
                .unwrap_or_else(|| EMPTY_MARKER.to_string()),
        }
    }

    /// Metrics for a plain label collection under `mode`.
    pub fn capture(collection: &BoundedCollection, mode: Mode) -> Self {
        Self::new(
            collection.len(),
            collection.capacity(),
            collection.peek_at(ends_for(mode).peek).ok(),
        )
    }
}
