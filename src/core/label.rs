//! Opaque token labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text carried by a token in the bucket.
///
/// Labels are immutable and never blank: construction trims surrounding
/// whitespace and refuses empty results. No numeric meaning is attached to
/// the contents.
///
/// # Example
///
/// ```rust
/// use bucketviz::core::Label;
///
/// let label = Label::parse("  42 ").unwrap();
/// assert_eq!(label.as_str(), "42");
/// assert!(Label::parse("   ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Trim `raw` and wrap it, or `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
