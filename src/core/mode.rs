//! Structure modes and the end-selection policy.
//!
//! A [`Mode`] decides which end of the bucket every operation touches.
//! [`ends_for`] is the single place that mapping lives; the coordinator
//! never branches on the mode to pick an end itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The active data structure.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Last In, First Out.
    #[default]
    Stack,
    /// First In, First Out.
    Queue,
}

impl Mode {
    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }

    /// Capitalized noun used in notices ("Stack is full!").
    pub fn noun(self) -> &'static str {
        match self {
            Self::Stack => "Stack",
            Self::Queue => "Queue",
        }
    }

    /// Past-tense verb for a settled insertion.
    pub fn inserted_verb(self) -> &'static str {
        match self {
            Self::Stack => "pushed",
            Self::Queue => "enqueued",
        }
    }

    /// Past-tense verb for a settled removal.
    pub fn removed_verb(self) -> &'static str {
        match self {
            Self::Stack => "popped",
            Self::Queue => "dequeued",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown mode '{0}', expected 'stack' or 'queue'")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" => Ok(Self::Stack),
            "queue" => Ok(Self::Queue),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Logical end of the ordered collection.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    /// Earliest-added side.
    Head,
    /// Most-recently-added side.
    Tail,
}

/// Visual position a freshly rendered token takes among its siblings.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Before every existing token (prepend).
    First,
    /// After every existing token (append).
    Last,
}

/// Which ends a mode touches, and where new tokens are drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModeEnds {
    pub insert: End,
    pub remove: End,
    pub peek: End,
    pub render_slot: Slot,
}

/// Pure mapping from mode to collection ends.
///
/// Stack touches the tail for everything. Queue inserts at the tail and
/// removes/peeks at the head. Queue tokens are prepended visually, so the
/// logical head is always the visually last token.
///
/// # Example
///
/// ```rust
/// use bucketviz::core::{ends_for, End, Mode, Slot};
///
/// let queue = ends_for(Mode::Queue);
/// assert_eq!(queue.insert, End::Tail);
/// assert_eq!(queue.remove, End::Head);
/// assert_eq!(queue.render_slot, Slot::First);
/// ```
pub fn ends_for(mode: Mode) -> ModeEnds {
    match mode {
        Mode::Stack => ModeEnds {
            insert: End::Tail,
            remove: End::Tail,
            peek: End::Tail,
            render_slot: Slot::Last,
        },
        Mode::Queue => ModeEnds {
            insert: End::Tail,
            remove: End::Head,
            peek: End::Head,
            render_slot: Slot::First,
        },
    }
}

/// Descriptive text a surface shows for the active mode.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ModeDescription {
    pub mode: Mode,
    pub title: String,
    pub description: String,
    pub add_action: String,
    pub remove_action: String,
}

impl ModeDescription {
    pub fn for_mode(mode: Mode) -> Self {
        let (description, add_action, remove_action) = match mode {
            Mode::Stack => ("Last In, First Out (LIFO)", "Push to top", "Pop from top"),
            Mode::Queue => (
                "First In, First Out (FIFO)",
                "Enqueue to rear",
                "Dequeue from front",
            ),
        };
        Self {
            mode,
            title: mode.noun().to_string(),
            description: description.to_string(),
            add_action: add_action.to_string(),
            remove_action: remove_action.to_string(),
        }
    }
}
