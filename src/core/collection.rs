//! Bounded ordered collection backing both structures.

use super::label::Label;
use super::mode::End;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Default bucket capacity.
pub const DEFAULT_CAPACITY: usize = 8;

/// Errors raised by collection primitives.
///
/// Callers are expected to check [`BoundedCollection::is_full`] and
/// [`BoundedCollection::is_empty`] first; these are precondition failures,
/// not a control path.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CollectionError {
    #[error("Collection is at capacity ({capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Collection is empty")]
    EmptyCollection,
}

/// Ordered items with a fixed upper bound.
///
/// Items are labels unless the caller pairs them with extra data. Insertion
/// always happens at the tail. Removal and peeking take an
/// [`End`], which is how one structure serves as both stack and queue.
///
/// # Example
///
/// ```rust
/// use bucketviz::core::{BoundedCollection, End, Label};
///
/// let mut bucket: BoundedCollection = BoundedCollection::new(2);
/// bucket.insert(Label::parse("a").unwrap()).unwrap();
/// bucket.insert(Label::parse("b").unwrap()).unwrap();
/// assert!(bucket.is_full());
///
/// assert_eq!(bucket.remove_at(End::Head).unwrap().as_str(), "a");
/// assert_eq!(bucket.peek_at(End::Tail).unwrap().as_str(), "b");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoundedCollection<T = Label> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for BoundedCollection<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> BoundedCollection<T> {
    /// Create an empty collection. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn insert(&mut self, item: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push_back(item);
        Ok(())
    }

    pub fn remove_at(&mut self, end: End) -> Result<T, CollectionError> {
        let removed = match end {
            End::Head => self.items.pop_front(),
            End::Tail => self.items.pop_back(),
        };
        removed.ok_or(CollectionError::EmptyCollection)
    }

    pub fn peek_at(&self, end: End) -> Result<&T, CollectionError> {
        let peeked = match end {
            End::Head => self.items.front(),
            End::Tail => self.items.back(),
        };
        peeked.ok_or(CollectionError::EmptyCollection)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Items from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
