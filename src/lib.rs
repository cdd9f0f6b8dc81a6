//! Bucketviz: an animated stack and queue teaching engine
//!
//! Bucketviz follows a "pure core, imperative shell" layout. The data model
//! (labels, the bounded bucket, mode policy, the phase lock) is pure and
//! side-effect free. The coordinator is the shell: it drives rendering,
//! notices and timers through ports the host supplies.
//!
//! # Core Concepts
//!
//! - **Mode**: stack (LIFO) or queue (FIFO), mapped to collection ends by
//!   a single pure policy
//! - **Lock**: add and remove hold the coordinator in `Animating` until
//!   their settle event arrives; requests meanwhile are dropped
//! - **Two-phase mutation**: data changes the instant a request is
//!   accepted, visuals and notices settle after a fixed delay
//! - **Ports**: presentation, notification and timer collaborators are
//!   traits, with headless adapters included
//!
//! # Example
//!
//! ```rust
//! use bucketviz::builder::headless;
//! use bucketviz::config::VisualizerConfig;
//! use bucketviz::core::Mode;
//! use std::time::Duration;
//!
//! let mut viz = headless(VisualizerConfig::default()).unwrap();
//! viz.request_switch_mode(Mode::Queue);
//!
//! for label in ["A", "B"] {
//!     viz.request_add(label);
//!     viz.advance(Duration::from_millis(600));
//! }
//!
//! let removed = viz.request_remove();
//! assert_eq!(removed.label().unwrap().as_str(), "A");
//! assert_eq!(viz.snapshot().top_or_front, "B");
//! ```

pub mod builder;
pub mod config;
pub mod coordinator;
pub mod core;
pub mod ports;

// Re-export commonly used types
pub use crate::config::VisualizerConfig;
pub use crate::coordinator::{OperationCoordinator, OperationError, RequestOutcome};
pub use crate::core::{BoundedCollection, DisplaySnapshot, Label, Mode, Phase};
