//! The operation coordinator: the imperative shell around the pure core.
//!
//! # Key Concepts
//!
//! - **Lock**: `Idle` accepts requests, `Animating` drops them silently
//! - **Two-phase mutation**: data changes on acceptance, visuals and
//!   notices settle after a fixed delay
//! - **Explicit continuations**: the settle step travels through the
//!   timer port as a [`TimerEvent`] value and comes back via
//!   [`OperationCoordinator::handle_timer`]
//!
//! # Example
//!
//! ```rust
//! use bucketviz::config::VisualizerConfig;
//! use bucketviz::coordinator::OperationCoordinator;
//! use bucketviz::core::Phase;
//! use bucketviz::ports::{ManualTimer, NoticeLog, RecordingSurface};
//! use std::time::Duration;
//!
//! let mut coordinator = OperationCoordinator::new(
//!     VisualizerConfig::default(),
//!     RecordingSurface::new(),
//!     NoticeLog::new(),
//!     ManualTimer::new(),
//! );
//!
//! coordinator.request_add("A");
//! assert_eq!(coordinator.phase(), Phase::Animating);
//!
//! coordinator.advance(Duration::from_millis(600));
//! assert_eq!(coordinator.phase(), Phase::Idle);
//! assert_eq!(
//!     coordinator.notifications().current().unwrap().message,
//!     "A pushed successfully"
//! );
//! ```

mod machine;
mod outcome;
mod pending;

pub use machine::OperationCoordinator;
pub use outcome::{OperationError, RequestOutcome};
pub use pending::{NoticeId, PendingOperation, TimerEvent};
