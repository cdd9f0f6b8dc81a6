//! Builder API for ergonomic coordinator construction.

pub mod coordinator;
pub mod error;

pub use coordinator::CoordinatorBuilder;
pub use error::BuildError;

use crate::config::VisualizerConfig;
use crate::coordinator::OperationCoordinator;
use crate::ports::{ManualTimer, NoticeLog, RecordingSurface};

/// Coordinator wired to the in-memory adapters.
pub type HeadlessCoordinator = OperationCoordinator<RecordingSurface, NoticeLog, ManualTimer>;

/// Build a coordinator backed by the headless adapters.
///
/// # Example
///
/// ```
/// use bucketviz::builder::headless;
/// use bucketviz::config::VisualizerConfig;
/// use std::time::Duration;
///
/// let mut coordinator = headless(VisualizerConfig::default()).unwrap();
/// coordinator.request_add("A");
/// coordinator.request_add("B"); // dropped: "A" is still animating
/// coordinator.advance(Duration::from_millis(600));
///
/// assert_eq!(coordinator.len(), 1);
/// ```
pub fn headless(config: VisualizerConfig) -> Result<HeadlessCoordinator, BuildError> {
    CoordinatorBuilder::new()
        .config(config)
        .presentation(RecordingSurface::new())
        .notifications(NoticeLog::new())
        .timer(ManualTimer::new())
        .build()
}
