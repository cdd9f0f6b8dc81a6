//! Build errors for the coordinator builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when assembling a coordinator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Presentation port not specified. Call .presentation(port) before .build()")]
    MissingPresentation,

    #[error("Notification port not specified. Call .notifications(port) before .build()")]
    MissingNotifications,

    #[error("Timer port not specified. Call .timer(port) before .build()")]
    MissingTimer,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
