//! Builder for assembling a coordinator.

use crate::builder::error::BuildError;
use crate::config::VisualizerConfig;
use crate::coordinator::OperationCoordinator;
use crate::core::Mode;
use crate::ports::{NotificationPort, PresentationPort, TimerPort};

/// Fluent construction of an [`OperationCoordinator`].
///
/// The configuration is validated on `build`, so a coordinator built this
/// way never runs with a zero capacity or a zero delay.
pub struct CoordinatorBuilder<P, N, T> {
    config: VisualizerConfig,
    presentation: Option<P>,
    notifications: Option<N>,
    timer: Option<T>,
}

impl<P, N, T> CoordinatorBuilder<P, N, T>
where
    P: PresentationPort,
    N: NotificationPort,
    T: TimerPort,
{
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: VisualizerConfig::default(),
            presentation: None,
            notifications: None,
            timer: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: VisualizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the bucket capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the starting mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.initial_mode = mode;
        self
    }

    /// Set the presentation port (required).
    pub fn presentation(mut self, port: P) -> Self {
        self.presentation = Some(port);
        self
    }

    /// Set the notification port (required).
    pub fn notifications(mut self, port: N) -> Self {
        self.notifications = Some(port);
        self
    }

    /// Set the timer port (required).
    pub fn timer(mut self, port: T) -> Self {
        self.timer = Some(port);
        self
    }

    /// Build the coordinator.
    /// Returns an error if a port is missing or the configuration is invalid.
    pub fn build(self) -> Result<OperationCoordinator<P, N, T>, BuildError> {
        let presentation = self.presentation.ok_or(BuildError::MissingPresentation)?;
        let notifications = self.notifications.ok_or(BuildError::MissingNotifications)?;
        let timer = self.timer.ok_or(BuildError::MissingTimer)?;
        let config = self.config.validated()?;

        Ok(OperationCoordinator::new(
            config,
            presentation,
            notifications,
            timer,
        ))
    }
}

impl<P, N, T> Default for CoordinatorBuilder<P, N, T>
where
    P: PresentationPort,
    N: NotificationPort,
    T: TimerPort,
{
    fn default() -> Self {
        Self::new()
    }
}
