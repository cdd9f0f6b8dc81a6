//! The operation state machine.

use crate::config::VisualizerConfig;
use crate::coordinator::outcome::{OperationError, RequestOutcome};
use crate::coordinator::pending::{NoticeId, PendingOperation, TimerEvent};
use crate::core::{
    animation_lock, ends_for, BoundedCollection, DisplaySnapshot, Guard, Label, Mode,
    ModeDescription, OperationKind, Phase, PhaseHistory, PhaseTransition, EMPTY_MARKER,
};
use crate::ports::{
    ManualTimer, NotificationPort, PresentationPort, Severity, TimerPort, TokenHandle,
};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// A label together with the token drawn for it.
///
/// Storing both in one collection entry means the token detached on
/// removal is always the one rendered for the removed label.
#[derive(Clone, Debug)]
struct Entry {
    label: Label,
    token: TokenHandle,
}

/// Coordinates user requests against the bucket.
///
/// Add and remove follow a two-phase protocol: the collection changes the
/// moment a request is accepted, then a settle event scheduled through the
/// [`TimerPort`] finalizes visuals and notices. The coordinator stays in
/// [`Phase::Animating`] between the two, and every structural request that
/// arrives meanwhile is dropped.
pub struct OperationCoordinator<P, N, T> {
    config: VisualizerConfig,
    mode: Mode,
    entries: BoundedCollection<Entry>,
    phase: Phase,
    lock: Guard<Phase>,
    in_flight: Option<PendingOperation>,
    last_added: Option<Label>,
    last_removed: Option<Label>,
    history: PhaseHistory,
    next_notice: u64,
    error_notice: Option<NoticeId>,
    presentation: P,
    notifications: N,
    timer: T,
}

impl<P, N, T> OperationCoordinator<P, N, T>
where
    P: PresentationPort,
    N: NotificationPort,
    T: TimerPort,
{
    /// Create an idle coordinator with an empty bucket.
    ///
    /// `config` is not validated here; use
    /// [`CoordinatorBuilder`](crate::builder::CoordinatorBuilder) for that.
    /// A zero `capacity` or `history_limit` is raised to 1, and the stored
    /// config reflects the raised values.
    ///
    /// Nothing is sent to the ports until the first request or
    /// [`sync_surface`](Self::sync_surface).
    pub fn new(
        mut config: VisualizerConfig,
        presentation: P,
        notifications: N,
        timer: T,
    ) -> Self {
        let entries = BoundedCollection::new(config.capacity);
        let history = PhaseHistory::with_limit(config.history_limit);
        config.capacity = entries.capacity();
        config.history_limit = history.limit().unwrap_or(config.history_limit);

        Self {
            mode: config.initial_mode,
            entries,
            phase: Phase::Idle,
            lock: animation_lock(),
            in_flight: None,
            last_added: None,
            last_removed: None,
            history,
            next_notice: 0,
            error_notice: None,
            config,
            presentation,
            notifications,
            timer,
        }
    }

    /// Push the full current state to a freshly attached surface.
    pub fn sync_surface(&mut self) {
        self.presentation
            .update_mode_description(&ModeDescription::for_mode(self.mode));
        self.publish();
        self.presentation
            .set_interactive_enabled(!self.phase.is_locked());
    }

    /// Insert `raw` (trimmed) at the insertion end.
    pub fn request_add(&mut self, raw: &str) -> RequestOutcome {
        if !self.lock.check(&self.phase) {
            trace!(phase = %self.phase, "add dropped");
            return RequestOutcome::Dropped;
        }

        let Some(label) = Label::parse(raw) else {
            return self.reject(OperationError::BlankInput);
        };

        if self.entries.is_full() {
            self.presentation.set_input_value("");
            return self.reject(OperationError::Full { mode: self.mode });
        }

        let ends = ends_for(self.mode);
        let token = self.presentation.render_token(&label, ends.render_slot);
        let entry = Entry {
            label: label.clone(),
            token,
        };
        if let Err(err) = self.entries.insert(entry) {
            warn!(%err, "insert refused after capacity check");
            self.presentation.detach_token(token);
            self.presentation.set_input_value("");
            return self.reject(OperationError::Full { mode: self.mode });
        }

        self.enter(OperationKind::Add);
        self.presentation.mark_entering(token);

        let pending = PendingOperation::new(OperationKind::Add, label.clone(), token, self.mode);
        debug!(id = %pending.id, label = %label, mode = %self.mode, "add accepted");
        self.schedule_settle(pending);

        RequestOutcome::Accepted(Some(label))
    }

    /// Remove the label at the removal end.
    pub fn request_remove(&mut self) -> RequestOutcome {
        if !self.lock.check(&self.phase) {
            trace!(phase = %self.phase, "remove dropped");
            return RequestOutcome::Dropped;
        }

        let ends = ends_for(self.mode);
        let Ok(entry) = self.entries.remove_at(ends.remove) else {
            return self.reject(OperationError::Empty { mode: self.mode });
        };

        self.enter(OperationKind::Remove);
        self.presentation.mark_leaving(entry.token);

        let pending = PendingOperation::new(
            OperationKind::Remove,
            entry.label.clone(),
            entry.token,
            self.mode,
        );
        debug!(id = %pending.id, label = %entry.label, mode = %self.mode, "remove accepted");
        self.schedule_settle(pending);

        RequestOutcome::Accepted(Some(entry.label))
    }

    /// Highlight the label at the peek end.
    ///
    /// Refused while animating, but never takes the lock itself.
    pub fn request_peek(&mut self) -> RequestOutcome {
        if !self.lock.check(&self.phase) {
            trace!(phase = %self.phase, "peek dropped");
            return RequestOutcome::Dropped;
        }

        let ends = ends_for(self.mode);
        let Ok(entry) = self.entries.peek_at(ends.peek) else {
            return self.reject(OperationError::Empty { mode: self.mode });
        };
        let (label, token) = (entry.label.clone(), entry.token);

        self.presentation.mark_peeked(token);
        self.timer
            .after(self.config.peek_highlight(), TimerEvent::ClearPeek(token));
        self.notify(&format!("Peek: {label}"), Severity::Warning);

        RequestOutcome::Accepted(Some(label))
    }

    /// Empty the bucket and forget recent labels.
    pub fn request_reset(&mut self) -> RequestOutcome {
        if !self.lock.check(&self.phase) {
            trace!(phase = %self.phase, "reset dropped");
            return RequestOutcome::Dropped;
        }

        self.reset_contents();
        RequestOutcome::Accepted(None)
    }

    /// Switch structure. Resets the bucket.
    pub fn request_switch_mode(&mut self, mode: Mode) -> RequestOutcome {
        if !self.lock.check(&self.phase) || mode == self.mode {
            trace!(phase = %self.phase, current = %self.mode, requested = %mode, "mode switch dropped");
            return RequestOutcome::Dropped;
        }

        self.mode = mode;
        self.reset_contents();
        self.presentation
            .update_mode_description(&ModeDescription::for_mode(mode));
        info!(%mode, "mode switched");
        self.notify(
            &format!("Switched to {} mode", mode.id().to_uppercase()),
            Severity::Success,
        );

        RequestOutcome::Accepted(None)
    }

    /// Deliver an event previously handed to the timer port.
    pub fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Settle(pending) => self.settle(pending),
            TimerEvent::ClearPeek(token) => {
                if self.is_drawn(token) {
                    self.presentation.clear_peeked(token);
                } else {
                    trace!(%token, "peek highlight outlived its token");
                }
            }
            TimerEvent::ExpireNotice(id) => {
                if self.error_notice == Some(id) {
                    self.notifications.expire_error();
                    self.error_notice = None;
                }
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_locked()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Labels from head to tail.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.entries.iter().map(|e| &e.label)
    }

    /// Label at the peek end under the current mode.
    pub fn top_or_front(&self) -> Option<&Label> {
        self.entries
            .peek_at(ends_for(self.mode).peek)
            .ok()
            .map(|e| &e.label)
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::new(self.len(), self.capacity(), self.top_or_front())
    }

    pub fn last_added(&self) -> Option<&Label> {
        self.last_added.as_ref()
    }

    pub fn last_removed(&self) -> Option<&Label> {
        self.last_removed.as_ref()
    }

    /// The add or remove awaiting its settle event.
    pub fn in_flight(&self) -> Option<&PendingOperation> {
        self.in_flight.as_ref()
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    pub fn notifications(&self) -> &N {
        &self.notifications
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn settle(&mut self, pending: PendingOperation) {
        let expected = self.in_flight.as_ref().map(|p| p.id);
        if expected != Some(pending.id) {
            warn!(id = %pending.id, ?expected, "stale settle event ignored");
            return;
        }

        let label = pending.label;
        match pending.kind {
            OperationKind::Add => {
                self.presentation.clear_entering(pending.token);
                self.notify(
                    &format!("{label} {} successfully", pending.mode.inserted_verb()),
                    Severity::Success,
                );
                self.last_added = Some(label);
                self.presentation.set_input_value("");
            }
            OperationKind::Remove => {
                self.presentation.detach_token(pending.token);
                self.notify(
                    &format!("{label} {} successfully", pending.mode.removed_verb()),
                    Severity::Success,
                );
                self.last_removed = Some(label);
            }
        }

        self.publish();
        self.presentation.set_interactive_enabled(true);
        self.leave(pending.kind);
        debug!(id = %pending.id, kind = %pending.kind, "operation settled");
    }

    fn reset_contents(&mut self) {
        self.entries.clear();
        self.presentation.clear_tokens();
        self.last_added = None;
        self.last_removed = None;
        self.history.clear();
        self.presentation.set_input_value("");
        self.publish();
        info!(mode = %self.mode, "bucket reset");
        self.notify("Reset completed", Severity::Success);
    }

    fn schedule_settle(&mut self, pending: PendingOperation) {
        self.in_flight = Some(pending.clone());
        self.timer
            .after(self.config.settle_delay(), TimerEvent::Settle(pending));
    }

    fn enter(&mut self, operation: OperationKind) {
        self.transition_to(Phase::Animating, operation);
        self.presentation.set_interactive_enabled(false);
    }

    fn leave(&mut self, operation: OperationKind) {
        self.in_flight = None;
        self.transition_to(Phase::Idle, operation);
    }

    fn transition_to(&mut self, to: Phase, operation: OperationKind) {
        self.history.push(PhaseTransition {
            from: self.phase,
            to,
            operation,
            timestamp: Utc::now(),
        });
        self.phase = to;
    }

    /// Whether `token` is still in the bucket, including one mid-removal.
    fn is_drawn(&self, token: TokenHandle) -> bool {
        self.entries.iter().any(|e| e.token == token)
            || self
                .in_flight
                .as_ref()
                .is_some_and(|p| p.kind == OperationKind::Remove && p.token == token)
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.presentation.update_metrics(&snapshot);

        let added = self.last_added.as_ref().map_or(EMPTY_MARKER, Label::as_str);
        let removed = self
            .last_removed
            .as_ref()
            .map_or(EMPTY_MARKER, Label::as_str);
        self.presentation.update_recent(added, removed);
    }

    fn reject(&mut self, error: OperationError) -> RequestOutcome {
        debug!(%error, mode = %self.mode, "request rejected");
        self.notify(&error.to_string(), Severity::Error);
        RequestOutcome::Rejected(error)
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        let id = NoticeId(self.next_notice);
        self.next_notice += 1;
        self.notifications.show(message, severity);

        if severity == Severity::Error {
            self.error_notice = Some(id);
            self.timer
                .after(self.config.error_notice(), TimerEvent::ExpireNotice(id));
        } else {
            self.error_notice = None;
        }
    }
}

impl<P, N> OperationCoordinator<P, N, ManualTimer>
where
    P: PresentationPort,
    N: NotificationPort,
{
    /// Move virtual time forward by `by`, delivering every event that
    /// falls due, including ones scheduled by handlers along the way.
    /// Returns how many events fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let deadline = self.timer.now() + by;
        let mut fired = 0;
        while let Some(event) = self.timer.pop_due(deadline) {
            self.handle_timer(event);
            fired += 1;
        }
        self.timer.advance_to(deadline);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{NoticeLog, RecordingSurface, SurfaceCall};

    type TestCoordinator = OperationCoordinator<RecordingSurface, NoticeLog, ManualTimer>;

    fn coordinator() -> TestCoordinator {
        OperationCoordinator::new(
            VisualizerConfig::default(),
            RecordingSurface::new(),
            NoticeLog::new(),
            ManualTimer::new(),
        )
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn labels(c: &TestCoordinator) -> Vec<&str> {
        c.labels().map(Label::as_str).collect()
    }

    #[test]
    fn starts_idle_and_empty() {
        let c = coordinator();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.mode(), Mode::Stack);
        assert!(c.is_empty());
        assert_eq!(c.capacity(), 8);
        assert!(c.presentation().calls().is_empty());
        assert!(c.notifications().is_empty());
    }

    #[test]
    fn add_mutates_immediately_and_locks() {
        let mut c = coordinator();

        let outcome = c.request_add("  A ");

        assert_eq!(outcome.label().map(Label::as_str), Some("A"));
        assert_eq!(labels(&c), vec!["A"]);
        assert_eq!(c.phase(), Phase::Animating);
        assert!(!c.presentation().is_interactive());
        assert!(c.presentation().tokens()[0].entering);
        assert!(c.notifications().is_empty());
        assert!(c.last_added().is_none());
    }

    #[test]
    fn add_settles_after_delay() {
        let mut c = coordinator();
        c.presentation_mut().type_input("A");
        c.request_add("A");

        c.advance(ms(599));
        assert_eq!(c.phase(), Phase::Animating);

        c.advance(ms(1));
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.presentation().is_interactive());
        assert!(!c.presentation().tokens()[0].entering);
        assert_eq!(c.presentation().input(), "");
        assert_eq!(c.last_added().map(Label::as_str), Some("A"));
        assert_eq!(
            c.notifications().current().unwrap().message,
            "A pushed successfully"
        );
        assert_eq!(c.presentation().metrics().unwrap().top_or_front, "A");
        assert_eq!(c.presentation().last_added(), "A");
    }

    #[test]
    fn queue_add_uses_enqueue_wording() {
        let mut c = coordinator();
        c.request_switch_mode(Mode::Queue);
        c.request_add("A");
        c.advance(ms(600));

        assert_eq!(
            c.notifications().current().unwrap().message,
            "A enqueued successfully"
        );
    }

    #[test]
    fn blank_add_is_rejected_without_locking() {
        let mut c = coordinator();

        let outcome = c.request_add("   ");

        assert_eq!(outcome, RequestOutcome::Rejected(OperationError::BlankInput));
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.is_empty());
        let notice = c.notifications().current().unwrap();
        assert_eq!(notice.message, "Please enter a value");
        assert_eq!(notice.severity, Severity::Error);
    }

    #[test]
    fn full_add_clears_input_and_reports() {
        let config = VisualizerConfig {
            capacity: 1,
            ..VisualizerConfig::default()
        };
        let mut c = OperationCoordinator::new(
            config,
            RecordingSurface::new(),
            NoticeLog::new(),
            ManualTimer::new(),
        );
        c.request_add("A");
        c.advance(ms(600));
        c.presentation_mut().type_input("B");

        let outcome = c.request_add("B");

        assert_eq!(
            outcome,
            RequestOutcome::Rejected(OperationError::Full { mode: Mode::Stack })
        );
        assert_eq!(c.presentation().input(), "");
        assert_eq!(c.len(), 1);
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.notifications().current().unwrap().message, "Stack is full!");
    }

    #[test]
    fn remove_detaches_token_on_settle() {
        let mut c = coordinator();
        c.request_add("A");
        c.advance(ms(600));

        let outcome = c.request_remove();
        assert_eq!(outcome.label().map(Label::as_str), Some("A"));
        assert!(c.is_empty());
        assert!(c.presentation().tokens()[0].leaving);
        assert_eq!(c.phase(), Phase::Animating);

        c.advance(ms(600));
        assert!(c.presentation().tokens().is_empty());
        assert_eq!(c.presentation().detached()[0].label.as_str(), "A");
        assert_eq!(c.last_removed().map(Label::as_str), Some("A"));
        assert_eq!(
            c.notifications().current().unwrap().message,
            "A popped successfully"
        );
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn remove_on_empty_is_rejected() {
        let mut c = coordinator();
        let outcome = c.request_remove();

        assert_eq!(
            outcome,
            RequestOutcome::Rejected(OperationError::Empty { mode: Mode::Stack })
        );
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.notifications().current().unwrap().message, "Stack is empty!");
    }

    #[test]
    fn requests_while_animating_are_dropped_silently() {
        let mut c = coordinator();
        c.request_add("A");
        let calls_before = c.presentation().calls().len();

        assert!(c.request_add("B").is_dropped());
        assert!(c.request_add("   ").is_dropped());
        assert!(c.request_remove().is_dropped());
        assert!(c.request_peek().is_dropped());
        assert!(c.request_reset().is_dropped());
        assert!(c.request_switch_mode(Mode::Queue).is_dropped());

        assert_eq!(labels(&c), vec!["A"]);
        assert_eq!(c.mode(), Mode::Stack);
        assert!(c.notifications().is_empty());
        assert_eq!(c.presentation().calls().len(), calls_before);
    }

    #[test]
    fn peek_highlights_without_locking() {
        let mut c = coordinator();
        c.request_add("A");
        c.advance(ms(600));
        c.request_add("B");
        c.advance(ms(600));

        let outcome = c.request_peek();

        assert_eq!(outcome.label().map(Label::as_str), Some("B"));
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.presentation().is_interactive());
        let notice = c.notifications().current().unwrap();
        assert_eq!(notice.message, "Peek: B");
        assert_eq!(notice.severity, Severity::Warning);

        let peeked: Vec<_> = c
            .presentation()
            .tokens()
            .iter()
            .filter(|t| t.peeked)
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(peeked, vec!["B"]);

        c.advance(ms(799));
        assert!(c.presentation().tokens().iter().any(|t| t.peeked));
        c.advance(ms(1));
        assert!(c.presentation().tokens().iter().all(|t| !t.peeked));
    }

    #[test]
    fn peek_highlight_skips_detached_token() {
        let mut c = coordinator();
        c.request_add("A");
        c.advance(ms(600));

        c.request_peek();
        c.advance(ms(100));
        c.request_remove();
        c.advance(ms(800));

        assert!(c.presentation().tokens().is_empty());
        let cleared = c
            .presentation()
            .calls()
            .iter()
            .any(|call| matches!(call, SurfaceCall::ClearPeeked(_)));
        assert!(!cleared);
    }

    #[test]
    fn reset_clears_everything() {
        let mut c = coordinator();
        c.request_add("A");
        c.advance(ms(600));
        c.request_add("B");
        c.advance(ms(600));
        c.request_remove();
        c.advance(ms(600));
        c.presentation_mut().type_input("draft");

        let outcome = c.request_reset();

        assert_eq!(outcome, RequestOutcome::Accepted(None));
        assert!(c.is_empty());
        assert!(c.presentation().tokens().is_empty());
        assert!(c.last_added().is_none());
        assert!(c.last_removed().is_none());
        assert_eq!(c.presentation().last_added(), "-");
        assert_eq!(c.presentation().last_removed(), "-");
        assert_eq!(c.presentation().metrics().unwrap().capacity_label, "0/8");
        assert_eq!(c.notifications().current().unwrap().message, "Reset completed");
        assert_eq!(c.presentation().input(), "");
        assert!(c.history().is_empty());
    }

    #[test]
    fn history_is_bounded_across_long_sessions() {
        let mut c = coordinator();
        for _ in 0..200 {
            c.request_add("A");
            c.advance(ms(600));
            c.request_remove();
            c.advance(ms(600));
        }

        assert_eq!(c.history().len(), c.config().history_limit);
        assert_eq!(c.history().last().unwrap().to, Phase::Idle);

        c.request_switch_mode(Mode::Queue);
        assert!(c.history().is_empty());
    }

    #[test]
    fn zero_capacity_config_is_raised_consistently() {
        let config = VisualizerConfig {
            capacity: 0,
            history_limit: 0,
            ..VisualizerConfig::default()
        };
        let c = OperationCoordinator::new(
            config,
            RecordingSurface::new(),
            NoticeLog::new(),
            ManualTimer::new(),
        );

        assert_eq!(c.capacity(), 1);
        assert_eq!(c.config().capacity, 1);
        assert_eq!(c.config().history_limit, 1);
        assert_eq!(c.snapshot().capacity_label, "0/1");
    }

    #[test]
    fn switch_mode_resets_and_describes() {
        let mut c = coordinator();
        c.request_add("A");
        c.advance(ms(600));

        c.request_switch_mode(Mode::Queue);

        assert_eq!(c.mode(), Mode::Queue);
        assert!(c.is_empty());
        assert_eq!(c.presentation().description().unwrap().title, "Queue");
        assert_eq!(
            c.notifications().messages(),
            vec![
                "A pushed successfully",
                "Reset completed",
                "Switched to QUEUE mode"
            ]
        );
    }

    #[test]
    fn switching_to_current_mode_is_dropped() {
        let mut c = coordinator();
        assert!(c.request_switch_mode(Mode::Stack).is_dropped());
        assert!(c.notifications().is_empty());
    }

    #[test]
    fn error_notice_expires_after_delay() {
        let mut c = coordinator();
        c.request_remove();

        c.advance(ms(2999));
        assert!(c.notifications().current().unwrap().styled);
        c.advance(ms(1));
        assert!(!c.notifications().current().unwrap().styled);
    }

    #[test]
    fn replaced_error_notice_is_not_expired_early() {
        let mut c = coordinator();
        c.request_remove();
        c.advance(ms(2000));
        c.request_peek();
        c.advance(ms(2000));

        let current = c.notifications().current().unwrap();
        assert_eq!(current.message, "Stack is empty!");
        assert!(current.styled);

        c.advance(ms(1000));
        assert!(!c.notifications().current().unwrap().styled);
    }

    #[test]
    fn stale_settle_event_is_ignored() {
        let mut c = coordinator();
        c.request_add("A");
        let pending = c.in_flight().cloned().unwrap();
        c.advance(ms(600));

        c.handle_timer(TimerEvent::Settle(pending));

        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.notifications().len(), 1);
    }

    #[test]
    fn history_records_each_lock_cycle() {
        let mut c = coordinator();
        c.request_add("A");
        c.advance(ms(600));
        c.request_remove();
        c.advance(ms(600));

        let path = c.history().get_path();
        assert_eq!(
            path,
            vec![
                &Phase::Idle,
                &Phase::Animating,
                &Phase::Idle,
                &Phase::Animating,
                &Phase::Idle
            ]
        );
        assert_eq!(c.history().settled_count(OperationKind::Add), 1);
        assert_eq!(c.history().settled_count(OperationKind::Remove), 1);
    }

    #[test]
    fn sync_surface_publishes_initial_state() {
        let mut c = coordinator();
        c.sync_surface();

        let surface = c.presentation();
        assert_eq!(surface.description().unwrap().title, "Stack");
        assert_eq!(surface.metrics().unwrap().capacity_label, "0/8");
        assert_eq!(surface.metrics().unwrap().top_or_front, "-");
        assert!(surface.is_interactive());
    }
}
