//! Headless presentation and notification adapters.
//!
//! Both keep the full picture a real surface would show, plus a call log,
//! so tests and terminal demos can inspect exactly what the coordinator did.

use super::{NotificationPort, PresentationPort, Severity, TokenHandle};
use crate::core::{DisplaySnapshot, Label, ModeDescription, Slot, EMPTY_MARKER};

/// A token currently drawn in the bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedToken {
    pub handle: TokenHandle,
    pub label: Label,
    pub entering: bool,
    pub leaving: bool,
    pub peeked: bool,
}

/// One call received by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Render(TokenHandle, Slot),
    MarkEntering(TokenHandle),
    ClearEntering(TokenHandle),
    MarkLeaving(TokenHandle),
    Detach(TokenHandle),
    MarkPeeked(TokenHandle),
    ClearPeeked(TokenHandle),
    ClearTokens,
    SetInteractive(bool),
    SetInput(String),
    Metrics(DisplaySnapshot),
    Recent(String, String),
    ModeDescription(ModeDescription),
}

/// In-memory presentation surface.
///
/// `tokens` is kept in visual order, first child first, honoring the
/// [`Slot`] every render asks for.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    tokens: Vec<RenderedToken>,
    next_handle: u64,
    interactive: bool,
    input: String,
    metrics: Option<DisplaySnapshot>,
    last_added: String,
    last_removed: String,
    description: Option<ModeDescription>,
    detached: Vec<RenderedToken>,
    calls: Vec<SurfaceCall>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            next_handle: 1,
            interactive: true,
            input: String::new(),
            metrics: None,
            last_added: EMPTY_MARKER.to_string(),
            last_removed: EMPTY_MARKER.to_string(),
            description: None,
            detached: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Tokens in visual order.
    pub fn tokens(&self) -> &[RenderedToken] {
        &self.tokens
    }

    /// Token labels in visual order.
    pub fn visual_labels(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn token(&self, handle: TokenHandle) -> Option<&RenderedToken> {
        self.tokens.iter().find(|t| t.handle == handle)
    }

    /// Tokens removed by `detach_token`, oldest first.
    pub fn detached(&self) -> &[RenderedToken] {
        &self.detached
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Simulate the user typing into the input field.
    pub fn type_input(&mut self, value: &str) {
        self.input = value.to_string();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn metrics(&self) -> Option<&DisplaySnapshot> {
        self.metrics.as_ref()
    }

    pub fn last_added(&self) -> &str {
        &self.last_added
    }

    pub fn last_removed(&self) -> &str {
        &self.last_removed
    }

    pub fn description(&self) -> Option<&ModeDescription> {
        self.description.as_ref()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    fn token_mut(&mut self, handle: TokenHandle) -> Option<&mut RenderedToken> {
        self.tokens.iter_mut().find(|t| t.handle == handle)
    }
}

impl PresentationPort for RecordingSurface {
    fn render_token(&mut self, label: &Label, slot: Slot) -> TokenHandle {
        let handle = TokenHandle(self.next_handle);
        self.next_handle += 1;

        let token = RenderedToken {
            handle,
            label: label.clone(),
            entering: false,
            leaving: false,
            peeked: false,
        };
        match slot {
            Slot::First => self.tokens.insert(0, token),
            Slot::Last => self.tokens.push(token),
        }
        self.calls.push(SurfaceCall::Render(handle, slot));
        handle
    }

    fn mark_entering(&mut self, token: TokenHandle) {
        if let Some(t) = self.token_mut(token) {
            t.entering = true;
        }
        self.calls.push(SurfaceCall::MarkEntering(token));
    }

    fn clear_entering(&mut self, token: TokenHandle) {
        if let Some(t) = self.token_mut(token) {
            t.entering = false;
        }
        self.calls.push(SurfaceCall::ClearEntering(token));
    }

    fn mark_leaving(&mut self, token: TokenHandle) {
        if let Some(t) = self.token_mut(token) {
            t.leaving = true;
        }
        self.calls.push(SurfaceCall::MarkLeaving(token));
    }

    fn detach_token(&mut self, token: TokenHandle) {
        if let Some(index) = self.tokens.iter().position(|t| t.handle == token) {
            let removed = self.tokens.remove(index);
            self.detached.push(removed);
        }
        self.calls.push(SurfaceCall::Detach(token));
    }

    fn mark_peeked(&mut self, token: TokenHandle) {
        if let Some(t) = self.token_mut(token) {
            t.peeked = true;
        }
        self.calls.push(SurfaceCall::MarkPeeked(token));
    }

    fn clear_peeked(&mut self, token: TokenHandle) {
        if let Some(t) = self.token_mut(token) {
            t.peeked = false;
        }
        self.calls.push(SurfaceCall::ClearPeeked(token));
    }

    fn clear_tokens(&mut self) {
        self.tokens.clear();
        self.calls.push(SurfaceCall::ClearTokens);
    }

    fn set_interactive_enabled(&mut self, enabled: bool) {
        self.interactive = enabled;
        self.calls.push(SurfaceCall::SetInteractive(enabled));
    }

    fn set_input_value(&mut self, value: &str) {
        self.input = value.to_string();
        self.calls.push(SurfaceCall::SetInput(value.to_string()));
    }

    fn update_metrics(&mut self, snapshot: &DisplaySnapshot) {
        self.metrics = Some(snapshot.clone());
        self.calls.push(SurfaceCall::Metrics(snapshot.clone()));
    }

    fn update_recent(&mut self, last_added: &str, last_removed: &str) {
        self.last_added = last_added.to_string();
        self.last_removed = last_removed.to_string();
        self.calls.push(SurfaceCall::Recent(
            last_added.to_string(),
            last_removed.to_string(),
        ));
    }

    fn update_mode_description(&mut self, description: &ModeDescription) {
        self.description = Some(description.clone());
        self.calls
            .push(SurfaceCall::ModeDescription(description.clone()));
    }
}

/// A notice as it was shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    /// Cleared once an error notice has expired.
    pub styled: bool,
}

/// In-memory notification surface.
#[derive(Clone, Debug, Default)]
pub struct NoticeLog {
    shown: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self { shown: Vec::new() }
    }

    /// The notice currently on screen.
    pub fn current(&self) -> Option<&Notice> {
        self.shown.last()
    }

    /// Every notice in display order.
    pub fn shown(&self) -> &[Notice] {
        &self.shown
    }

    pub fn messages(&self) -> Vec<&str> {
        self.shown.iter().map(|n| n.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.shown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

impl NotificationPort for NoticeLog {
    fn show(&mut self, message: &str, severity: Severity) {
        self.shown.push(Notice {
            message: message.to_string(),
            severity,
            styled: true,
        });
    }

    fn expire_error(&mut self) {
        if let Some(current) = self.shown.last_mut() {
            if current.severity == Severity::Error {
                current.styled = false;
            }
        }
    }
}
