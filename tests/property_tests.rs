//! Property-based tests for the coordinator.
//!
//! These tests use proptest to drive random request sequences and check
//! that the bucket invariants hold after every step.

use bucketviz::builder::{headless, HeadlessCoordinator};
use bucketviz::config::VisualizerConfig;
use bucketviz::core::{Label, Mode, Phase};
use proptest::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug)]
enum Request {
    Add(String),
    Remove,
    Peek,
    Reset,
    Switch(Mode),
    Wait(u64),
}

prop_compose! {
    fn arbitrary_label()(text in "[ a-z0-9]{0,4}") -> String {
        text
    }
}

fn arbitrary_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Stack), Just(Mode::Queue)]
}

fn arbitrary_request() -> impl Strategy<Value = Request> {
    prop_oneof![
        4 => arbitrary_label().prop_map(Request::Add),
        3 => Just(Request::Remove),
        1 => Just(Request::Peek),
        1 => Just(Request::Reset),
        1 => arbitrary_mode().prop_map(Request::Switch),
        4 => (0u64..1200).prop_map(Request::Wait),
    ]
}

fn coordinator(capacity: usize) -> HeadlessCoordinator {
    headless(VisualizerConfig {
        capacity,
        ..VisualizerConfig::default()
    })
    .unwrap()
}

fn apply(c: &mut HeadlessCoordinator, request: &Request) {
    match request {
        Request::Add(raw) => {
            c.request_add(raw);
        }
        Request::Remove => {
            c.request_remove();
        }
        Request::Peek => {
            c.request_peek();
        }
        Request::Reset => {
            c.request_reset();
        }
        Request::Switch(mode) => {
            c.request_switch_mode(*mode);
        }
        Request::Wait(ms) => {
            c.advance(Duration::from_millis(*ms));
        }
    }
}

fn settle(c: &mut HeadlessCoordinator) {
    c.advance(Duration::from_millis(600));
}

fn labels(c: &HeadlessCoordinator) -> Vec<String> {
    c.labels().map(Label::to_string).collect()
}

proptest! {
    #[test]
    fn length_never_exceeds_capacity(
        capacity in 1usize..6,
        requests in prop::collection::vec(arbitrary_request(), 0..60)
    ) {
        let mut c = coordinator(capacity);
        for request in &requests {
            apply(&mut c, request);
            prop_assert!(c.len() <= c.capacity());
            prop_assert_eq!(c.capacity(), capacity);
        }
    }

    #[test]
    fn rendered_tokens_match_labels_once_settled(
        requests in prop::collection::vec(arbitrary_request(), 0..60)
    ) {
        let mut c = coordinator(5);
        for request in &requests {
            apply(&mut c, request);
        }
        settle(&mut c);

        let mut visual: Vec<String> = c
            .presentation()
            .tokens()
            .iter()
            .map(|t| t.label.to_string())
            .collect();
        // Queue tokens are prepended, so visual order runs tail to head.
        if c.mode() == Mode::Queue {
            visual.reverse();
        }
        prop_assert_eq!(visual, labels(&c));
    }

    #[test]
    fn stack_removes_in_reverse_insertion_order(
        items in prop::collection::vec("[a-z]{1,3}", 1..=8)
    ) {
        let mut c = coordinator(8);
        for item in &items {
            prop_assert!(c.request_add(item).is_accepted());
            settle(&mut c);
        }

        let mut removed = Vec::new();
        for _ in 0..items.len() {
            let outcome = c.request_remove();
            removed.push(outcome.label().unwrap().to_string());
            settle(&mut c);
        }

        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(removed, expected);
        prop_assert!(c.is_empty());
    }

    #[test]
    fn queue_removes_in_insertion_order(
        items in prop::collection::vec("[a-z]{1,3}", 1..=8)
    ) {
        let mut c = coordinator(8);
        c.request_switch_mode(Mode::Queue);
        for item in &items {
            prop_assert!(c.request_add(item).is_accepted());
            settle(&mut c);
        }

        let mut removed = Vec::new();
        for _ in 0..items.len() {
            let outcome = c.request_remove();
            removed.push(outcome.label().unwrap().to_string());
            settle(&mut c);
        }

        prop_assert_eq!(removed, items);
    }

    #[test]
    fn detached_token_always_carries_removed_label(
        mode in arbitrary_mode(),
        items in prop::collection::vec("[a-z]{1,3}", 1..=8)
    ) {
        let mut c = coordinator(8);
        c.request_switch_mode(mode);
        for item in &items {
            c.request_add(item);
            settle(&mut c);
        }

        for _ in 0..items.len() {
            let removed = c.request_remove().label().unwrap().to_string();
            settle(&mut c);
            let detached = c.presentation().detached().last().unwrap();
            prop_assert_eq!(detached.label.to_string(), removed);
        }
    }

    #[test]
    fn animating_requests_change_nothing(
        first in "[a-z]{1,3}",
        requests in prop::collection::vec(arbitrary_request(), 1..20)
    ) {
        let mut c = coordinator(8);
        c.request_add(&first);
        prop_assert_eq!(c.phase(), Phase::Animating);

        let before = labels(&c);
        let notices = c.notifications().len();
        let mode = c.mode();

        for request in requests.iter().filter(|r| !matches!(r, Request::Wait(_))) {
            apply(&mut c, request);
        }

        prop_assert_eq!(labels(&c), before);
        prop_assert_eq!(c.notifications().len(), notices);
        prop_assert_eq!(c.mode(), mode);
        prop_assert_eq!(c.phase(), Phase::Animating);
    }

    #[test]
    fn reset_is_idempotent(
        requests in prop::collection::vec(arbitrary_request(), 0..30)
    ) {
        let mut c = coordinator(4);
        for request in &requests {
            apply(&mut c, request);
        }
        settle(&mut c);

        c.request_reset();
        let once = (c.snapshot(), c.phase(), c.mode());
        c.request_reset();
        let twice = (c.snapshot(), c.phase(), c.mode());

        prop_assert_eq!(once, twice);
        prop_assert!(c.is_empty());
        prop_assert_eq!(c.phase(), Phase::Idle);
        prop_assert!(c.last_added().is_none());
        prop_assert!(c.last_removed().is_none());
    }
}
