// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{cell::RefCell, rc::Rc};

use panekit_core::{
    Document, Key, Pane, PaneBehavior, PaneMode, PanePosition, PaneProps, PaneState,
};

fn recorder() -> (Rc<RefCell<Vec<PaneState>>>, impl Fn(PaneState) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |state| sink.borrow_mut().push(state))
}

#[test]
fn handle_cycles_between_closed_and_open_without_partial_content() {
    let document = Document::new();
    let pane = Pane::mount(PaneProps::new(PanePosition::Left), &document);

    let visited: Vec<PaneState> = (0..4)
        .map(|_| {
            pane.activate_handle();
            pane.state()
        })
        .collect();
    assert_eq!(
        visited,
        vec![PaneState::Open, PaneState::Closed, PaneState::Open, PaneState::Closed]
    );
}

#[test]
fn handle_runs_the_three_cycle_with_partial_content() {
    let document = Document::new();
    let pane = Pane::mount(
        PaneProps::new(PanePosition::Left).partial_content(true),
        &document,
    );

    let visited: Vec<PaneState> = (0..6)
        .map(|_| {
            pane.activate_handle();
            pane.state()
        })
        .collect();
    assert_eq!(
        visited,
        vec![
            PaneState::Partial,
            PaneState::Open,
            PaneState::Closed,
            PaneState::Partial,
            PaneState::Open,
            PaneState::Closed,
        ]
    );
}

#[test]
fn controlled_handle_click_only_reports() {
    let document = Document::new();
    let (log, handler) = recorder();
    let pane = Pane::mount(
        PaneProps::new(PanePosition::Right)
            .state(PaneState::Closed)
            .partial_content(true)
            .on_state_change(handler),
        &document,
    );
    let before = pane.view();

    assert!(pane.activate_handle());
    assert!(pane.activate_handle());
    assert_eq!(pane.view(), before);
    assert_eq!(*log.borrow(), vec![PaneState::Partial, PaneState::Partial]);

    assert!(pane.set_controlled_state(PaneState::Partial));
    pane.activate_handle();
    assert_eq!(log.borrow().last(), Some(&PaneState::Open));
    assert_eq!(pane.state(), PaneState::Partial);
}

#[test]
fn uncontrolled_pane_ignores_controlled_values() {
    let document = Document::new();
    let pane = Pane::mount(
        PaneProps::new(PanePosition::Left).default_state(PaneState::Open),
        &document,
    );
    assert!(!pane.is_controlled());
    assert!(!pane.set_controlled_state(PaneState::Closed));
    assert_eq!(pane.state(), PaneState::Open);
}

#[test]
fn aria_expanded_and_handle_label_track_state() {
    let document = Document::new();
    for (state, label) in [
        (PaneState::Closed, "Open pane"),
        (PaneState::Partial, "Expand pane"),
        (PaneState::Open, "Close pane"),
    ] {
        let pane = Pane::mount(
            PaneProps::new(PanePosition::Top)
                .partial_content(true)
                .default_state(state),
            &document,
        );
        let view = pane.view();
        assert_eq!(view.aria_expanded, state != PaneState::Closed);
        assert_eq!(view.handle.map(|handle| handle.aria_label), Some(label));
    }
}

#[test]
fn escape_closes_open_temporary_pane() {
    let document = Document::new();
    let (log, handler) = recorder();
    let pane = Pane::mount(
        PaneProps::new(PanePosition::Right)
            .mode(PaneMode::Temporary)
            .default_state(PaneState::Open)
            .on_state_change(handler),
        &document,
    );

    document.key_down(&Key::ArrowDown);
    assert_eq!(pane.state(), PaneState::Open);

    document.key_down(&Key::Escape);
    assert_eq!(pane.state(), PaneState::Closed);
    assert_eq!(*log.borrow(), vec![PaneState::Closed]);
    assert!(!pane.has_escape_listener());
}

#[test]
fn escape_never_touches_permanent_panes() {
    let document = Document::new();
    for state in [PaneState::Closed, PaneState::Partial, PaneState::Open] {
        let pane = Pane::mount(
            PaneProps::new(PanePosition::Left)
                .partial_content(true)
                .default_state(state),
            &document,
        );
        assert!(!pane.has_escape_listener());
        assert_eq!(document.key_down(&Key::Escape), 0);
        assert_eq!(pane.state(), state);
    }
}

#[test]
fn no_escape_listener_while_temporary_pane_is_closed() {
    let document = Document::new();
    let pane = Pane::mount(
        PaneProps::new(PanePosition::Right)
            .mode(PaneMode::Temporary)
            .handle(true),
        &document,
    );
    assert_eq!(document.listener_count(), 0);

    pane.activate_handle();
    assert_eq!(document.listener_count(), 1);
    pane.activate_handle();
    assert_eq!(document.listener_count(), 0);
}

#[test]
fn repeated_cycles_do_not_leak_listeners() {
    let document = Document::new();
    let pane = Pane::mount(
        PaneProps::new(PanePosition::Bottom)
            .mode(PaneMode::Temporary)
            .handle(true),
        &document,
    );
    for _ in 0..50 {
        pane.activate_handle();
        assert_eq!(document.listener_count(), 1);
        document.key_down(&Key::Escape);
        assert_eq!(document.listener_count(), 0);
    }
}

#[test]
fn controlled_temporary_pane_follows_owner_for_listener() {
    let document = Document::new();
    let (log, handler) = recorder();
    let pane = Pane::mount(
        PaneProps::new(PanePosition::Right)
            .mode(PaneMode::Temporary)
            .state(PaneState::Open)
            .on_state_change(handler),
        &document,
    );
    assert!(pane.has_escape_listener());

    document.key_down(&Key::Escape);
    assert_eq!(*log.borrow(), vec![PaneState::Closed]);
    assert_eq!(pane.state(), PaneState::Open);
    assert!(pane.has_escape_listener());

    pane.set_controlled_state(PaneState::Closed);
    assert!(!pane.has_escape_listener());
    assert_eq!(document.listener_count(), 0);
}

#[test]
fn backdrop_click_always_closes() {
    let document = Document::new();
    for state in [PaneState::Partial, PaneState::Open] {
        let pane = Pane::mount(
            PaneProps::new(PanePosition::Left)
                .mode(PaneMode::Temporary)
                .partial_content(true)
                .default_state(state),
            &document,
        );
        assert!(pane.view().backdrop.visible);
        assert!(pane.click_backdrop());
        assert_eq!(pane.state(), PaneState::Closed);
        assert!(!pane.view().backdrop.visible);
    }
}

#[test]
fn backdrop_is_inert_for_push_panes_and_when_disabled() {
    let document = Document::new();
    let push = Pane::mount(
        PaneProps::new(PanePosition::Left).default_state(PaneState::Open),
        &document,
    );
    assert!(!push.click_backdrop());
    assert_eq!(push.state(), PaneState::Open);

    let no_backdrop = Pane::mount(
        PaneProps::new(PanePosition::Left)
            .behavior(PaneBehavior::Overlay)
            .backdrop(false)
            .default_state(PaneState::Open),
        &document,
    );
    assert!(!no_backdrop.click_backdrop());
    assert_eq!(no_backdrop.state(), PaneState::Open);
}

#[test]
fn temporary_pane_opens_by_handle_and_closes_by_backdrop() {
    let document = Document::new();
    let (log, handler) = recorder();
    let pane = Pane::mount(
        PaneProps::new(PanePosition::Right)
            .mode(PaneMode::Temporary)
            .handle(true)
            .default_state(PaneState::Closed)
            .on_state_change(handler),
        &document,
    );

    pane.activate_handle();
    assert_eq!(pane.state(), PaneState::Open);
    assert!(pane.view().classes.contains("pane--open"));

    pane.click_backdrop();
    assert_eq!(pane.state(), PaneState::Closed);
    assert_eq!(*log.borrow(), vec![PaneState::Open, PaneState::Closed]);
    assert_eq!(document.listener_count(), 0);
}
