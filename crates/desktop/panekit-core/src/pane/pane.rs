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

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use super::{
    config::{PaneMode, PaneProps},
    state::{PaneState, cycle_state},
    view::PaneView,
};
use crate::{
    document::{Document, Subscription},
    key::Key,
    state_cell::{StateCell, state_cell},
};

struct PaneInner {
    props:    PaneProps,
    cell:     Box<dyn StateCell<PaneState>>,
    document: Document,
    escape:   Option<Subscription>,
    mounted:  bool,
}

impl PaneInner {
    fn wants_escape_listener(&self) -> bool {
        self.mounted && self.props.mode == PaneMode::Temporary && self.cell.get() != PaneState::Closed
    }
}

/// A mounted pane.
///
/// Cloning yields another handle to the same pane. Callbacks run after the
/// pane's internal borrow is released, so a handler may call back into the
/// pane (typically [`Pane::set_controlled_state`]).
#[derive(Clone)]
pub struct Pane {
    inner: Rc<RefCell<PaneInner>>,
}

impl Pane {
    pub fn mount(props: PaneProps, document: &Document) -> Self {
        let default_state = props.default_state;
        let cell = state_cell(props.state, || default_state);
        tracing::debug!(
            position = %props.position,
            mode = %props.mode,
            controlled = cell.is_controlled(),
            state = %cell.get(),
            "mounting pane"
        );

        let pane = Self {
            inner: Rc::new(RefCell::new(PaneInner {
                props,
                cell,
                document: document.clone(),
                escape: None,
                mounted: true,
            })),
        };
        pane.sync_escape_listener();
        pane
    }

    fn from_weak(weak: &Weak<RefCell<PaneInner>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    /// The state currently rendered.
    pub fn state(&self) -> PaneState { self.inner.borrow().cell.get() }

    pub fn is_controlled(&self) -> bool { self.inner.borrow().cell.is_controlled() }

    pub fn is_mounted(&self) -> bool { self.inner.borrow().mounted }

    /// Handle click. Returns `false` when no handle is shown.
    pub fn activate_handle(&self) -> bool {
        let next = {
            let inner = self.inner.borrow();
            if !inner.mounted || !inner.props.show_handle() {
                tracing::trace!("handle activation ignored, no handle shown");
                return false;
            }
            cycle_state(inner.cell.get(), inner.props.partial_content)
        };
        self.set_state(next);
        true
    }

    /// Backdrop click. Only a visible backdrop of an overlay pane receives
    /// clicks.
    pub fn click_backdrop(&self) -> bool {
        let visible = {
            let inner = self.inner.borrow();
            inner.mounted && inner.props.show_backdrop() && inner.cell.get() != PaneState::Closed
        };
        if !visible {
            tracing::trace!("backdrop click ignored, backdrop not visible");
            return false;
        }
        self.dismiss();
        true
    }

    /// Requests `closed` regardless of the current state.
    pub fn dismiss(&self) {
        if self.is_mounted() {
            self.set_state(PaneState::Closed);
        }
    }

    /// Feeds a new value from the owner of a controlled pane. Ignored for
    /// uncontrolled panes. Returns whether the rendered state changed.
    pub fn set_controlled_state(&self, state: PaneState) -> bool {
        let changed = self.inner.borrow_mut().cell.sync(state);
        if changed {
            tracing::debug!(%state, "controlled pane state updated");
            self.sync_escape_listener();
        }
        changed
    }

    /// Whether an Escape listener is currently registered on the document.
    pub fn has_escape_listener(&self) -> bool { self.inner.borrow().escape.is_some() }

    /// Tears the pane down, releasing every document listener. Further
    /// interaction is ignored.
    pub fn unmount(&self) {
        let escape = {
            let mut inner = self.inner.borrow_mut();
            inner.mounted = false;
            inner.escape.take()
        };
        drop(escape);
        tracing::debug!("pane unmounted");
    }

    /// Describes what the renderer should draw for the current state.
    pub fn view(&self) -> PaneView {
        let inner = self.inner.borrow();
        PaneView::build(&inner.props, inner.cell.get())
    }

    fn set_state(&self, next: PaneState) {
        let (changed, handler) = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.cell.request(next);
            (changed, inner.props.on_state_change.clone())
        };
        tracing::debug!(%next, changed, "pane state requested");
        if changed {
            self.sync_escape_listener();
        }
        if let Some(handler) = handler {
            handler(next);
        }
    }

    fn sync_escape_listener(&self) {
        let mut inner = self.inner.borrow_mut();
        let wanted = inner.wants_escape_listener();
        if wanted && inner.escape.is_none() {
            let weak = Rc::downgrade(&self.inner);
            let subscription = inner.document.key_down_target().subscribe(move |key| {
                if *key != Key::Escape {
                    return;
                }
                if let Some(pane) = Self::from_weak(&weak) {
                    tracing::debug!("escape pressed, dismissing pane");
                    pane.dismiss();
                }
            });
            inner.escape = Some(subscription);
            tracing::trace!("escape listener registered");
        } else if !wanted {
            if let Some(subscription) = inner.escape.take() {
                drop(inner);
                drop(subscription);
                tracing::trace!("escape listener removed");
            }
        }
    }
}

impl fmt::Debug for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Pane")
            .field("props", &inner.props)
            .field("state", &inner.cell.get())
            .field("controlled", &inner.cell.is_controlled())
            .field("escape_listener", &inner.escape.is_some())
            .field("mounted", &inner.mounted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::pane::PanePosition;

    fn recorder() -> (Rc<RefCell<Vec<PaneState>>>, impl Fn(PaneState) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |state| sink.borrow_mut().push(state))
    }

    #[test]
    fn uncontrolled_handle_updates_and_emits() {
        let document = Document::new();
        let (log, handler) = recorder();
        let pane = Pane::mount(PaneProps::new(PanePosition::Left).on_state_change(handler), &document);

        assert!(pane.activate_handle());
        assert_eq!(pane.state(), PaneState::Open);
        assert_eq!(*log.borrow(), vec![PaneState::Open]);
    }

    #[test]
    fn temporary_pane_without_handle_ignores_activation() {
        let document = Document::new();
        let pane = Pane::mount(
            PaneProps::new(PanePosition::Right).mode(PaneMode::Temporary),
            &document,
        );
        assert!(!pane.activate_handle());
        assert_eq!(pane.state(), PaneState::Closed);
    }

    #[test]
    fn handler_may_feed_state_back_synchronously() {
        let document = Document::new();
        let slot: Rc<RefCell<Option<Pane>>> = Rc::new(RefCell::new(None));
        let target = Rc::clone(&slot);
        let pane = Pane::mount(
            PaneProps::new(PanePosition::Left)
                .state(PaneState::Closed)
                .on_state_change(move |next| {
                    if let Some(pane) = target.borrow().as_ref() {
                        pane.set_controlled_state(next);
                    }
                }),
            &document,
        );
        *slot.borrow_mut() = Some(pane.clone());

        pane.activate_handle();
        assert_eq!(pane.state(), PaneState::Open);
        slot.borrow_mut().take();
    }

    #[test]
    fn unmount_releases_escape_listener() {
        let document = Document::new();
        let pane = Pane::mount(
            PaneProps::new(PanePosition::Right)
                .mode(PaneMode::Temporary)
                .default_state(PaneState::Open),
            &document,
        );
        assert!(pane.has_escape_listener());
        assert_eq!(document.listener_count(), 1);

        pane.unmount();
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.key_down(&Key::Escape), 0);
        assert_eq!(pane.state(), PaneState::Open);
    }

    #[test]
    fn dropping_last_handle_releases_escape_listener() {
        let document = Document::new();
        let pane = Pane::mount(
            PaneProps::new(PanePosition::Bottom)
                .mode(PaneMode::Temporary)
                .default_state(PaneState::Partial),
            &document,
        );
        assert_eq!(document.listener_count(), 1);
        drop(pane);
        assert_eq!(document.listener_count(), 0);
    }
}
