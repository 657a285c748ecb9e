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
    config::TabsProps,
    navigation::{self, KeyOutcome, Step},
    scroll::{Press, ScrollDirection, ScrollIndicators, ScrollState, ScrollViewport},
    view::TabsView,
};
use crate::{
    document::Document,
    key::Key,
    scheduler::Scheduler,
    state_cell::{StateCell, state_cell},
};

struct TabsInner {
    props:     TabsProps,
    cell:      Box<dyn StateCell<String>>,
    document:  Document,
    scheduler: Rc<dyn Scheduler>,
    focused:   Option<usize>,
    viewport:  Option<Rc<dyn ScrollViewport>>,
    /// Present exactly while the strip is scrollable and mounted.
    scroll:    Option<ScrollState>,
    mounted:   bool,
}

impl TabsInner {
    fn active_index(&self) -> Option<usize> {
        let value = self.cell.get();
        self.props.options.iter().position(|option| option.value == value)
    }
}

/// A mounted tab strip.
///
/// Cloning yields another handle to the same strip. `on_change` runs after
/// the strip's internal borrow is released.
#[derive(Clone)]
pub struct Tabs {
    inner: Rc<RefCell<TabsInner>>,
}

impl Tabs {
    pub fn mount(props: TabsProps, document: &Document, scheduler: Rc<dyn Scheduler>) -> Self {
        let initial = props.initial_value();
        let cell = state_cell(props.value.clone(), || initial);
        tracing::debug!(
            options = props.options.len(),
            orientation = %props.orientation,
            scrollable = props.scrollable,
            controlled = cell.is_controlled(),
            value = %cell.get(),
            "mounting tabs"
        );
        let scrollable = props.scrollable;

        let tabs = Self {
            inner: Rc::new(RefCell::new(TabsInner {
                props,
                cell,
                document: document.clone(),
                scheduler,
                focused: None,
                viewport: None,
                scroll: None,
                mounted: true,
            })),
        };
        if scrollable {
            tabs.start_scroll_tracking();
        }
        tabs
    }

    fn from_weak(weak: &Weak<RefCell<TabsInner>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn start_scroll_tracking(&self) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        let resize = inner.document.resize_target().subscribe(move |_| {
            if let Some(tabs) = Self::from_weak(&weak) {
                tabs.update_indicators();
            }
        });
        inner.scroll = Some(ScrollState {
            resize: Some(resize),
            ..ScrollState::default()
        });
    }

    /// The selected value, empty when nothing is selected.
    pub fn value(&self) -> String { self.inner.borrow().cell.get() }

    /// Index of the option matching the selected value.
    pub fn active_index(&self) -> Option<usize> { self.inner.borrow().active_index() }

    pub fn is_controlled(&self) -> bool { self.inner.borrow().cell.is_controlled() }

    /// Tab that last received focus through this strip.
    pub fn focused_index(&self) -> Option<usize> { self.inner.borrow().focused }

    /// Click on the tab carrying `value`. Returns `false` when the tab is
    /// unknown or disabled.
    pub fn select(&self, value: &str) -> bool {
        let index = {
            let inner = self.inner.borrow();
            if !inner.mounted {
                return false;
            }
            match inner.props.options.iter().position(|option| option.value == value) {
                Some(index) if inner.props.is_enabled(&inner.props.options[index]) => index,
                Some(_) => {
                    tracing::trace!(value, "selection of disabled tab ignored");
                    return false;
                }
                None => {
                    tracing::trace!(value, "selection of unknown tab ignored");
                    return false;
                }
            }
        };
        self.inner.borrow_mut().focused = Some(index);
        self.set_value(index);
        true
    }

    /// Key-down on the tab list.
    pub fn handle_key_down(&self, key: &Key) -> KeyOutcome {
        let (step, target, current) = {
            let inner = self.inner.borrow();
            if !inner.mounted {
                return KeyOutcome::Ignored;
            }
            let Some(step) = Step::from_key(key, inner.props.orientation) else {
                return KeyOutcome::Ignored;
            };
            let current = inner.active_index();
            let target = navigation::resolve(&inner.props.options, inner.props.disabled, current, step);
            (step, target, current)
        };

        let Some(index) = target else {
            tracing::trace!(?step, "no enabled tab to move to");
            return KeyOutcome::Handled;
        };
        let directional = matches!(step, Step::Next | Step::Previous);
        if directional && Some(index) == current {
            return KeyOutcome::Handled;
        }

        self.inner.borrow_mut().focused = Some(index);
        self.set_value(index);
        KeyOutcome::Moved { index }
    }

    /// Feeds a new value from the owner of a controlled strip. Ignored for
    /// uncontrolled strips. Returns whether the selection changed.
    pub fn set_controlled_value(&self, value: impl Into<String>) -> bool {
        let value = value.into();
        let changed = self.inner.borrow_mut().cell.sync(value);
        if changed {
            tracing::debug!(value = %self.value(), "controlled tabs value updated");
        }
        changed
    }

    fn set_value(&self, index: usize) {
        let (value, handler) = {
            let mut inner = self.inner.borrow_mut();
            let value = inner.props.options[index].value.clone();
            inner.cell.request(value.clone());
            (value, inner.props.on_change.clone())
        };
        tracing::debug!(%value, index, "tab selected");
        if let Some(handler) = handler {
            handler(&value);
        }
    }

    /// Connects the scroll container. Indicators are computed right away and
    /// once more after the settle delay.
    pub fn attach_viewport(&self, viewport: Rc<dyn ScrollViewport>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.scroll.is_none() {
                tracing::trace!("viewport ignored by non-scrollable tabs");
                return;
            }
            inner.viewport = Some(viewport);
        }
        self.update_indicators();

        let weak = Rc::downgrade(&self.inner);
        let (scheduler, delay) = {
            let inner = self.inner.borrow();
            (Rc::clone(&inner.scheduler), inner.props.scroll.settle_delay())
        };
        let settle = scheduler.once(
            delay,
            Box::new(move || {
                if let Some(tabs) = Self::from_weak(&weak) {
                    tabs.update_indicators();
                }
            }),
        );
        if let Some(scroll) = self.inner.borrow_mut().scroll.as_mut() {
            scroll.settle = Some(settle);
        }
    }

    /// Recomputes indicator visibility from the viewport probes.
    pub fn update_indicators(&self) {
        let viewport = self.inner.borrow().viewport.clone();
        let Some(viewport) = viewport else {
            return;
        };
        let metrics = viewport.metrics();
        if let Some(scroll) = self.inner.borrow_mut().scroll.as_mut() {
            scroll.indicators = metrics.indicators();
            scroll.measured = Some(metrics);
        }
    }

    /// Re-probes the viewport after a layout pass. Indicators are recomputed
    /// only when the probes moved since the last update; returns whether the
    /// visible indicators changed.
    pub fn remeasure(&self) -> bool {
        let (viewport, measured, before) = {
            let inner = self.inner.borrow();
            let Some(scroll) = inner.scroll.as_ref() else {
                return false;
            };
            (inner.viewport.clone(), scroll.measured, scroll.indicators)
        };
        let Some(viewport) = viewport else {
            return false;
        };
        if measured == Some(viewport.metrics()) {
            return false;
        }
        self.update_indicators();
        let changed = self.indicators() != before;
        if changed {
            tracing::trace!(indicators = ?self.indicators(), "indicators changed after layout");
        }
        changed
    }

    pub fn indicators(&self) -> ScrollIndicators {
        self.inner
            .borrow()
            .scroll
            .as_ref()
            .map(|scroll| scroll.indicators)
            .unwrap_or_default()
    }

    /// A scroll event from the viewport. The repeat timer lives in the held
    /// press, so a scroll with no press held has no timer left to cancel.
    pub fn handle_scroll(&self) { self.update_indicators(); }

    /// Pointer pressed on an indicator. Scrolling repeats after the hold
    /// delay until the pointer is released anywhere in the document.
    pub fn press_indicator(&self, direction: ScrollDirection) -> bool {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            let Some(scroll) = inner.scroll.as_mut() else {
                return false;
            };
            if !scroll.indicators.shows(direction) {
                tracing::trace!(%direction, "press on hidden indicator ignored");
                return false;
            }
            scroll.press.take()
        };
        drop(previous);

        let (document, scheduler, options) = {
            let inner = self.inner.borrow();
            (
                inner.document.clone(),
                Rc::clone(&inner.scheduler),
                inner.props.scroll.clone(),
            )
        };

        let weak = Rc::downgrade(&self.inner);
        let release = document.pointer_up_target().subscribe(move |_| {
            if let Some(tabs) = Self::from_weak(&weak) {
                tabs.release_indicator();
            }
        });

        let weak = Rc::downgrade(&self.inner);
        let step = options.step_px * direction.sign();
        let repeat = scheduler.repeat(
            options.hold_delay(),
            options.frame_interval(),
            Box::new(move || {
                if let Some(tabs) = Self::from_weak(&weak) {
                    tabs.repeat_frame(step);
                }
            }),
        );

        if let Some(scroll) = self.inner.borrow_mut().scroll.as_mut() {
            scroll.press = Some(Press {
                direction,
                frames: 0,
                repeat,
                _release: release,
            });
        }
        tracing::debug!(%direction, "scroll indicator pressed");
        true
    }

    fn repeat_frame(&self, delta: f32) {
        let viewport = {
            let mut inner = self.inner.borrow_mut();
            match inner.scroll.as_mut().and_then(|scroll| scroll.press.as_mut()) {
                Some(press) => press.frames += 1,
                None => return,
            }
            inner.viewport.clone()
        };
        if let Some(viewport) = viewport {
            viewport.scroll_by(delta);
        }
        self.update_indicators();
    }

    /// Pointer released, on the indicator or anywhere else. A release before
    /// the first repeat frame scrolls by one tab.
    pub fn release_indicator(&self) -> bool {
        let press = {
            let mut inner = self.inner.borrow_mut();
            let Some(scroll) = inner.scroll.as_mut() else {
                return false;
            };
            scroll.press.take()
        };
        let Some(Press {
            direction,
            frames,
            repeat,
            _release: release,
        }) = press
        else {
            return false;
        };
        repeat.cancel();
        drop(release);

        if frames == 0 {
            let viewport = self.inner.borrow().viewport.clone();
            if let Some(viewport) = viewport {
                if let Some(step) = viewport.tab_step() {
                    tracing::debug!(%direction, step, "indicator click");
                    viewport.scroll_by(step * direction.sign());
                }
            }
        } else {
            tracing::debug!(%direction, frames, "continuous scroll stopped");
        }
        self.update_indicators();
        true
    }

    /// Whether an indicator is currently held.
    pub fn is_pressing(&self) -> bool {
        self.inner
            .borrow()
            .scroll
            .as_ref()
            .is_some_and(|scroll| scroll.press.is_some())
    }

    /// Whether a continuous-scroll timer is alive.
    pub fn is_repeating(&self) -> bool {
        self.inner
            .borrow()
            .scroll
            .as_ref()
            .and_then(|scroll| scroll.press.as_ref())
            .is_some_and(|press| press.repeat.is_active())
    }

    /// Tears the strip down, releasing document listeners and timers.
    pub fn unmount(&self) {
        let (scroll, viewport) = {
            let mut inner = self.inner.borrow_mut();
            inner.mounted = false;
            (inner.scroll.take(), inner.viewport.take())
        };
        drop(scroll);
        drop(viewport);
        tracing::debug!("tabs unmounted");
    }

    /// Describes what the renderer should draw.
    pub fn view(&self) -> TabsView {
        let inner = self.inner.borrow();
        TabsView::build(
            &inner.props,
            inner.active_index(),
            inner.scroll.as_ref().map(|scroll| scroll.indicators),
        )
    }
}

impl fmt::Debug for Tabs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Tabs")
            .field("props", &inner.props)
            .field("value", &inner.cell.get())
            .field("controlled", &inner.cell.is_controlled())
            .field("focused", &inner.focused)
            .field("mounted", &inner.mounted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scheduler::ManualScheduler, tabs::TabOption};

    fn mount(props: TabsProps) -> (Tabs, Document) {
        let document = Document::new();
        let tabs = Tabs::mount(props, &document, Rc::new(ManualScheduler::new()));
        (tabs, document)
    }

    #[test]
    fn non_scrollable_strip_registers_nothing() {
        let (tabs, document) = mount(TabsProps::new([TabOption::new("a", "A")]));
        assert_eq!(document.listener_count(), 0);
        assert!(!tabs.press_indicator(ScrollDirection::End));
        assert_eq!(tabs.indicators(), ScrollIndicators::default());
    }

    #[test]
    fn scrollable_strip_listens_for_resize_until_unmount() {
        let (tabs, document) = mount(TabsProps::new([TabOption::new("a", "A")]).scrollable(true));
        assert_eq!(document.resize_target().listener_count(), 1);
        tabs.unmount();
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn unknown_value_is_not_selectable() {
        let (tabs, _document) = mount(TabsProps::new([TabOption::new("a", "A")]));
        assert!(!tabs.select("missing"));
        assert_eq!(tabs.value(), "a");
    }

    #[test]
    fn unmounted_strip_ignores_input() {
        let (tabs, _document) = mount(TabsProps::new([TabOption::new("a", "A"), TabOption::new("b", "B")]));
        tabs.unmount();
        assert!(!tabs.select("b"));
        assert_eq!(tabs.handle_key_down(&Key::ArrowRight), KeyOutcome::Ignored);
    }
}
