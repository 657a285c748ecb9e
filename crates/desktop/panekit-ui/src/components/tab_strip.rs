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

//! gpui view over a headless [`Tabs`] strip.
//!
//! Timers for continuous scrolling run on a [`ManualScheduler`] that the view
//! pumps from a gpui task while anything is pending, so all component
//! callbacks stay on the UI thread.

use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use gpui::{
    Context, Div, EventEmitter, FocusHandle, IntoElement, KeyDownEvent, MouseButton,
    MouseDownEvent, MouseUpEvent, ParentElement, Render, ScrollHandle, ScrollWheelEvent,
    SharedString, Stateful, Styled, Task, Window, div, point, prelude::*, px,
};
use panekit_core::{
    Document, Key, KeyOutcome, ManualScheduler, Orientation, Scheduler, ScrollDirection,
    ScrollMetrics, ScrollViewport, Tabs, TabsProps, TabsVariant, TabsView,
    tabs::{IndicatorView, TabView},
};

use crate::theme::{ThemeConfig, ThemeExt};

const TAB_GAP: f32 = 4.0;
const INDICATOR_EXTENT: f32 = 28.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabStripEvent {
    /// A tab was selected. Controlled strips show it only after
    /// [`TabStrip::set_value`].
    Change(String),
}

/// [`ScrollViewport`] over the strip's gpui scroll container.
///
/// gpui reports scroll offsets as negative translations; the probes are
/// exposed as positive distances from the start.
struct ScrollArea {
    handle:      ScrollHandle,
    orientation: Orientation,
}

impl ScrollViewport for ScrollArea {
    fn metrics(&self) -> ScrollMetrics {
        let offset = self.handle.offset();
        let max = self.handle.max_offset();
        let size = self.handle.bounds().size;
        let (offset, max, visible) = if self.orientation.is_vertical() {
            (-offset.y, max.height, size.height)
        } else {
            (-offset.x, max.width, size.width)
        };
        let visible = f32::from(visible);
        ScrollMetrics::new(f32::from(offset), visible + f32::from(max), visible)
    }

    fn scroll_by(&self, delta: f32) {
        let metrics = self.metrics();
        let target = (metrics.offset + delta).clamp(0.0, metrics.max_offset());
        let current = self.handle.offset();
        let next = if self.orientation.is_vertical() {
            point(current.x, px(-target))
        } else {
            point(px(-target), current.y)
        };
        self.handle.set_offset(next);
    }

    fn tab_step(&self) -> Option<f32> {
        let bounds = self.handle.bounds_for_item(0)?;
        let extent = if self.orientation.is_vertical() {
            bounds.size.height
        } else {
            bounds.size.width
        };
        Some(f32::from(extent) + TAB_GAP)
    }
}

pub struct TabStrip {
    id:            SharedString,
    tabs:          Tabs,
    scheduler:     ManualScheduler,
    frame:         Duration,
    scroll_handle: ScrollHandle,
    focus_handles: Vec<FocusHandle>,
    changes:       Rc<RefCell<Vec<String>>>,
    pumping:       bool,
    _pump:         Option<Task<()>>,
}

impl EventEmitter<TabStripEvent> for TabStrip {}

impl TabStrip {
    /// Mounts a strip. Selections are reported through [`TabStripEvent`]; a
    /// handler set on `props` is replaced.
    pub fn new(
        id: impl Into<SharedString>,
        props: TabsProps,
        document: &Document,
        cx: &mut Context<Self>,
    ) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let queue = Rc::clone(&changes);
        let orientation = props.orientation_value();
        let scrollable = props.is_scrollable();
        let frame = props.scroll_options_value().frame_interval();
        let focus_handles = props.options().iter().map(|_| cx.focus_handle()).collect();
        let props = props.on_change(move |value| queue.borrow_mut().push(value.to_string()));

        let scheduler = ManualScheduler::new();
        let shared: Rc<dyn Scheduler> = Rc::new(scheduler.clone());
        let tabs = Tabs::mount(props, document, shared);

        let scroll_handle = ScrollHandle::new();
        if scrollable {
            tabs.attach_viewport(Rc::new(ScrollArea {
                handle: scroll_handle.clone(),
                orientation,
            }));
        }

        let mut strip = Self {
            id: id.into(),
            tabs,
            scheduler,
            frame,
            scroll_handle,
            focus_handles,
            changes,
            pumping: false,
            _pump: None,
        };
        strip.ensure_pump(cx);
        strip
    }

    pub const fn tabs(&self) -> &Tabs { &self.tabs }

    pub fn value(&self) -> String { self.tabs.value() }

    /// Feeds a new controlled value. Ignored for uncontrolled strips.
    pub fn set_value(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        if self.tabs.set_controlled_value(value) {
            cx.notify();
        }
    }

    /// Emits queued selections, keeps timers running and redraws.
    ///
    /// Call after dispatching host events into the [`Document`] the strip is
    /// mounted on.
    pub fn sync(&mut self, cx: &mut Context<Self>) {
        self.flush(cx);
        self.ensure_pump(cx);
    }

    fn flush(&mut self, cx: &mut Context<Self>) {
        let changes: Vec<String> = self.changes.borrow_mut().drain(..).collect();
        for value in changes {
            cx.emit(TabStripEvent::Change(value));
        }
        cx.notify();
    }

    fn ensure_pump(&mut self, cx: &mut Context<Self>) {
        if self.pumping || self.scheduler.pending() == 0 {
            return;
        }
        self.pumping = true;
        let frame = self.frame;
        self._pump = Some(cx.spawn(async move |this, cx| {
            let mut last = Instant::now();
            loop {
                cx.background_executor().timer(frame).await;
                let now = Instant::now();
                let elapsed = now.duration_since(last);
                last = now;
                match this.update(cx, |strip, cx| strip.tick(elapsed, cx)) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(error) => {
                        tracing::debug!("tab strip released while pumping timers: {error}");
                        break;
                    }
                }
            }
        }));
    }

    /// Advances timers by one frame; returns whether any remain.
    fn tick(&mut self, elapsed: Duration, cx: &mut Context<Self>) -> bool {
        self.scheduler.advance(elapsed);
        let busy = self.scheduler.pending() > 0;
        if !busy {
            self.pumping = false;
        }
        self.flush(cx);
        busy
    }

    fn activate(&mut self, index: usize, value: &str, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(handle) = self.focus_handles.get(index) {
            window.focus(handle);
        }
        self.tabs.select(value);
        self.sync(cx);
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let key = Key::named(&event.keystroke.key);
        let outcome = self.tabs.handle_key_down(&key);
        if let KeyOutcome::Moved { index } = outcome {
            if let Some(handle) = self.focus_handles.get(index) {
                window.focus(handle);
            }
            if self.tabs.view().scroll.is_some() {
                self.scroll_handle.scroll_to_item(index);
                self.refresh_indicators_next_frame(window, cx);
            }
        }
        if outcome.is_consumed() {
            cx.stop_propagation();
        }
        self.sync(cx);
    }

    fn refresh_indicators_next_frame(&self, window: &mut Window, cx: &Context<Self>) {
        cx.on_next_frame(window, |strip, _, cx| {
            strip.tabs.handle_scroll();
            cx.notify();
        });
    }

    fn render_tab(
        &self,
        tab: &TabView,
        view: &TabsView,
        theme: &ThemeConfig,
        cx: &Context<Self>,
    ) -> Stateful<Div> {
        let vertical = view.aria_orientation.is_vertical();
        let (pad_x, pad_y) = tab_padding(view);
        let selected = tab.aria_selected;
        let hover_bg = theme.hover;
        let ring = theme.focus_ring;

        let text = if tab.disabled {
            theme.text_muted
        } else if selected && view.variant == TabsVariant::Subtle {
            theme.accent
        } else if selected {
            theme.text_primary
        } else {
            theme.text_secondary
        };

        let mut element = div()
            .id(format!("{}-tab-{}", self.id, tab.index))
            .flex()
            .flex_none()
            .items_center()
            .gap(px(6.0))
            .px(px(pad_x))
            .py(px(pad_y))
            .rounded(px(4.0))
            .border_1()
            .border_color(gpui::transparent_black())
            .text_size(px(14.0))
            .text_color(text)
            .focus(move |style| style.border_color(ring))
            .children(tab.icon.clone())
            .when(tab.show_label, |el| el.child(tab.label.clone()));

        if let Some(handle) = self.focus_handles.get(tab.index) {
            element = element.track_focus(handle);
        }

        element = match (view.variant, selected) {
            (TabsVariant::Primary, true) if vertical => element.border_l_2().border_color(theme.accent),
            (TabsVariant::Primary, true) => element.border_b_2().border_color(theme.accent),
            (TabsVariant::Secondary, true) => element.bg(theme.active),
            _ => element,
        };

        if tab.disabled {
            return element;
        }

        let index = tab.index;
        let value = tab.value.clone();
        element
            .cursor_pointer()
            .hover(move |style| style.bg(hover_bg))
            .on_click(cx.listener(move |this, _, window, cx| this.activate(index, &value, window, cx)))
    }

    fn render_indicator(
        &self,
        indicator: &IndicatorView,
        vertical: bool,
        theme: &ThemeConfig,
        cx: &Context<Self>,
    ) -> Stateful<Div> {
        let direction = indicator.direction;
        let hover_bg = theme.hover;

        let element = div()
            .id(format!("{}-scroll-{direction}", self.id))
            .absolute()
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .bg(theme.background_elevated)
            .text_color(theme.text_secondary)
            .hover(move |style| style.bg(hover_bg))
            .child(indicator.chevron.glyph())
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _: &MouseDownEvent, _, cx| {
                    if this.tabs.press_indicator(direction) {
                        cx.stop_propagation();
                    }
                    this.sync(cx);
                }),
            )
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, _: &MouseUpEvent, _, cx| {
                    if this.tabs.release_indicator() {
                        this.sync(cx);
                    }
                }),
            );

        match (vertical, direction) {
            (false, ScrollDirection::Start) => element.left_0().top_0().bottom_0().w(px(INDICATOR_EXTENT)),
            (false, ScrollDirection::End) => element.right_0().top_0().bottom_0().w(px(INDICATOR_EXTENT)),
            (true, ScrollDirection::Start) => element.top_0().left_0().right_0().h(px(INDICATOR_EXTENT)),
            (true, ScrollDirection::End) => element.bottom_0().left_0().right_0().h(px(INDICATOR_EXTENT)),
        }
    }
}

impl Render for TabStrip {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.tabs.view();
        let theme = cx.theme().clone();
        let vertical = view.aria_orientation.is_vertical();

        let tabs: Vec<_> = view
            .tabs
            .iter()
            .map(|tab| self.render_tab(tab, &view, &theme, cx))
            .collect();

        let strip = div()
            .id(self.id.clone())
            .flex()
            .gap(px(TAB_GAP))
            .when(vertical, |el| el.flex_col())
            .when(!vertical, |el| el.flex_row().border_b_1().border_color(theme.border))
            .when(view.classes.contains("tabs--disabled"), |el| el.opacity(0.6))
            .on_key_down(cx.listener(Self::on_key_down))
            .children(tabs);

        let Some(scroll) = view.scroll.as_ref() else {
            return strip.into_any_element();
        };

        // Probes are only real once this frame is laid out.
        cx.on_next_frame(window, |strip, _, cx| {
            if strip.tabs.remeasure() {
                cx.notify();
            }
        });

        let strip = strip
            .track_scroll(&self.scroll_handle)
            .when(vertical, |el| el.overflow_y_scroll().size_full())
            .when(!vertical, |el| el.overflow_x_scroll().w_full())
            .on_scroll_wheel(cx.listener(|_, _: &ScrollWheelEvent, window, cx| {
                cx.on_next_frame(window, |strip, _, cx| {
                    strip.tabs.handle_scroll();
                    cx.notify();
                });
            }));

        div()
            .relative()
            .flex()
            .overflow_hidden()
            .when(vertical, |el| el.flex_col().h_full())
            .when(!vertical, |el| el.w_full())
            .child(strip)
            .children(
                scroll
                    .start
                    .as_ref()
                    .map(|indicator| self.render_indicator(indicator, vertical, &theme, cx)),
            )
            .children(
                scroll
                    .end
                    .as_ref()
                    .map(|indicator| self.render_indicator(indicator, vertical, &theme, cx)),
            )
            .into_any_element()
    }
}

impl Drop for TabStrip {
    fn drop(&mut self) { self.tabs.unmount(); }
}

/// Horizontal and vertical tab padding for the strip's size modifier.
fn tab_padding(view: &TabsView) -> (f32, f32) {
    if view.classes.contains("tabs--compact") {
        (8.0, 4.0)
    } else if view.classes.contains("tabs--spacious") {
        (18.0, 12.0)
    } else {
        (12.0, 8.0)
    }
}

#[cfg(test)]
mod tests {
    use panekit_core::{SizeVariant, TabOption};

    use super::*;

    fn view_of(props: TabsProps) -> TabsView {
        Tabs::mount(props, &Document::new(), Rc::new(ManualScheduler::new())).view()
    }

    #[test]
    fn padding_follows_size_modifier() {
        let options = || [TabOption::new("a", "A")];
        assert_eq!(tab_padding(&view_of(TabsProps::new(options()))), (12.0, 8.0));
        assert_eq!(
            tab_padding(&view_of(TabsProps::new(options()).size(SizeVariant::Compact))),
            (8.0, 4.0)
        );
        assert_eq!(
            tab_padding(&view_of(TabsProps::new(options()).size(SizeVariant::Spacious))),
            (18.0, 12.0)
        );
    }

    #[test]
    fn unlaid_scroll_area_reports_nothing_to_scroll() {
        let area = ScrollArea {
            handle:      ScrollHandle::new(),
            orientation: Orientation::Horizontal,
        };
        let metrics = area.metrics();
        assert!(metrics.max_offset().abs() < f32::EPSILON);
        assert!(!metrics.indicators().start);
        assert!(!metrics.indicators().end);
        assert_eq!(area.tab_step(), None);

        area.scroll_by(120.0);
        assert!(area.metrics().offset.abs() < f32::EPSILON);
    }
}
