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

//! gpui view over a headless [`Pane`].
//!
//! Layout for a left pane:
//! ```text
//! push (in a flex row)            overlay (in a relative parent)
//! ┌──────────┬─┬───────────┐      ┌──────────┬─┬───────────┐
//! │  body    │›│  sibling  │      │  body    │›│▒▒backdrop▒│
//! │ (extent) │ │  content  │      │          │ │▒▒▒▒▒▒▒▒▒▒▒│
//! └──────────┴─┴───────────┘      └──────────┴─┴───────────┘
//! ```
//! The handle sits on the body's outer edge. Both content slots stay mounted;
//! the inactive one is taken out of layout.

use std::{cell::RefCell, rc::Rc};

use gpui::{
    AnyElement, AnyView, Context, Div, EventEmitter, IntoElement, ParentElement, Render,
    SharedString, Stateful, Styled, Window, div, prelude::*, px,
};
use panekit_core::{
    Document, Pane, PaneBehavior, PanePosition, PaneProps, PaneState, PaneView,
    pane::{ContentSlot, HandleView},
};

use crate::theme::{ThemeConfig, ThemeExt};

/// Thickness of the handle across the pane's axis.
const HANDLE_THICKNESS: f32 = 18.0;
/// Length of the handle along the pane's edge.
const HANDLE_LENGTH: f32 = 48.0;

/// Emitted after the pane asks for a new state.
///
/// Uncontrolled panes have already moved; controlled panes wait for the
/// parent to call [`PanePanel::set_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanePanelEvent {
    StateChange(PaneState),
}

pub struct PanePanel {
    id:      SharedString,
    pane:    Pane,
    full:    AnyView,
    partial: Option<AnyView>,
    changes: Rc<RefCell<Vec<PaneState>>>,
}

impl EventEmitter<PanePanelEvent> for PanePanel {}

impl PanePanel {
    /// Mounts a pane drawing `full` while open and `partial` while partial.
    ///
    /// State changes are reported through [`PanePanelEvent`]; a handler set
    /// on `props` is replaced.
    pub fn new(
        id: impl Into<SharedString>,
        props: PaneProps,
        document: &Document,
        full: impl Into<AnyView>,
        partial: Option<AnyView>,
    ) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let queue = Rc::clone(&changes);
        let props = props
            .partial_content(partial.is_some())
            .on_state_change(move |state| queue.borrow_mut().push(state));

        Self {
            id: id.into(),
            pane: Pane::mount(props, document),
            full: full.into(),
            partial,
            changes,
        }
    }

    pub const fn pane(&self) -> &Pane { &self.pane }

    pub fn state(&self) -> PaneState { self.pane.state() }

    /// Feeds a new controlled state. Ignored for uncontrolled panes.
    pub fn set_state(&mut self, state: PaneState, cx: &mut Context<Self>) {
        if self.pane.set_controlled_state(state) {
            cx.notify();
        }
    }

    /// Same as clicking the handle.
    pub fn toggle(&mut self, cx: &mut Context<Self>) {
        self.pane.activate_handle();
        self.sync(cx);
    }

    pub fn dismiss(&mut self, cx: &mut Context<Self>) {
        self.pane.dismiss();
        self.sync(cx);
    }

    /// Emits queued state changes and redraws.
    ///
    /// Call after dispatching host events into the [`Document`] the pane is
    /// mounted on, so Escape dismissals reach the parent.
    pub fn sync(&mut self, cx: &mut Context<Self>) {
        let changes: Vec<PaneState> = self.changes.borrow_mut().drain(..).collect();
        for state in changes {
            cx.emit(PanePanelEvent::StateChange(state));
        }
        cx.notify();
    }

    fn render_body(&self, view: &PaneView, theme: &ThemeConfig) -> Div {
        let horizontal = view.position.is_horizontal();
        let extent = px(extent_pixels(view).unwrap_or(0.0));
        let surface = match view.behavior {
            PaneBehavior::Push => theme.background_secondary,
            PaneBehavior::Overlay => theme.background_elevated,
        };

        let body = div()
            .relative()
            .flex_none()
            .overflow_hidden()
            .bg(surface)
            .border_color(theme.border)
            .when(horizontal, |el| el.w(extent).h_full())
            .when(!horizontal, |el| el.h(extent).w_full());
        let body = if view.state == PaneState::Closed {
            body
        } else {
            match view.position {
                PanePosition::Left => body.border_r_1(),
                PanePosition::Right => body.border_l_1(),
                PanePosition::Top => body.border_b_1(),
                PanePosition::Bottom => body.border_t_1(),
            }
        };

        body.child(slot(&view.full, self.full.clone()))
            .when_some(
                view.partial.as_ref().zip(self.partial.clone()),
                |el, (partial, content)| el.child(slot(partial, content)),
            )
    }

    fn render_handle(
        &self,
        handle: &HandleView,
        horizontal: bool,
        theme: &ThemeConfig,
        cx: &Context<Self>,
    ) -> Stateful<Div> {
        let hover_bg = theme.hover;
        let hover_text = theme.text_primary;

        div()
            .id(SharedString::from(format!("{}-handle", self.id)))
            .flex()
            .flex_none()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .bg(theme.background_elevated)
            .border_1()
            .border_color(theme.border)
            .rounded(px(4.0))
            .text_size(px(14.0))
            .text_color(theme.text_secondary)
            .hover(|style| style.bg(hover_bg).text_color(hover_text))
            .when(horizontal, |el| el.w(px(HANDLE_THICKNESS)).h(px(HANDLE_LENGTH)))
            .when(!horizontal, |el| el.h(px(HANDLE_THICKNESS)).w(px(HANDLE_LENGTH)))
            .child(handle.pointing().glyph())
            .on_click(cx.listener(|this, _, _, cx| this.toggle(cx)))
    }
}

impl Render for PanePanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.pane.view();
        let theme = cx.theme().clone();
        let horizontal = view.position.is_horizontal();

        let body = self.render_body(&view, &theme);
        let handle = view
            .handle
            .as_ref()
            .map(|handle| self.render_handle(handle, horizontal, &theme, cx));

        let pane = div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .when(horizontal, |el| el.flex_row().h_full())
            .when(!horizontal, |el| el.flex_col().w_full());
        let pane = match view.position {
            PanePosition::Left | PanePosition::Top => pane.child(body).children(handle),
            PanePosition::Right | PanePosition::Bottom => pane.children(handle).child(body),
        };

        match view.behavior {
            PaneBehavior::Push => pane.into_any_element(),
            PaneBehavior::Overlay => {
                let pane = anchor(pane, view.position).into_any_element();
                if view.backdrop.visible {
                    self.render_backdrop(pane, &theme, cx)
                } else {
                    pane
                }
            }
        }
    }
}

impl PanePanel {
    fn render_backdrop(&self, pane: AnyElement, theme: &ThemeConfig, cx: &Context<Self>) -> AnyElement {
        div()
            .absolute()
            .inset_0()
            .child(
                div()
                    .id(SharedString::from(format!("{}-backdrop", self.id)))
                    .absolute()
                    .inset_0()
                    .bg(theme.backdrop)
                    .on_click(cx.listener(|this, _, _, cx| {
                        if this.pane.click_backdrop() {
                            this.sync(cx);
                        }
                    })),
            )
            .child(pane)
            .into_any_element()
    }
}

impl Drop for PanePanel {
    fn drop(&mut self) { self.pane.unmount(); }
}

fn slot(slot: &ContentSlot, content: AnyView) -> Div {
    div()
        .absolute()
        .inset_0()
        .when(!slot.active, |el| el.hidden())
        .child(content)
}

/// Pins an overlay pane to its edge of the nearest relative parent.
fn anchor<E: Styled>(element: E, position: PanePosition) -> E {
    let element = element.absolute();
    match position {
        PanePosition::Left => element.left_0().top_0().bottom_0(),
        PanePosition::Right => element.right_0().top_0().bottom_0(),
        PanePosition::Top => element.top_0().left_0().right_0(),
        PanePosition::Bottom => element.bottom_0().left_0().right_0(),
    }
}

/// Pixel size of the body for the current state; non-pixel tokens fall back
/// to the position's defaults.
fn extent_pixels(view: &PaneView) -> Option<f32> {
    let token = view.extent()?;
    token.pixels().or_else(|| {
        tracing::debug!(size = %token, "non-pixel pane size, using the default");
        match view.state {
            PaneState::Partial => PanePosition::default_partial_size().pixels(),
            _ => view.position.default_open_size().pixels(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_for(props: PaneProps) -> PaneView { Pane::mount(props, &Document::new()).view() }

    #[test]
    fn closed_pane_has_no_extent() {
        let view = view_for(PaneProps::new(PanePosition::Left));
        assert_eq!(extent_pixels(&view), None);
    }

    #[test]
    fn pixel_sizes_are_used_verbatim() {
        let view = view_for(
            PaneProps::new(PanePosition::Right)
                .default_state(PaneState::Open)
                .open_size("320px"),
        );
        assert_eq!(extent_pixels(&view), Some(320.0));
    }

    #[test]
    fn relative_sizes_fall_back_to_position_defaults() {
        let open = view_for(
            PaneProps::new(PanePosition::Top)
                .default_state(PaneState::Open)
                .open_size("30vh"),
        );
        assert_eq!(extent_pixels(&open), Some(240.0));

        let partial = view_for(
            PaneProps::new(PanePosition::Left)
                .partial_content(true)
                .default_state(PaneState::Partial)
                .partial_size("4rem"),
        );
        assert_eq!(extent_pixels(&partial), Some(56.0));
    }
}
