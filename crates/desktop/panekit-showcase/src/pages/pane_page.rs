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

use std::rc::Rc;

use gpui::{
    AnyView, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Subscription, Window, div, prelude::*, px,
};
use gpui_component::button::{Button, ButtonVariants as _};
use panekit_core::{PaneMode, PanePosition, PaneProps, PaneState, SizeVariant};
use panekit_ui::{PanePanel, PanePanelEvent, ThemeConfig, ThemeExt};

use super::content::{IconRail, Note};
use crate::host::Host;

const DEMO_HEIGHT: f32 = 260.0;

/// Pane demos: push panes on either side, temporary overlay drawers and a
/// window-level fixed drawer.
pub struct PanePage {
    with_partial:        Entity<PanePanel>,
    right:               Entity<PanePanel>,
    notifications:       Entity<PanePanel>,
    notifications_state: PaneState,
    quick_actions:       Entity<PanePanel>,
    fixed:               Entity<PanePanel>,
    last_event:          SharedString,
    _subscriptions:      Vec<Subscription>,
}

fn note(cx: &mut Context<PanePage>, title: &'static str, lines: &[&'static str]) -> AnyView {
    cx.new(|_| Note::new(title, lines.iter().copied())).into()
}

impl PanePage {
    pub fn new(host: &Rc<Host>, cx: &mut Context<Self>) -> Self {
        let library = note(cx, "Library", &["Recently added", "Albums", "Artists", "Playlists"]);
        let rail: AnyView = cx.new(|_| IconRail::new(["♪", "◎", "☰", "★"])).into();
        let with_partial = host.pane(
            "pane-with-partial",
            PaneProps::new(PanePosition::Left).default_state(PaneState::Open),
            library,
            Some(rail),
            cx,
        );

        let details = note(cx, "Details", &["Size: 220px", "Behavior: push"]);
        let right = host.pane(
            "pane-right",
            PaneProps::new(PanePosition::Right)
                .default_state(PaneState::Open)
                .open_size("220px")
                .size(SizeVariant::Compact),
            details,
            None,
            cx,
        );

        let inbox = note(cx, "Notifications", &[
            "Build finished",
            "2 new comments",
            "Press Escape or click outside to close",
        ]);
        let notifications = host.pane(
            "pane-notifications",
            PaneProps::new(PanePosition::Right)
                .mode(PaneMode::Temporary)
                .state(PaneState::Closed)
                .open_size("260px"),
            inbox,
            None,
            cx,
        );

        let actions = note(cx, "Quick actions", &["New file", "Search", "Settings"]);
        let quick_actions = host.pane(
            "pane-quick-actions",
            PaneProps::new(PanePosition::Bottom)
                .mode(PaneMode::Temporary)
                .open_size("150px"),
            actions,
            None,
            cx,
        );

        let drawer = note(cx, "Fixed drawer", &["Covers the whole window", "Escape closes it"]);
        let fixed = host.pane(
            "pane-fixed",
            PaneProps::new(PanePosition::Left)
                .mode(PaneMode::Temporary)
                .fixed(true),
            drawer,
            None,
            cx,
        );

        let subscriptions = vec![
            cx.subscribe(&notifications, |page, panel, event: &PanePanelEvent, cx| {
                let PanePanelEvent::StateChange(state) = *event;
                page.notifications_state = state;
                page.last_event = format!("notifications requested {state}").into();
                panel.update(cx, |panel, cx| panel.set_state(state, cx));
                cx.notify();
            }),
            cx.subscribe(&with_partial, |page, _, event: &PanePanelEvent, cx| {
                page.record("left pane", event, cx);
            }),
            cx.subscribe(&right, |page, _, event: &PanePanelEvent, cx| {
                page.record("right pane", event, cx);
            }),
            cx.subscribe(&quick_actions, |page, _, event: &PanePanelEvent, cx| {
                page.record("quick actions", event, cx);
            }),
            cx.subscribe(&fixed, |page, _, event: &PanePanelEvent, cx| {
                page.record("fixed drawer", event, cx);
            }),
        ];

        Self {
            with_partial,
            right,
            notifications,
            notifications_state: PaneState::Closed,
            quick_actions,
            fixed,
            last_event: "none yet".into(),
            _subscriptions: subscriptions,
        }
    }

    fn record(&mut self, source: &str, event: &PanePanelEvent, cx: &mut Context<Self>) {
        let PanePanelEvent::StateChange(state) = *event;
        tracing::debug!(source, %state, "pane state changed");
        self.last_event = format!("{source} moved to {state}").into();
        cx.notify();
    }

    fn open_notifications(&mut self, cx: &mut Context<Self>) {
        self.notifications_state = PaneState::Open;
        self.notifications
            .update(cx, |panel, cx| panel.set_state(PaneState::Open, cx));
        cx.notify();
    }
}

fn section(theme: &ThemeConfig, title: &'static str, description: &'static str) -> Div {
    div()
        .flex()
        .flex_col()
        .gap(px(8.0))
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(theme.text_primary)
                .child(title),
        )
        .child(
            div()
                .text_size(px(13.0))
                .text_color(theme.text_secondary)
                .child(description),
        )
}

fn demo_area(theme: &ThemeConfig) -> Div {
    div()
        .relative()
        .h(px(DEMO_HEIGHT))
        .w_full()
        .flex()
        .flex_row()
        .overflow_hidden()
        .rounded(px(6.0))
        .border_1()
        .border_color(theme.border)
        .bg(theme.background_primary)
}

fn main_content(theme: &ThemeConfig, text: &'static str) -> Div {
    div()
        .flex_1()
        .p(px(16.0))
        .text_size(px(13.0))
        .text_color(theme.text_muted)
        .child(text)
}

impl Render for PanePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        let content = div()
            .id("pane-page")
            .size_full()
            .overflow_y_scroll()
            .p(px(24.0))
            .flex()
            .flex_col()
            .gap(px(28.0))
            .child(
                section(
                    &theme,
                    "Permanent with partial content",
                    "The handle cycles closed, partial and open. The rail is shown while partial.",
                )
                .child(
                    demo_area(&theme)
                        .child(self.with_partial.clone())
                        .child(main_content(&theme, "Main content moves with the pane.")),
                ),
            )
            .child(
                section(
                    &theme,
                    "Right position",
                    "Without partial content the handle toggles between closed and open.",
                )
                .child(
                    demo_area(&theme)
                        .child(main_content(&theme, "Main content"))
                        .child(self.right.clone()),
                ),
            )
            .child(
                section(
                    &theme,
                    "Temporary overlay drawers",
                    "Overlays float above the content with a backdrop. Escape or a backdrop \
                     click closes them.",
                )
                .child(
                    div()
                        .flex()
                        .gap(px(8.0))
                        .child(
                            Button::new("open-notifications")
                                .primary()
                                .label("Notifications")
                                .on_click(cx.listener(|page, _, _, cx| page.open_notifications(cx))),
                        )
                        .child(
                            Button::new("open-quick-actions")
                                .label("Quick actions")
                                .on_click(cx.listener(|page, _, _, cx| {
                                    page.quick_actions.update(cx, |panel, cx| panel.toggle(cx));
                                })),
                        ),
                )
                .child(
                    demo_area(&theme)
                        .child(main_content(&theme, "Content stays in place under the drawers."))
                        .child(self.notifications.clone())
                        .child(self.quick_actions.clone()),
                )
                .child(
                    div()
                        .text_size(px(12.0))
                        .text_color(theme.text_muted)
                        .child(format!(
                            "Notifications (controlled): {}",
                            self.notifications_state
                        )),
                ),
            )
            .child(
                section(
                    &theme,
                    "Fixed overlay",
                    "A fixed drawer covers the window instead of its container.",
                )
                .child(
                    div().flex().child(
                        Button::new("open-fixed")
                            .label("Open fixed drawer")
                            .on_click(cx.listener(|page, _, _, cx| {
                                page.fixed.update(cx, |panel, cx| panel.toggle(cx));
                            })),
                    ),
                ),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(theme.text_muted)
                    .child(format!("Last event: {}", self.last_event)),
            );

        div()
            .relative()
            .size_full()
            .child(content)
            .child(self.fixed.clone())
    }
}
