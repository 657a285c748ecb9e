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

//! Root view: a permanent navigation pane next to the current page.
//!
//! ```text
//! ┌──────────┬─┬──────────────────────────┐
//! │ ▤ Pane   │‹│                          │
//! │ ⇆ Tabs   │ │      current page        │
//! │ ⓘ About  │ │                          │
//! └──────────┴─┴──────────────────────────┘
//! ```
//! Partially collapsed, the pane shows the same pages as an icon rail.

use std::rc::Rc;

use gpui::{
    AnyElement, Context, Entity, FocusHandle, IntoElement, KeyDownEvent, MouseButton,
    MouseUpEvent, ParentElement, Render, Styled, Subscription, Window, div, prelude::*,
};
use panekit_core::{Key, Orientation, PanePosition, PaneProps, PaneState, TabsProps};
use panekit_ui::{PanePanel, TabStrip, TabStripEvent, ThemeExt};

use crate::{
    actions::{ShowAboutPage, ShowPanePage, ShowTabsPage, ToggleNavigation},
    config::ShowcaseConfig,
    host::Host,
    page::Page,
    pages::{AboutPage, PanePage, TabsPage},
};

pub struct Shell {
    host:           Rc<Host>,
    focus_handle:   FocusHandle,
    page:           Page,
    nav:            Entity<PanePanel>,
    nav_labels:     Entity<TabStrip>,
    nav_rail:       Entity<TabStrip>,
    pane_page:      Entity<PanePage>,
    tabs_page:      Entity<TabsPage>,
    about_page:     Entity<AboutPage>,
    _subscriptions: Vec<Subscription>,
}

impl Shell {
    pub fn new(config: &ShowcaseConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let host = Host::new();
        let page = config.start_page;

        let nav_labels = host.strip(
            "nav-labels",
            TabsProps::new(Page::tab_options())
                .value(page.as_ref())
                .orientation(Orientation::Vertical),
            cx,
        );
        let nav_rail = host.strip(
            "nav-rail",
            TabsProps::new(Page::tab_options())
                .value(page.as_ref())
                .orientation(Orientation::Vertical)
                .icon_only(true),
            cx,
        );
        let nav = host.pane(
            "nav",
            PaneProps::new(PanePosition::Left)
                .default_state(PaneState::Open)
                .open_size("200px"),
            nav_labels.clone().into(),
            Some(nav_rail.clone().into()),
            cx,
        );

        let pane_page = cx.new(|cx| PanePage::new(&host, cx));
        let tabs_page = cx.new(|cx| TabsPage::new(&host, &config.scroll, cx));
        let about_page = cx.new(|_| AboutPage::new(Rc::clone(&host)));

        let on_nav = |shell: &mut Self, _: Entity<TabStrip>, event: &TabStripEvent, cx: &mut Context<Self>| {
            let TabStripEvent::Change(value) = event;
            match value.parse::<Page>() {
                Ok(page) => shell.navigate(page, cx),
                Err(_) => tracing::warn!(%value, "navigation to unknown page ignored"),
            }
        };
        let subscriptions = vec![
            cx.subscribe(&nav_labels, on_nav),
            cx.subscribe(&nav_rail, on_nav),
            cx.observe_window_bounds(window, |shell, window, cx| {
                let size = window.viewport_size();
                shell
                    .host
                    .resize(f32::from(size.width), f32::from(size.height), cx);
            }),
        ];

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        tracing::info!(%page, "showcase shell ready");

        Self {
            host,
            focus_handle,
            page,
            nav,
            nav_labels,
            nav_rail,
            pane_page,
            tabs_page,
            about_page,
            _subscriptions: subscriptions,
        }
    }

    /// Shows `page` and points both navigation strips at it.
    fn navigate(&mut self, page: Page, cx: &mut Context<Self>) {
        if self.page != page {
            tracing::debug!(from = %self.page, to = %page, "navigating");
        }
        self.page = page;
        for strip in [&self.nav_labels, &self.nav_rail] {
            strip.update(cx, |strip, cx| strip.set_value(page.as_ref(), cx));
        }
        cx.notify();
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let key = Key::named(&event.keystroke.key);
        if self.host.key_down(&key, cx) {
            tracing::trace!(?key, "key delivered to document listeners");
        }
    }

    fn current_page(&self) -> AnyElement {
        match self.page {
            Page::Pane => self.pane_page.clone().into_any_element(),
            Page::Tabs => self.tabs_page.clone().into_any_element(),
            Page::About => self.about_page.clone().into_any_element(),
        }
    }
}

impl Render for Shell {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .id("shell")
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_row()
            .bg(theme.background_primary)
            .text_color(theme.text_primary)
            .on_key_down(cx.listener(Self::on_key_down))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|shell, _: &MouseUpEvent, _, cx| shell.host.pointer_up(cx)),
            )
            .on_action(cx.listener(|shell, _: &ToggleNavigation, _, cx| {
                shell.nav.update(cx, |nav, cx| nav.toggle(cx));
            }))
            .on_action(cx.listener(|shell, _: &ShowPanePage, _, cx| shell.navigate(Page::Pane, cx)))
            .on_action(cx.listener(|shell, _: &ShowTabsPage, _, cx| shell.navigate(Page::Tabs, cx)))
            .on_action(cx.listener(|shell, _: &ShowAboutPage, _, cx| shell.navigate(Page::About, cx)))
            .child(self.nav.clone())
            .child(
                div()
                    .flex_1()
                    .h_full()
                    .relative()
                    .overflow_hidden()
                    .child(self.current_page()),
            )
    }
}
