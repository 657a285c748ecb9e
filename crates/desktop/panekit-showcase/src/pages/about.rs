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
    Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, prelude::*, px,
};
use panekit_ui::{ThemeExt, ThemeProvider};

use crate::{build_info, host::Host};

const SHORTCUTS: [(&str, &str); 5] = [
    ("← → / ↑ ↓", "Move between tabs, wrapping at the ends"),
    ("Home / End", "First or last enabled tab"),
    ("Escape", "Close the open temporary pane"),
    ("Click handle", "Cycle a permanent pane"),
    ("Hold arrow", "Scroll a tab strip continuously"),
];

pub struct AboutPage {
    host: Rc<Host>,
}

impl AboutPage {
    pub const fn new(host: Rc<Host>) -> Self { Self { host } }
}

impl Render for AboutPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let preset = cx
            .global::<ThemeProvider>()
            .preset()
            .map_or_else(|| "custom".to_string(), |preset| preset.to_string());
        let theme = cx.theme();
        let facts: Vec<(&str, SharedString)> = build_info::facts()
            .into_iter()
            .map(|(name, value)| (name, value.into()))
            .chain([
                ("Theme", preset.into()),
                ("Document listeners", self.host.listener_count().to_string().into()),
            ])
            .collect();

        div()
            .size_full()
            .p(px(24.0))
            .flex()
            .flex_col()
            .gap(px(16.0))
            .child(
                div()
                    .text_size(px(20.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(theme.text_primary)
                    .child("panekit showcase"),
            )
            .children(facts.into_iter().map(|(name, value)| {
                div()
                    .flex()
                    .gap(px(12.0))
                    .text_size(px(13.0))
                    .child(div().w(px(160.0)).text_color(theme.text_secondary).child(name))
                    .child(div().text_color(theme.text_primary).child(value))
            }))
            .child(
                div()
                    .pt(px(12.0))
                    .text_size(px(15.0))
                    .text_color(theme.text_primary)
                    .child("Keyboard and pointer"),
            )
            .children(SHORTCUTS.iter().map(|(keys, action)| {
                div()
                    .flex()
                    .gap(px(12.0))
                    .text_size(px(13.0))
                    .child(div().w(px(160.0)).text_color(theme.accent).child(*keys))
                    .child(div().text_color(theme.text_secondary).child(*action))
            }))
    }
}
