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

//! Small static views used as pane content.

use gpui::{
    Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div, prelude::*, px,
};
use panekit_ui::ThemeExt;

/// A titled list of lines, used as the full content of demo panes.
pub struct Note {
    title: SharedString,
    lines: Vec<SharedString>,
}

impl Note {
    pub fn new(
        title: impl Into<SharedString>,
        lines: impl IntoIterator<Item = impl Into<SharedString>>,
    ) -> Self {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl Render for Note {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .size_full()
            .p(px(16.0))
            .flex()
            .flex_col()
            .gap(px(8.0))
            .child(
                div()
                    .text_size(px(15.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(theme.text_primary)
                    .child(self.title.clone()),
            )
            .children(self.lines.iter().map(|line| {
                div()
                    .text_size(px(13.0))
                    .text_color(theme.text_secondary)
                    .child(line.clone())
            }))
    }
}

/// A column of glyphs, used as the partial content of demo panes.
pub struct IconRail {
    icons: Vec<&'static str>,
}

impl IconRail {
    pub fn new(icons: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            icons: icons.into_iter().collect(),
        }
    }
}

impl Render for IconRail {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .size_full()
            .py(px(12.0))
            .flex()
            .flex_col()
            .items_center()
            .gap(px(12.0))
            .text_size(px(18.0))
            .text_color(theme.text_secondary)
            .children(self.icons.iter().map(|icon| div().child(*icon)))
    }
}
