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
    Context, Div, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Subscription,
    Window, div, prelude::*, px,
};
use gpui_component::button::Button;
use panekit_core::{Orientation, ScrollOptions, SizeVariant, TabOption, TabsProps, TabsVariant};
use panekit_ui::{TabStrip, TabStripEvent, ThemeConfig, ThemeExt};

use crate::host::Host;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const RANGES: [(&str, &str); 4] = [("day", "Day"), ("week", "Week"), ("month", "Month"), ("year", "Year")];

fn sections() -> Vec<TabOption> {
    vec![
        TabOption::new("overview", "Overview"),
        TabOption::new("activity", "Activity"),
        TabOption::new("settings", "Settings"),
    ]
}

fn with_icons() -> Vec<TabOption> {
    vec![
        TabOption::new("home", "Home").icon("⌂"),
        TabOption::new("search", "Search").icon("⌕"),
        TabOption::new("library", "Library").icon("☰"),
    ]
}

/// Tab strip demos covering every configuration knob.
pub struct TabsPage {
    strips:         Vec<(&'static str, &'static str, Entity<TabStrip>)>,
    controlled:     Entity<TabStrip>,
    range:          String,
    scrollable:     Entity<TabStrip>,
    last_change:    SharedString,
    _subscriptions: Vec<Subscription>,
}

impl TabsPage {
    pub fn new(host: &Rc<Host>, scroll: &ScrollOptions, cx: &mut Context<Self>) -> Self {
        let demos: Vec<(&'static str, &'static str, TabsProps)> = vec![
            ("Basic", "Uncontrolled, starts on the first tab.", TabsProps::new(sections())),
            (
                "Default value",
                "Uncontrolled, starts on Activity.",
                TabsProps::new(sections()).default_value("activity"),
            ),
            (
                "Vertical",
                "Up and Down move between tabs; Home and End jump.",
                TabsProps::new(sections()).orientation(Orientation::Vertical),
            ),
            ("With icons", "Icons precede labels.", TabsProps::new(with_icons())),
            (
                "Icon only",
                "Labels are hidden and kept as accessible names.",
                TabsProps::new(with_icons()).icon_only(true),
            ),
            (
                "Secondary variant",
                "The active tab is filled.",
                TabsProps::new(sections()).variant(TabsVariant::Secondary),
            ),
            (
                "Subtle variant",
                "The active tab is tinted.",
                TabsProps::new(sections()).variant(TabsVariant::Subtle),
            ),
            (
                "Compact size",
                "Tighter padding.",
                TabsProps::new(sections()).size(SizeVariant::Compact),
            ),
            (
                "Spacious size",
                "Looser padding.",
                TabsProps::new(sections()).size(SizeVariant::Spacious),
            ),
            (
                "Disabled option",
                "Activity cannot be selected and is skipped by the keyboard.",
                TabsProps::new([
                    TabOption::new("overview", "Overview"),
                    TabOption::new("activity", "Activity").disabled(true),
                    TabOption::new("settings", "Settings"),
                ]),
            ),
            (
                "Disabled group",
                "Nothing can be selected.",
                TabsProps::new(sections()).disabled(true),
            ),
        ];

        let mut subscriptions = Vec::new();
        let strips = demos
            .into_iter()
            .enumerate()
            .map(|(index, (title, description, props))| {
                let strip = host.strip(&format!("tabs-demo-{index}"), props, cx);
                subscriptions.push(cx.subscribe(&strip, move |page, _, event: &TabStripEvent, cx| {
                    page.record(title, event, cx);
                }));
                (title, description, strip)
            })
            .collect();

        let range = RANGES[0].0.to_string();
        let controlled = host.strip(
            "tabs-controlled",
            TabsProps::new(RANGES.iter().map(|(value, label)| TabOption::new(*value, *label)))
                .value(range.clone()),
            cx,
        );
        subscriptions.push(cx.subscribe(&controlled, |page, strip, event: &TabStripEvent, cx| {
            let TabStripEvent::Change(value) = event;
            page.range.clone_from(value);
            strip.update(cx, |strip, cx| strip.set_value(value.clone(), cx));
            page.record("Controlled", event, cx);
        }));

        let scrollable = host.strip(
            "tabs-months",
            TabsProps::new(
                MONTHS
                    .iter()
                    .map(|month| TabOption::new(month.to_lowercase(), *month)),
            )
            .scrollable(true)
            .scroll_options(scroll.clone()),
            cx,
        );
        subscriptions.push(cx.subscribe(&scrollable, |page, _, event: &TabStripEvent, cx| {
            page.record("Scrollable", event, cx);
        }));

        Self {
            strips,
            controlled,
            range,
            scrollable,
            last_change: "none yet".into(),
            _subscriptions: subscriptions,
        }
    }

    fn record(&mut self, source: &str, event: &TabStripEvent, cx: &mut Context<Self>) {
        let TabStripEvent::Change(value) = event;
        tracing::debug!(source, %value, "tab changed");
        self.last_change = format!("{source}: {value}").into();
        cx.notify();
    }

    /// Moves the controlled strip to the next range from outside the strip.
    fn advance_range(&mut self, cx: &mut Context<Self>) {
        let position = RANGES
            .iter()
            .position(|(value, _)| *value == self.range)
            .map_or(0, |index| (index + 1) % RANGES.len());
        self.range = RANGES[position].0.to_string();
        let range = self.range.clone();
        self.controlled
            .update(cx, |strip, cx| strip.set_value(range, cx));
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
                .text_size(px(15.0))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(theme.text_primary)
                .child(title),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(theme.text_secondary)
                .child(description),
        )
}

impl Render for TabsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();

        div()
            .id("tabs-page")
            .size_full()
            .overflow_y_scroll()
            .p(px(24.0))
            .flex()
            .flex_col()
            .gap(px(24.0))
            .children(self.strips.iter().map(|(title, description, strip)| {
                section(&theme, title, description).child(div().max_h(px(160.0)).child(strip.clone()))
            }))
            .child(
                section(
                    &theme,
                    "Controlled",
                    "The page owns the value; selections round-trip through the change event.",
                )
                .child(self.controlled.clone())
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap(px(12.0))
                        .child(
                            Button::new("advance-range")
                                .label("Next range")
                                .on_click(cx.listener(|page, _, _, cx| page.advance_range(cx))),
                        )
                        .child(
                            div()
                                .text_size(px(12.0))
                                .text_color(theme.text_muted)
                                .child(format!("value = {}", self.range)),
                        ),
                ),
            )
            .child(
                section(
                    &theme,
                    "Scrollable",
                    "Press an arrow to scroll by one tab; hold it to scroll continuously.",
                )
                .child(div().w(px(320.0)).child(self.scrollable.clone())),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(theme.text_muted)
                    .child(format!("Last change: {}", self.last_change)),
            )
    }
}
