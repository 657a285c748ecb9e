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

use super::{
    config::{Orientation, TabsProps, TabsVariant},
    navigation,
    scroll::{ScrollDirection, ScrollIndicators},
};
use crate::{class_list::ClassList, icon::Chevron};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub index:         usize,
    pub value:         String,
    pub label:         String,
    pub icon:          Option<String>,
    pub classes:       ClassList,
    pub role:          &'static str,
    pub aria_selected: bool,
    pub disabled:      bool,
    /// `0` for the one tab in the focus order, `-1` for the rest.
    pub tab_index:     i8,
    /// Set in icon-only mode, where the label is not drawn.
    pub aria_label:    Option<String>,
    pub show_label:    bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorView {
    pub direction:  ScrollDirection,
    pub classes:    ClassList,
    pub aria_label: &'static str,
    pub chevron:    Chevron,
}

impl IndicatorView {
    fn new(direction: ScrollDirection, orientation: Orientation) -> Self {
        let mut classes = ClassList::new("tabs__scroll-indicator");
        classes.push(format!("tabs__scroll-indicator--{direction}"));
        Self {
            direction,
            classes,
            aria_label: direction.aria_label(),
            chevron: direction.chevron(orientation),
        }
    }
}

/// Scroll wrapper of a scrollable strip. Indicators are only present while
/// there is content to scroll to in their direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollView {
    pub wrapper_classes: ClassList,
    pub start:           Option<IndicatorView>,
    pub end:             Option<IndicatorView>,
}

/// Everything a renderer needs to draw a tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsView {
    pub classes:          ClassList,
    pub role:             &'static str,
    pub aria_orientation: Orientation,
    pub variant:          TabsVariant,
    pub tabs:             Vec<TabView>,
    pub scroll:           Option<ScrollView>,
}

impl TabsView {
    pub(crate) fn build(
        props: &TabsProps,
        active: Option<usize>,
        indicators: Option<ScrollIndicators>,
    ) -> Self {
        let mut classes = ClassList::new("tabs");
        classes.push(format!("tabs--{}", props.variant));
        classes.push_if(props.orientation.is_vertical(), "tabs--vertical");
        if let Some(modifier) = props.size.modifier() {
            classes.push(format!("tabs--{modifier}"));
        }
        classes.push_if(props.icon_only, "tabs--icon-only");
        classes.push_if(props.disabled, "tabs--disabled");
        classes.push_if(props.scrollable, "tabs--scrollable");
        if let Some(class) = &props.class {
            classes.push(class.clone());
        }
        classes.push_if(props.scrollable, "tabs__scroll-container");

        let focusable = active.or_else(|| navigation::first_enabled(&props.options, props.disabled));

        let tabs = props
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let selected = active == Some(index);
                let disabled = !props.is_enabled(option);
                let mut classes = ClassList::new("tabs__tab");
                classes.push_if(selected, "tabs__tab--active");
                classes.push_if(disabled, "tabs__tab--disabled");
                TabView {
                    index,
                    value: option.value.clone(),
                    label: option.label.clone(),
                    icon: option.icon.clone(),
                    classes,
                    role: "tab",
                    aria_selected: selected,
                    disabled,
                    tab_index: if focusable == Some(index) { 0 } else { -1 },
                    aria_label: props.icon_only.then(|| option.label.clone()),
                    show_label: !props.icon_only,
                }
            })
            .collect();

        let scroll = indicators.map(|indicators| {
            let mut wrapper_classes = ClassList::new("tabs-scrollable-wrapper");
            wrapper_classes.push_if(props.orientation.is_vertical(), "tabs-scrollable-wrapper--vertical");
            ScrollView {
                wrapper_classes,
                start: indicators
                    .start
                    .then(|| IndicatorView::new(ScrollDirection::Start, props.orientation)),
                end: indicators
                    .end
                    .then(|| IndicatorView::new(ScrollDirection::End, props.orientation)),
            }
        });

        Self {
            classes,
            role: "tablist",
            aria_orientation: props.orientation,
            variant: props.variant,
            tabs,
            scroll,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &TabView> { self.tabs.iter().filter(|tab| tab.aria_selected) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{size::SizeVariant, tabs::TabOption};

    fn options() -> Vec<TabOption> {
        vec![
            TabOption::new("home", "Home").icon("home"),
            TabOption::new("files", "Files").disabled(true),
            TabOption::new("settings", "Settings"),
        ]
    }

    #[test]
    fn root_classes_in_order() {
        let props = TabsProps::new(options())
            .variant(TabsVariant::Subtle)
            .orientation(Orientation::Vertical)
            .size(SizeVariant::Spacious)
            .icon_only(true)
            .disabled(true)
            .class("nav");
        let view = TabsView::build(&props, Some(0), None);
        assert_eq!(
            view.classes.to_string(),
            "tabs tabs--subtle tabs--vertical tabs--spacious tabs--icon-only tabs--disabled nav"
        );
        assert_eq!(view.role, "tablist");
        assert_eq!(view.aria_orientation, Orientation::Vertical);
    }

    #[test]
    fn roving_tabindex_marks_the_active_tab() {
        let view = TabsView::build(&TabsProps::new(options()), Some(2), None);
        let indexes: Vec<i8> = view.tabs.iter().map(|tab| tab.tab_index).collect();
        assert_eq!(indexes, vec![-1, -1, 0]);
        assert_eq!(view.selected().count(), 1);
        assert!(view.tabs[1].disabled);
        assert_eq!(view.tabs[1].classes.to_string(), "tabs__tab tabs__tab--disabled");
        assert_eq!(view.tabs[2].classes.to_string(), "tabs__tab tabs__tab--active");
    }

    #[test]
    fn unmatched_value_selects_nothing_but_stays_reachable() {
        let props = TabsProps::new(vec![
            TabOption::new("a", "A").disabled(true),
            TabOption::new("b", "B"),
        ]);
        let view = TabsView::build(&props, None, None);
        assert_eq!(view.selected().count(), 0);
        assert_eq!(view.tabs[1].tab_index, 0);
    }

    #[test]
    fn icon_only_moves_label_to_aria() {
        let view = TabsView::build(&TabsProps::new(options()).icon_only(true), Some(0), None);
        assert_eq!(view.tabs[0].aria_label.as_deref(), Some("Home"));
        assert!(!view.tabs[0].show_label);

        let view = TabsView::build(&TabsProps::new(options()), Some(0), None);
        assert_eq!(view.tabs[0].aria_label, None);
        assert!(view.tabs[0].show_label);
    }

    #[test]
    fn scroll_view_lists_visible_indicators() {
        let props = TabsProps::new(options()).orientation(Orientation::Vertical).scrollable(true);
        let view = TabsView::build(&props, Some(0), Some(ScrollIndicators { start: false, end: true }));
        assert!(view.classes.contains("tabs--scrollable"));
        assert!(view.classes.contains("tabs__scroll-container"));

        let scroll = view.scroll.expect("scrollable strip has a scroll view");
        assert_eq!(
            scroll.wrapper_classes.to_string(),
            "tabs-scrollable-wrapper tabs-scrollable-wrapper--vertical"
        );
        assert!(scroll.start.is_none());
        let end = scroll.end.expect("end indicator shown");
        assert_eq!(end.aria_label, "Scroll to next tabs");
        assert_eq!(end.chevron, Chevron::Down);
        assert_eq!(end.classes.to_string(), "tabs__scroll-indicator tabs__scroll-indicator--end");
    }
}
