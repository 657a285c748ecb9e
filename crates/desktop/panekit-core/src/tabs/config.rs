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

use std::{fmt, rc::Rc, time::Duration};

use bon::Builder;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use validator::Validate;

use super::option::TabOption;
use crate::{key::Key, size::SizeVariant};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TabsVariant {
    #[default]
    Primary,
    Secondary,
    Subtle,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn is_vertical(self) -> bool { matches!(self, Self::Vertical) }

    pub const fn next_key(self) -> Key {
        match self {
            Self::Horizontal => Key::ArrowRight,
            Self::Vertical => Key::ArrowDown,
        }
    }

    pub const fn previous_key(self) -> Key {
        match self {
            Self::Horizontal => Key::ArrowLeft,
            Self::Vertical => Key::ArrowUp,
        }
    }
}

/// Timing of indicator-driven scrolling.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, SmartDefault, Builder, Validate)]
#[serde(default)]
pub struct ScrollOptions {
    /// Pixels moved per repeat frame while an indicator is held.
    #[default = 3.0]
    #[validate(range(min = 0.5, max = 64.0))]
    pub step_px: f32,

    /// Period of the repeat timer.
    #[default = 16]
    #[validate(range(min = 1, max = 1000))]
    pub frame_interval_ms: u64,

    /// How long a press must last before continuous scrolling starts. A
    /// release inside this window is a click.
    #[default = 200]
    #[validate(range(max = 2000))]
    pub hold_delay_ms: u64,

    /// Delay before indicators are recomputed a second time after mount, once
    /// layout has settled.
    #[default = 100]
    #[validate(range(max = 2000))]
    pub settle_delay_ms: u64,
}

impl ScrollOptions {
    pub const fn frame_interval(&self) -> Duration { Duration::from_millis(self.frame_interval_ms) }

    pub const fn hold_delay(&self) -> Duration { Duration::from_millis(self.hold_delay_ms) }

    pub const fn settle_delay(&self) -> Duration { Duration::from_millis(self.settle_delay_ms) }
}

pub type ChangeHandler = Rc<dyn Fn(&str)>;

/// Configuration a tab strip is mounted with.
///
/// Supplying [`TabsProps::value`] makes the strip controlled for its whole
/// lifetime.
#[derive(Clone, Default)]
pub struct TabsProps {
    pub(crate) options:       Vec<TabOption>,
    pub(crate) value:         Option<String>,
    pub(crate) on_change:     Option<ChangeHandler>,
    pub(crate) default_value: Option<String>,
    pub(crate) variant:       TabsVariant,
    pub(crate) orientation:   Orientation,
    pub(crate) size:          SizeVariant,
    pub(crate) icon_only:     bool,
    pub(crate) disabled:      bool,
    pub(crate) scrollable:    bool,
    pub(crate) class:         Option<String>,
    pub(crate) scroll:        ScrollOptions,
}

impl TabsProps {
    pub fn new(options: impl IntoIterator<Item = TabOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Makes the strip controlled, showing `value`.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the handler called with the value of every successful selection.
    #[must_use]
    pub fn on_change(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Initial value of an uncontrolled strip. Falls back to the first
    /// option.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub const fn variant(mut self, variant: TabsVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub const fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub const fn size(mut self, size: SizeVariant) -> Self {
        self.size = size;
        self
    }

    /// Hides labels; they remain as accessible names.
    #[must_use]
    pub const fn icon_only(mut self, icon_only: bool) -> Self {
        self.icon_only = icon_only;
        self
    }

    /// Disables every tab.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub const fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn scroll_options(mut self, options: ScrollOptions) -> Self {
        self.scroll = options;
        self
    }

    pub fn options(&self) -> &[TabOption] { &self.options }

    pub const fn orientation_value(&self) -> Orientation { self.orientation }

    pub const fn is_scrollable(&self) -> bool { self.scrollable }

    pub const fn scroll_options_value(&self) -> &ScrollOptions { &self.scroll }

    pub(crate) fn initial_value(&self) -> String {
        self.default_value
            .clone()
            .or_else(|| self.options.first().map(|option| option.value.clone()))
            .unwrap_or_default()
    }

    /// Whether `option` can be selected given the group state.
    pub(crate) const fn is_enabled(&self, option: &TabOption) -> bool { !self.disabled && !option.disabled }
}

impl fmt::Debug for TabsProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsProps")
            .field("options", &self.options)
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("variant", &self.variant)
            .field("orientation", &self.orientation)
            .field("size", &self.size)
            .field("icon_only", &self.icon_only)
            .field("disabled", &self.disabled)
            .field("scrollable", &self.scrollable)
            .field("class", &self.class)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_value_prefers_default_then_first_option() {
        let options = vec![TabOption::new("a", "A"), TabOption::new("b", "B")];
        assert_eq!(TabsProps::new(options.clone()).initial_value(), "a");
        assert_eq!(TabsProps::new(options).default_value("b").initial_value(), "b");
        assert_eq!(TabsProps::new(Vec::new()).initial_value(), "");
    }

    #[test]
    fn scroll_options_defaults_and_validation() {
        let options = ScrollOptions::default();
        assert!((options.step_px - 3.0).abs() < f32::EPSILON);
        assert_eq!(options.frame_interval(), Duration::from_millis(16));
        assert_eq!(options.hold_delay(), Duration::from_millis(200));
        assert_eq!(options.settle_delay(), Duration::from_millis(100));
        assert!(options.validate().is_ok());

        let invalid = ScrollOptions::builder()
            .step_px(3.0)
            .frame_interval_ms(0)
            .hold_delay_ms(200)
            .settle_delay_ms(100)
            .build();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn scroll_options_fill_missing_fields() {
        let options: ScrollOptions = serde_json::from_str(r#"{ "step_px": 6.0 }"#).unwrap();
        assert!((options.step_px - 6.0).abs() < f32::EPSILON);
        assert_eq!(options.frame_interval_ms, 16);
    }

    #[test]
    fn arrow_keys_follow_orientation() {
        assert_eq!(Orientation::Horizontal.next_key(), Key::ArrowRight);
        assert_eq!(Orientation::Horizontal.previous_key(), Key::ArrowLeft);
        assert_eq!(Orientation::Vertical.next_key(), Key::ArrowDown);
        assert_eq!(Orientation::Vertical.previous_key(), Key::ArrowUp);
    }
}
