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

//! Scroll probes and indicator state for scrollable strips.

use serde::{Deserialize, Serialize};

use super::config::Orientation;
use crate::{document::Subscription, icon::Chevron, scheduler::TimerHandle};

/// The three probes indicator visibility is computed from, measured along
/// the strip's main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Distance scrolled from the start.
    pub offset:  f32,
    /// Total scrollable extent of the tab list.
    pub content: f32,
    /// Extent of the visible viewport.
    pub visible: f32,
}

impl ScrollMetrics {
    pub const fn new(offset: f32, content: f32, visible: f32) -> Self { Self { offset, content, visible } }

    pub fn max_offset(&self) -> f32 { (self.content - self.visible).max(0.0) }

    /// One pixel of slack on each side absorbs sub-pixel layout rounding.
    pub fn indicators(&self) -> ScrollIndicators {
        ScrollIndicators {
            start: self.offset > 1.0,
            end:   self.offset < self.content - self.visible - 1.0,
        }
    }
}

/// Which scroll indicators are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollIndicators {
    pub start: bool,
    pub end:   bool,
}

impl ScrollIndicators {
    pub const fn shows(self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Start => self.start,
            ScrollDirection::End => self.end,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScrollDirection {
    Start,
    End,
}

impl ScrollDirection {
    pub const fn sign(self) -> f32 {
        match self {
            Self::Start => -1.0,
            Self::End => 1.0,
        }
    }

    pub const fn aria_label(self) -> &'static str {
        match self {
            Self::Start => "Scroll to previous tabs",
            Self::End => "Scroll to next tabs",
        }
    }

    pub const fn chevron(self, orientation: Orientation) -> Chevron {
        match (orientation, self) {
            (Orientation::Horizontal, Self::Start) => Chevron::Left,
            (Orientation::Horizontal, Self::End) => Chevron::Right,
            (Orientation::Vertical, Self::Start) => Chevron::Up,
            (Orientation::Vertical, Self::End) => Chevron::Down,
        }
    }
}

/// The scroll container a scrollable strip is drawn into.
///
/// Implemented by the renderer over its real scroll area.
pub trait ScrollViewport {
    /// Current probes along the strip's main axis.
    fn metrics(&self) -> ScrollMetrics;

    /// Scrolls by `delta` pixels, clamped to the scrollable range.
    fn scroll_by(&self, delta: f32);

    /// Extent of one tab plus the gap between tabs, `None` while the strip
    /// has no laid-out tab.
    fn tab_step(&self) -> Option<f32>;
}

/// An indicator currently held down.
pub(crate) struct Press {
    pub(crate) direction: ScrollDirection,
    pub(crate) frames:    u32,
    /// Continuous-scroll timer. Owned by the press, so it never outlives it.
    pub(crate) repeat:    TimerHandle,
    /// Document pointer-up listener, alive for the duration of the press.
    pub(crate) _release:  Subscription,
}

/// Resources of a scrollable strip. Dropping it releases all of them.
#[derive(Default)]
pub(crate) struct ScrollState {
    pub(crate) indicators: ScrollIndicators,
    pub(crate) press:      Option<Press>,
    /// Probes seen by the last indicator update.
    pub(crate) measured:   Option<ScrollMetrics>,
    pub(crate) settle:     Option<TimerHandle>,
    pub(crate) resize:     Option<Subscription>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicators_at_both_ends() {
        let at_start = ScrollMetrics::new(0.0, 1200.0, 300.0);
        assert_eq!(at_start.indicators(), ScrollIndicators { start: false, end: true });

        let at_end = ScrollMetrics::new(900.0, 1200.0, 300.0);
        assert_eq!(at_end.indicators(), ScrollIndicators { start: true, end: false });

        let middle = ScrollMetrics::new(450.0, 1200.0, 300.0);
        assert_eq!(middle.indicators(), ScrollIndicators { start: true, end: true });
    }

    #[test]
    fn sub_pixel_slack_hides_indicators() {
        assert!(!ScrollMetrics::new(1.0, 1200.0, 300.0).indicators().start);
        assert!(!ScrollMetrics::new(899.5, 1200.0, 300.0).indicators().end);
    }

    #[test]
    fn no_overflow_no_indicators() {
        let fits = ScrollMetrics::new(0.0, 200.0, 300.0);
        assert_eq!(fits.indicators(), ScrollIndicators::default());
        assert!(fits.max_offset().abs() < f32::EPSILON);
    }

    #[test]
    fn chevrons_follow_orientation() {
        assert_eq!(ScrollDirection::Start.chevron(Orientation::Horizontal), Chevron::Left);
        assert_eq!(ScrollDirection::End.chevron(Orientation::Vertical), Chevron::Down);
    }
}
