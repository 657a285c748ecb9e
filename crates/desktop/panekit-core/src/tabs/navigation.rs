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

//! Keyboard traversal over an ordered option list.
//!
//! All functions are total: empty lists and lists without an enabled option
//! yield `None` instead of panicking.

use super::{config::Orientation, option::TabOption};
use crate::key::Key;

/// A keyboard navigation intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    First,
    Last,
}

impl Step {
    /// Maps a key to an intent for the given orientation. Arrow keys along
    /// the other axis are not navigation keys.
    pub fn from_key(key: &Key, orientation: Orientation) -> Option<Self> {
        match key {
            Key::Home => Some(Self::First),
            Key::End => Some(Self::Last),
            key if *key == orientation.next_key() => Some(Self::Next),
            key if *key == orientation.previous_key() => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Result of offering a key to a tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a navigation key; the host may handle it.
    Ignored,
    /// Consumed without moving.
    Handled,
    /// Selection moved; the host should focus the tab at `index`.
    Moved { index: usize },
}

impl KeyOutcome {
    pub const fn is_consumed(self) -> bool { !matches!(self, Self::Ignored) }
}

fn eligible(options: &[TabOption], group_disabled: bool, index: usize) -> bool {
    !group_disabled && options.get(index).is_some_and(|option| !option.disabled)
}

pub(crate) fn first_enabled(options: &[TabOption], group_disabled: bool) -> Option<usize> {
    (0..options.len()).find(|&index| eligible(options, group_disabled, index))
}

pub(crate) fn last_enabled(options: &[TabOption], group_disabled: bool) -> Option<usize> {
    (0..options.len()).rev().find(|&index| eligible(options, group_disabled, index))
}

/// Scans from `current` in one direction with wraparound and returns the
/// first eligible index, which may be `current` itself after a full cycle.
///
/// Without a current index, forward starts at the first enabled option and
/// backward at the last.
pub(crate) fn wrap_step(
    options: &[TabOption],
    group_disabled: bool,
    current: Option<usize>,
    forward: bool,
) -> Option<usize> {
    let len = options.len();
    let Some(current) = current.filter(|&index| index < len) else {
        return if forward {
            first_enabled(options, group_disabled)
        } else {
            last_enabled(options, group_disabled)
        };
    };
    (1..=len)
        .map(|offset| {
            if forward {
                (current + offset) % len
            } else {
                (current + len - offset) % len
            }
        })
        .find(|&index| eligible(options, group_disabled, index))
}

/// Target index for `step`, or `None` when nothing is eligible.
pub(crate) fn resolve(
    options: &[TabOption],
    group_disabled: bool,
    current: Option<usize>,
    step: Step,
) -> Option<usize> {
    match step {
        Step::Next => wrap_step(options, group_disabled, current, true),
        Step::Previous => wrap_step(options, group_disabled, current, false),
        Step::First => first_enabled(options, group_disabled),
        Step::Last => last_enabled(options, group_disabled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(disabled: &[bool]) -> Vec<TabOption> {
        disabled
            .iter()
            .enumerate()
            .map(|(index, &disabled)| {
                TabOption::new(format!("t{index}"), format!("Tab {index}")).disabled(disabled)
            })
            .collect()
    }

    #[test]
    fn next_wraps_and_skips_disabled() {
        let opts = options(&[false, true, false, true]);
        assert_eq!(wrap_step(&opts, false, Some(0), true), Some(2));
        assert_eq!(wrap_step(&opts, false, Some(2), true), Some(0));
        assert_eq!(wrap_step(&opts, false, Some(0), false), Some(2));
    }

    #[test]
    fn single_enabled_option_steps_onto_itself() {
        let opts = options(&[true, false, true]);
        assert_eq!(wrap_step(&opts, false, Some(1), true), Some(1));
        assert_eq!(wrap_step(&opts, false, Some(1), false), Some(1));
    }

    #[test]
    fn nothing_eligible_yields_none() {
        assert_eq!(wrap_step(&[], false, None, true), None);
        assert_eq!(resolve(&[], false, None, Step::Last), None);
        let opts = options(&[true, true]);
        assert_eq!(wrap_step(&opts, false, Some(0), true), None);
        let opts = options(&[false, false]);
        assert_eq!(resolve(&opts, true, Some(0), Step::First), None);
    }

    #[test]
    fn unmatched_current_starts_from_the_ends() {
        let opts = options(&[true, false, false, true]);
        assert_eq!(wrap_step(&opts, false, None, true), Some(1));
        assert_eq!(wrap_step(&opts, false, None, false), Some(2));
    }

    #[test]
    fn home_and_end_ignore_position() {
        let opts = options(&[true, false, false, false, true]);
        assert_eq!(resolve(&opts, false, Some(2), Step::First), Some(1));
        assert_eq!(resolve(&opts, false, Some(2), Step::Last), Some(3));
    }

    #[test]
    fn cross_axis_arrows_are_not_navigation() {
        assert_eq!(Step::from_key(&Key::ArrowDown, Orientation::Horizontal), None);
        assert_eq!(Step::from_key(&Key::ArrowDown, Orientation::Vertical), Some(Step::Next));
        assert_eq!(Step::from_key(&Key::Home, Orientation::Vertical), Some(Step::First));
        assert_eq!(Step::from_key(&Key::Other("a".into()), Orientation::Vertical), None);
    }
}
