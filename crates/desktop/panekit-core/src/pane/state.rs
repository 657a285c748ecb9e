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

use serde::{Deserialize, Serialize};

/// How much of a pane's content area is visible.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
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
pub enum PaneState {
    #[default]
    Closed,
    Partial,
    Open,
}

impl PaneState {
    pub const fn is_expanded(self) -> bool { !matches!(self, Self::Closed) }

    /// Accessible name of the handle, describing what activating it does.
    pub const fn handle_label(self) -> &'static str {
        match self {
            Self::Closed => "Open pane",
            Self::Partial => "Expand pane",
            Self::Open => "Close pane",
        }
    }
}

/// The state a handle activation moves to.
///
/// `partial` is only part of the cycle when there is partial content to show.
pub const fn cycle_state(current: PaneState, has_partial: bool) -> PaneState {
    match current {
        PaneState::Closed if has_partial => PaneState::Partial,
        PaneState::Closed | PaneState::Partial => PaneState::Open,
        PaneState::Open => PaneState::Closed,
    }
}
