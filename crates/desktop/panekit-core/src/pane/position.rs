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

use crate::{icon::Chevron, size::SizeToken};

/// The container edge a pane is anchored to.
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
pub enum PanePosition {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl PanePosition {
    /// Left and right panes size their width, top and bottom their height.
    pub const fn is_horizontal(self) -> bool { matches!(self, Self::Left | Self::Right) }

    /// Direction the handle chevron points while the pane is not open, away
    /// from the anchored edge.
    pub const fn outward_chevron(self) -> Chevron {
        match self {
            Self::Left => Chevron::Right,
            Self::Right => Chevron::Left,
            Self::Top => Chevron::Down,
            Self::Bottom => Chevron::Up,
        }
    }

    pub fn default_open_size(self) -> SizeToken {
        if self.is_horizontal() {
            SizeToken::from("280px")
        } else {
            SizeToken::from("240px")
        }
    }

    pub fn default_partial_size() -> SizeToken { SizeToken::from("56px") }
}
