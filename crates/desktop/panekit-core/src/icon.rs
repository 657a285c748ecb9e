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

/// Direction a chevron glyph points in.
///
/// Components pick a chevron by lookup; renderers map it to whatever glyph or
/// asset they draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chevron {
    Left,
    Right,
    Up,
    Down,
}

impl Chevron {
    /// The chevron rotated by 180 degrees.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// A plain-text glyph for hosts without icon assets.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Left => "‹",
            Self::Right => "›",
            Self::Up => "˄",
            Self::Down => "˅",
        }
    }
}
