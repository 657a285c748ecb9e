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

//! Size variants and opaque length tokens.

use serde::{Deserialize, Serialize};

/// Density variant shared by panes and tab strips.
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
    strum_macros::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SizeVariant {
    Compact,
    #[default]
    Normal,
    Spacious,
}

impl SizeVariant {
    /// Normal is the baseline and carries no modifier class.
    pub fn modifier(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Compact => Some("compact"),
            Self::Spacious => Some("spacious"),
        }
    }
}

/// A length value passed through to the renderer untouched, such as
/// `"280px"` or `"20rem"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct SizeToken(String);

impl SizeToken {
    pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Resolves a `px` token to a pixel count. Other units return `None` and
    /// are left to the renderer.
    pub fn pixels(&self) -> Option<f32> {
        self.0
            .trim()
            .strip_suffix("px")
            .and_then(|number| number.trim().parse::<f32>().ok())
    }
}

impl From<&str> for SizeToken {
    fn from(value: &str) -> Self { Self::new(value) }
}

impl From<String> for SizeToken {
    fn from(value: String) -> Self { Self(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_pixel_tokens_only() {
        assert_eq!(SizeToken::from("280px").pixels(), Some(280.0));
        assert_eq!(SizeToken::from(" 56.5px ").pixels(), Some(56.5));
        assert_eq!(SizeToken::from("20rem").pixels(), None);
        assert_eq!(SizeToken::from("px").pixels(), None);
    }

    #[test]
    fn normal_size_has_no_modifier() {
        assert_eq!(SizeVariant::Normal.modifier(), None);
        assert_eq!(SizeVariant::Compact.modifier(), Some("compact"));
        assert_eq!("spacious".parse::<SizeVariant>().ok(), Some(SizeVariant::Spacious));
    }
}
