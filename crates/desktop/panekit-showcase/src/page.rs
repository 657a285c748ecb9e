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

use panekit_core::TabOption;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Top-level pages of the showcase, switched from the navigation pane.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Page {
    #[default]
    Pane,
    Tabs,
    About,
}

impl Page {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Pane => "Pane",
            Self::Tabs => "Tabs",
            Self::About => "About",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pane => "▤",
            Self::Tabs => "⇆",
            Self::About => "ⓘ",
        }
    }

    /// One navigation tab per page, valued by the page's config name.
    pub fn tab_options() -> Vec<TabOption> {
        Self::iter()
            .map(|page| TabOption::new(page.as_ref(), page.title()).icon(page.icon()))
            .collect()
    }
}
