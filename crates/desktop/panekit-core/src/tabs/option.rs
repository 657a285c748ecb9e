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

/// One entry of a tab strip. `value` must be unique within its strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabOption {
    pub value:    String,
    pub label:    String,
    #[serde(default)]
    pub disabled: bool,
    /// Icon name resolved by the renderer.
    #[serde(default)]
    pub icon:     Option<String>,
}

impl TabOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value:    value.into(),
            label:    label.into(),
            disabled: false,
            icon:     None,
        }
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
