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

//! Global theme access.
//!
//! Components read the palette through [`ThemeExt`]:
//! ```ignore
//! let theme = cx.theme();
//! ```

use gpui::{App, Global};

use super::theme_config::{ThemeConfig, ThemePreset};

/// Holds the active palette as a gpui global.
pub struct ThemeProvider {
    preset: Option<ThemePreset>,
    theme:  ThemeConfig,
}

impl Global for ThemeProvider {}

impl ThemeProvider {
    pub const fn new(theme: ThemeConfig) -> Self { Self { preset: None, theme } }

    pub fn from_preset(preset: ThemePreset) -> Self {
        Self {
            preset: Some(preset),
            theme:  preset.config(),
        }
    }

    pub const fn theme(&self) -> &ThemeConfig { &self.theme }

    /// The preset the current palette came from, `None` for custom palettes.
    pub const fn preset(&self) -> Option<ThemePreset> { self.preset }

    pub fn set_theme(&mut self, theme: ThemeConfig) {
        self.preset = None;
        self.theme = theme;
    }

    pub fn set_preset(&mut self, preset: ThemePreset) {
        tracing::debug!(%preset, "switching theme preset");
        self.preset = Some(preset);
        self.theme = preset.config();
    }

    /// Registers the default preset. Call during application startup.
    pub fn init(cx: &mut App) { Self::init_with_preset(cx, ThemePreset::default()); }

    pub fn init_with_preset(cx: &mut App, preset: ThemePreset) {
        cx.set_global(Self::from_preset(preset));
    }
}

pub trait ThemeExt {
    /// The active palette.
    fn theme(&self) -> &ThemeConfig;
}

impl ThemeExt for App {
    fn theme(&self) -> &ThemeConfig { self.global::<ThemeProvider>().theme() }
}
