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

use gpui::Rgba;
use serde::{Deserialize, Serialize};

use crate::styles::color::{rgba_from_hex, rgba_from_hex_alpha};

/// Built-in palettes, selectable from configuration or the command line.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ThemePreset {
    #[default]
    Dark,
    OledBlack,
    Light,
}

impl ThemePreset {
    pub fn config(self) -> ThemeConfig {
        match self {
            Self::Dark => ThemeConfig::dark(),
            Self::OledBlack => ThemeConfig::oled_black(),
            Self::Light => ThemeConfig::light(),
        }
    }
}

/// Every color the pane and tab renderers paint with.
///
/// Colors are grouped as:
/// - surfaces: the page, pane bodies and floating elements
/// - text: primary, secondary and muted (disabled) text
/// - accent: selected tab marker and its hover state
/// - interaction: hover, pressed/active, borders, focus ring
/// - overlay: the backdrop scrim behind temporary panes
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Page background behind everything.
    pub background_primary:   Rgba,
    /// Pane bodies and tab strip tracks.
    pub background_secondary: Rgba,
    /// Handles, scroll indicators and overlay pane bodies.
    pub background_elevated:  Rgba,

    pub text_primary:   Rgba,
    pub text_secondary: Rgba,
    pub text_muted:     Rgba,

    pub accent:       Rgba,
    pub accent_hover: Rgba,

    pub hover:      Rgba,
    pub active:     Rgba,
    pub border:     Rgba,
    pub focus_ring: Rgba,

    /// Scrim painted behind an overlay pane while it is expanded.
    pub backdrop: Rgba,
}

impl ThemeConfig {
    /// Neutral dark palette, the default.
    pub fn dark() -> Self {
        Self {
            background_primary:   rgba_from_hex(0x121212),
            background_secondary: rgba_from_hex(0x1d1d1d),
            background_elevated:  rgba_from_hex(0x282828),

            text_primary:   rgba_from_hex(0xffffff),
            text_secondary: rgba_from_hex(0xa0a0a0),
            text_muted:     rgba_from_hex(0x6a6a6a),

            accent:       rgba_from_hex(0x3d8bfd),
            accent_hover: rgba_from_hex(0x2f6fd0),

            hover:      rgba_from_hex(0x2a2a2a),
            active:     rgba_from_hex(0x3a3a3a),
            border:     rgba_from_hex(0x3a3a3a),
            focus_ring: rgba_from_hex_alpha(0x3d8bfd, 0.6),

            backdrop: rgba_from_hex_alpha(0x000000, 0.5),
        }
    }

    /// Pure black surfaces for OLED displays.
    pub fn oled_black() -> Self {
        Self {
            background_primary: rgba_from_hex(0x000000),
            background_secondary: rgba_from_hex(0x0a0a0a),
            background_elevated: rgba_from_hex(0x1a1a1a),
            hover: rgba_from_hex(0x1a1a1a),
            active: rgba_from_hex(0x2a2a2a),
            border: rgba_from_hex(0x2a2a2a),
            backdrop: rgba_from_hex_alpha(0x000000, 0.7),
            ..Self::dark()
        }
    }

    pub fn light() -> Self {
        Self {
            background_primary:   rgba_from_hex(0xffffff),
            background_secondary: rgba_from_hex(0xf5f5f5),
            background_elevated:  rgba_from_hex(0xffffff),

            text_primary:   rgba_from_hex(0x030303),
            text_secondary: rgba_from_hex(0x606060),
            text_muted:     rgba_from_hex(0x909090),

            accent:       rgba_from_hex(0x1a66d9),
            accent_hover: rgba_from_hex(0x1552b0),

            hover:      rgba_from_hex(0xeeeeee),
            active:     rgba_from_hex(0xe0e0e0),
            border:     rgba_from_hex(0xe0e0e0),
            focus_ring: rgba_from_hex_alpha(0x1a66d9, 0.5),

            backdrop: rgba_from_hex_alpha(0x000000, 0.3),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self { Self::dark() }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn presets_parse_from_config_names() {
        assert_eq!("oled_black".parse::<ThemePreset>().ok(), Some(ThemePreset::OledBlack));
        assert_eq!("LIGHT".parse::<ThemePreset>().ok(), Some(ThemePreset::Light));
        assert!("sepia".parse::<ThemePreset>().is_err());

        let preset: ThemePreset = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(preset, ThemePreset::Dark);
    }

    #[test]
    fn every_preset_has_a_translucent_backdrop() {
        for preset in ThemePreset::iter() {
            let backdrop = preset.config().backdrop;
            assert!(backdrop.a > 0.0 && backdrop.a < 1.0, "{preset}");
        }
    }

    #[test]
    fn oled_keeps_dark_text() {
        let oled = ThemeConfig::oled_black();
        assert_eq!(oled.text_primary, ThemeConfig::dark().text_primary);
        assert_eq!(oled.background_primary, rgba_from_hex(0x000000));
    }
}
