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

//! Hex helpers for building gpui [`Rgba`] values.

use gpui::Rgba;

#[allow(clippy::cast_precision_loss)]
fn channel(hex: u32, shift: u32) -> f32 { ((hex >> shift) & 0xFF) as f32 / 255.0 }

/// Converts a 24-bit `0xRRGGBB` value to an opaque [`Rgba`].
pub fn rgba_from_hex(hex: u32) -> Rgba { rgba_from_hex_alpha(hex, 1.0) }

/// Converts a 24-bit `0xRRGGBB` value to an [`Rgba`] with the given alpha.
///
/// ```ignore
/// let scrim = rgba_from_hex_alpha(0x000000, 0.45);
/// ```
pub fn rgba_from_hex_alpha(hex: u32, alpha: f32) -> Rgba {
    Rgba {
        r: channel(hex, 16),
        g: channel(hex, 8),
        b: channel(hex, 0),
        a: alpha.clamp(0.0, 1.0),
    }
}
