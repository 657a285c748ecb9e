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

//! gpui renderers for panekit.
//!
//! [`PanePanel`] and [`TabStrip`] are gpui views over the headless
//! [`panekit_core::Pane`] and [`panekit_core::Tabs`]. They draw the rendering
//! contract those components produce and feed pointer, keyboard and scroll
//! input back into them. Colors come from the [`ThemeProvider`] global.

pub mod components;
pub mod styles;
pub mod theme;

pub use components::{PanePanel, PanePanelEvent, TabStrip, TabStripEvent};
pub use theme::{ThemeConfig, ThemeExt, ThemePreset, ThemeProvider};
