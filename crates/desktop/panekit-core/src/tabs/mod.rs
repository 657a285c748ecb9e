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

//! Single-selection tab strip.
//!
//! Selection follows the roving-tabindex pattern: exactly one tab is in the
//! focus order and arrow keys move selection and focus together. In
//! scrollable mode the strip also drives start/end scroll indicators with
//! press-and-hold continuous scrolling.

mod config;
mod navigation;
mod option;
mod scroll;
mod tabs;
mod view;

pub use config::{ChangeHandler, Orientation, ScrollOptions, TabsProps, TabsVariant};
pub use navigation::{KeyOutcome, Step};
pub use option::TabOption;
pub use scroll::{ScrollDirection, ScrollIndicators, ScrollMetrics, ScrollViewport};
pub use tabs::Tabs;
pub use view::{IndicatorView, ScrollView, TabView, TabsView};
