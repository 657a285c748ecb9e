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

//! Headless component state for panekit.
//!
//! This crate owns everything about the pane and tab-strip components that is
//! not drawing:
//! - [`pane`]: the three-state collapsible [`Pane`] and its rendering contract
//! - [`tabs`]: the roving-tabindex [`Tabs`] strip with optional scrolling
//! - [`StateCell`]: controlled/uncontrolled value ownership
//! - [`Document`]: host-level event targets with RAII [`Subscription`]s
//! - [`Scheduler`]: cancellable timers, deterministic or tokio-backed
//!
//! Renderers (see `panekit-ui`) translate [`PaneView`] and [`TabsView`] into
//! real elements and forward host events back into the components.

mod class_list;
mod document;
mod icon;
mod key;
mod scheduler;
mod size;
mod state_cell;

pub mod pane;
pub mod tabs;

pub use class_list::ClassList;
pub use document::{Document, EventTarget, PointerUp, Subscription, Viewport};
pub use icon::Chevron;
pub use key::Key;
pub use pane::{
    Pane, PaneBehavior, PaneMode, PanePosition, PaneProps, PaneState, PaneView, cycle_state,
};
pub use scheduler::{ManualScheduler, Scheduler, TimerHandle, TokioScheduler};
pub use size::{SizeToken, SizeVariant};
pub use state_cell::{ControlledStateCell, StateCell, UncontrolledStateCell, state_cell};
pub use tabs::{
    KeyOutcome, Orientation, ScrollDirection, ScrollIndicators, ScrollMetrics, ScrollOptions,
    ScrollViewport, TabOption, Tabs, TabsProps, TabsVariant, TabsView,
};
