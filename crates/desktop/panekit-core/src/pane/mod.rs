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

//! Collapsible edge-anchored pane.
//!
//! ```text
//!            handle        handle        handle
//!   closed ─────────▶ partial ─────▶ open ─────▶ closed
//!      │    (partial                  ▲
//!      │     content)                 │
//!      └──────────────────────────────┘
//!            handle (no partial content)
//!
//!   dismiss (backdrop, Escape) ──▶ closed
//! ```

mod config;
mod pane;
mod position;
mod state;
mod view;

pub use config::{PaneBehavior, PaneMode, PaneProps, StateChangeHandler};
pub use pane::Pane;
pub use position::PanePosition;
pub use state::{PaneState, cycle_state};
pub use view::{BackdropView, ContentSlot, HandleView, PaneView};
