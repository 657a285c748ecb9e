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

use std::{fmt, rc::Rc};

use serde::{Deserialize, Serialize};

use super::{position::PanePosition, state::PaneState};
use crate::size::{SizeToken, SizeVariant};

/// Lifetime model of a pane.
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
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaneMode {
    /// Structural, always rendered with a handle.
    #[default]
    Permanent,
    /// Ephemeral overlay dismissed by backdrop or Escape.
    Temporary,
}

/// How a pane coexists with sibling content.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaneBehavior {
    /// Takes layout space and displaces siblings.
    Push,
    /// Floats above siblings.
    Overlay,
}

impl PaneBehavior {
    pub const fn for_mode(mode: PaneMode) -> Self {
        match mode {
            PaneMode::Permanent => Self::Push,
            PaneMode::Temporary => Self::Overlay,
        }
    }
}

pub type StateChangeHandler = Rc<dyn Fn(PaneState)>;

/// Configuration a pane is mounted with.
///
/// Only [`PaneProps::state`] decides controllability; it is read once at
/// mount. Later values go through [`super::Pane::set_controlled_state`].
#[derive(Clone)]
pub struct PaneProps {
    pub(crate) position:        PanePosition,
    pub(crate) mode:            PaneMode,
    pub(crate) behavior:        Option<PaneBehavior>,
    pub(crate) state:           Option<PaneState>,
    pub(crate) on_state_change: Option<StateChangeHandler>,
    pub(crate) default_state:   PaneState,
    pub(crate) handle:          Option<bool>,
    pub(crate) backdrop:        bool,
    pub(crate) fixed:           bool,
    pub(crate) open_size:       Option<SizeToken>,
    pub(crate) partial_size:    Option<SizeToken>,
    pub(crate) size:            SizeVariant,
    pub(crate) partial_content: bool,
    pub(crate) class:           Option<String>,
}

impl PaneProps {
    pub fn new(position: PanePosition) -> Self {
        Self {
            position,
            mode: PaneMode::default(),
            behavior: None,
            state: None,
            on_state_change: None,
            default_state: PaneState::Closed,
            handle: None,
            backdrop: true,
            fixed: false,
            open_size: None,
            partial_size: None,
            size: SizeVariant::default(),
            partial_content: false,
            class: None,
        }
    }

    /// Sets the lifetime model.
    #[must_use]
    pub const fn mode(mut self, mode: PaneMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the behavior derived from the mode.
    #[must_use]
    pub const fn behavior(mut self, behavior: PaneBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Makes the pane controlled, starting at `state`.
    #[must_use]
    pub const fn state(mut self, state: PaneState) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets the handler told about every requested transition.
    #[must_use]
    pub fn on_state_change(mut self, handler: impl Fn(PaneState) + 'static) -> Self {
        self.on_state_change = Some(Rc::new(handler));
        self
    }

    /// Initial state of an uncontrolled pane.
    #[must_use]
    pub const fn default_state(mut self, state: PaneState) -> Self {
        self.default_state = state;
        self
    }

    /// Shows or hides the toggle handle.
    #[must_use]
    pub const fn handle(mut self, handle: bool) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Enables the backdrop of overlay panes.
    #[must_use]
    pub const fn backdrop(mut self, backdrop: bool) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Positions the pane against the window instead of its container.
    #[must_use]
    pub const fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    #[must_use]
    pub fn open_size(mut self, size: impl Into<SizeToken>) -> Self {
        self.open_size = Some(size.into());
        self
    }

    #[must_use]
    pub fn partial_size(mut self, size: impl Into<SizeToken>) -> Self {
        self.partial_size = Some(size.into());
        self
    }

    #[must_use]
    pub const fn size(mut self, size: SizeVariant) -> Self {
        self.size = size;
        self
    }

    /// Declares that partial content exists, which puts `partial` into the
    /// handle cycle and mounts the partial content slot.
    #[must_use]
    pub const fn partial_content(mut self, present: bool) -> Self {
        self.partial_content = present;
        self
    }

    /// Extra class appended after the generated ones.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub const fn position_value(&self) -> PanePosition { self.position }

    pub const fn mode_value(&self) -> PaneMode { self.mode }

    pub fn resolved_behavior(&self) -> PaneBehavior {
        self.behavior.unwrap_or_else(|| PaneBehavior::for_mode(self.mode))
    }

    pub fn show_handle(&self) -> bool {
        self.handle.unwrap_or(matches!(self.mode, PaneMode::Permanent))
    }

    /// Backdrop enabled at all: overlay panes with the backdrop switched on.
    pub fn show_backdrop(&self) -> bool {
        self.backdrop && self.resolved_behavior() == PaneBehavior::Overlay
    }

    pub fn resolved_open_size(&self) -> SizeToken {
        self.open_size
            .clone()
            .unwrap_or_else(|| self.position.default_open_size())
    }

    pub fn resolved_partial_size(&self) -> SizeToken {
        self.partial_size
            .clone()
            .unwrap_or_else(PanePosition::default_partial_size)
    }

    pub const fn has_partial_content(&self) -> bool { self.partial_content }
}

impl Default for PaneProps {
    fn default() -> Self { Self::new(PanePosition::default()) }
}

impl fmt::Debug for PaneProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneProps")
            .field("position", &self.position)
            .field("mode", &self.mode)
            .field("behavior", &self.behavior)
            .field("state", &self.state)
            .field("default_state", &self.default_state)
            .field("handle", &self.handle)
            .field("backdrop", &self.backdrop)
            .field("fixed", &self.fixed)
            .field("open_size", &self.open_size)
            .field("partial_size", &self.partial_size)
            .field("size", &self.size)
            .field("partial_content", &self.partial_content)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}
