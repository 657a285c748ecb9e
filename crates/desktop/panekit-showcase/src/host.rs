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

//! Bridges window-level gpui input into the component [`Document`].
//!
//! Every pane and tab strip in the showcase is mounted on the same document.
//! After an event is dispatched, the views it may have touched are synced so
//! their queued events reach subscribers and they redraw.

use std::{cell::RefCell, rc::Rc};

use gpui::{App, AppContext, Context, Entity, WeakEntity};
use panekit_core::{Document, Key, PaneProps, TabsProps};
use panekit_ui::{PanePanel, TabStrip};

#[derive(Default)]
pub struct Host {
    document: Document,
    panes:    RefCell<Vec<WeakEntity<PanePanel>>>,
    strips:   RefCell<Vec<WeakEntity<TabStrip>>>,
}

impl Host {
    pub fn new() -> Rc<Self> { Rc::new(Self::default()) }

    pub const fn document(&self) -> &Document { &self.document }

    /// Creates a pane view on the shared document.
    pub fn pane<T: 'static>(
        &self,
        id: &str,
        props: PaneProps,
        full: gpui::AnyView,
        partial: Option<gpui::AnyView>,
        cx: &mut Context<T>,
    ) -> Entity<PanePanel> {
        let id = id.to_string();
        let panel = cx.new(|_| PanePanel::new(id, props, &self.document, full, partial));
        self.panes.borrow_mut().push(panel.downgrade());
        panel
    }

    /// Creates a tab strip view on the shared document.
    pub fn strip<T: 'static>(&self, id: &str, props: TabsProps, cx: &mut Context<T>) -> Entity<TabStrip> {
        let id = id.to_string();
        let strip = cx.new(|cx| TabStrip::new(id, props, &self.document, cx));
        self.strips.borrow_mut().push(strip.downgrade());
        strip
    }

    pub fn key_down(&self, key: &Key, cx: &mut App) -> bool {
        let delivered = self.document.key_down(key) > 0;
        if delivered {
            self.sync(cx);
        }
        delivered
    }

    pub fn pointer_up(&self, cx: &mut App) {
        if self.document.pointer_up() > 0 {
            self.sync(cx);
        }
    }

    pub fn resize(&self, width: f32, height: f32, cx: &mut App) {
        if self.document.resize(width, height) > 0 {
            self.sync(cx);
        }
    }

    /// Syncs every live view and forgets released ones.
    fn sync(&self, cx: &mut App) {
        let panes: Vec<_> = self.panes.borrow().clone();
        let strips: Vec<_> = self.strips.borrow().clone();

        let live_panes: Vec<_> = panes
            .into_iter()
            .filter(|pane| pane.update(cx, |pane, cx| pane.sync(cx)).is_ok())
            .collect();
        let live_strips: Vec<_> = strips
            .into_iter()
            .filter(|strip| strip.update(cx, |strip, cx| strip.sync(cx)).is_ok())
            .collect();

        *self.panes.borrow_mut() = live_panes;
        *self.strips.borrow_mut() = live_strips;
    }

    pub fn listener_count(&self) -> usize { self.document.listener_count() }
}
