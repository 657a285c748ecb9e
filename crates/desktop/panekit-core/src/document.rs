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

//! Host-level event targets.
//!
//! A [`Document`] stands in for the window a component tree lives in. Hosts
//! dispatch key-down, pointer-up and resize events into it; components
//! subscribe only while a listener is relevant and keep the returned
//! [`Subscription`], whose drop removes the listener again.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::key::Key;

type Listener<E> = Rc<dyn Fn(&E)>;

struct Registry<E> {
    next_id:   u64,
    listeners: Vec<(u64, Listener<E>)>,
}

/// A list of listeners for one event kind.
pub struct EventTarget<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> EventTarget<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id:   0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers `listener` until the returned subscription is dropped.
    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Rc::new(listener)));
            id
        };
        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Invokes every listener registered at the time of the call and returns
    /// how many ran.
    ///
    /// Listeners may subscribe or unsubscribe while being invoked.
    pub fn dispatch(&self, event: &E) -> usize {
        let snapshot: Vec<Listener<E>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize { self.registry.borrow().listeners.len() }
}

impl<E: 'static> Default for EventTarget<E> {
    fn default() -> Self { Self::new() }
}

impl<E> Clone for EventTarget<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E> fmt::Debug for EventTarget<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventTarget")
            .field("listeners", &self.registry.borrow().listeners.len())
            .finish()
    }
}

/// Keeps a listener registered for as long as it is alive.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Removes the listener now. Equivalent to dropping the subscription.
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Pointer button released anywhere in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerUp;

/// Window content size after a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width:  f32,
    pub height: f32,
}

/// The global event surface shared by every component in one window.
#[derive(Clone, Debug, Default)]
pub struct Document {
    key_down:   EventTarget<Key>,
    pointer_up: EventTarget<PointerUp>,
    resize:     EventTarget<Viewport>,
}

impl Document {
    pub fn new() -> Self { Self::default() }

    pub fn key_down_target(&self) -> &EventTarget<Key> { &self.key_down }

    pub fn pointer_up_target(&self) -> &EventTarget<PointerUp> { &self.pointer_up }

    pub fn resize_target(&self) -> &EventTarget<Viewport> { &self.resize }

    /// Dispatches a key-down event; returns the number of listeners invoked.
    pub fn key_down(&self, key: &Key) -> usize { self.key_down.dispatch(key) }

    pub fn pointer_up(&self) -> usize { self.pointer_up.dispatch(&PointerUp) }

    pub fn resize(&self, width: f32, height: f32) -> usize {
        self.resize.dispatch(&Viewport { width, height })
    }

    /// Total number of listeners across all event kinds.
    pub fn listener_count(&self) -> usize {
        self.key_down.listener_count()
            + self.pointer_up.listener_count()
            + self.resize.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn dropping_subscription_removes_listener() {
        let document = Document::new();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let subscription = document
            .key_down_target()
            .subscribe(move |_| counter.set(counter.get() + 1));

        assert_eq!(document.key_down(&Key::Escape), 1);
        assert_eq!(hits.get(), 1);

        drop(subscription);
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.key_down(&Key::Escape), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listener_may_unsubscribe_itself_while_dispatching() {
        let document = Document::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let inner = Rc::clone(&slot);
        let subscription = document.pointer_up_target().subscribe(move |_| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        assert_eq!(document.pointer_up(), 1);
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.pointer_up(), 0);
    }

    #[test]
    fn subscription_outliving_document_is_harmless() {
        let document = Document::new();
        let subscription = document.resize_target().subscribe(|_| {});
        drop(document);
        subscription.unsubscribe();
    }
}
