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

//! Controlled and uncontrolled value ownership.
//!
//! A component is either *controlled*, its owner supplies the value and the
//! component only reports requested changes, or *uncontrolled*, the component
//! keeps the value itself. The choice is made once at mount by
//! [`state_cell`] and never changes afterwards.

use std::fmt::Debug;

/// Storage strategy behind a component's current value.
pub trait StateCell<T> {
    /// The value the component should render.
    fn get(&self) -> T;

    /// Routes a transition requested by the component itself.
    ///
    /// Returns `true` when the rendered value changed. Controlled cells never
    /// change here; the owner decides whether to feed the value back.
    fn request(&mut self, next: T) -> bool;

    /// Accepts a new value from the owner. Only controlled cells take it.
    fn sync(&mut self, value: T) -> bool;

    fn is_controlled(&self) -> bool;
}

/// Value owned by the caller.
#[derive(Debug, Clone)]
pub struct ControlledStateCell<T> {
    value: T,
}

impl<T> ControlledStateCell<T> {
    pub const fn new(value: T) -> Self { Self { value } }
}

impl<T: Clone + PartialEq + Debug> StateCell<T> for ControlledStateCell<T> {
    fn get(&self) -> T { self.value.clone() }

    fn request(&mut self, next: T) -> bool {
        tracing::trace!(current = ?self.value, requested = ?next, "controlled value change requested");
        false
    }

    fn sync(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    fn is_controlled(&self) -> bool { true }
}

/// Value owned by the component, seeded from a default.
#[derive(Debug, Clone)]
pub struct UncontrolledStateCell<T> {
    value: T,
}

impl<T> UncontrolledStateCell<T> {
    pub const fn new(initial: T) -> Self { Self { value: initial } }
}

impl<T: Clone + PartialEq + Debug> StateCell<T> for UncontrolledStateCell<T> {
    fn get(&self) -> T { self.value.clone() }

    fn request(&mut self, next: T) -> bool {
        if self.value == next {
            return false;
        }
        self.value = next;
        true
    }

    fn sync(&mut self, value: T) -> bool {
        tracing::warn!(
            ignored = ?value,
            "uncontrolled component received a controlled value; controllability is fixed at mount"
        );
        false
    }

    fn is_controlled(&self) -> bool { false }
}

/// Picks the strategy: controlled when `controlled` is supplied, otherwise
/// uncontrolled starting at `default()`.
pub fn state_cell<T>(controlled: Option<T>, default: impl FnOnce() -> T) -> Box<dyn StateCell<T>>
where
    T: Clone + PartialEq + Debug + 'static,
{
    match controlled {
        Some(value) => Box::new(ControlledStateCell::new(value)),
        None => Box::new(UncontrolledStateCell::new(default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controlled_cell_only_moves_on_sync() {
        let mut cell = state_cell(Some(1), || 0);
        assert!(cell.is_controlled());

        assert!(!cell.request(2));
        assert_eq!(cell.get(), 1);

        assert!(cell.sync(2));
        assert_eq!(cell.get(), 2);
        assert!(!cell.sync(2));
    }

    #[test]
    fn uncontrolled_cell_moves_on_request_and_ignores_sync() {
        let mut cell = state_cell(None, || "a".to_string());
        assert!(!cell.is_controlled());

        assert!(cell.request("b".to_string()));
        assert_eq!(cell.get(), "b");
        assert!(!cell.request("b".to_string()));

        assert!(!cell.sync("c".to_string()));
        assert_eq!(cell.get(), "b");
    }
}
