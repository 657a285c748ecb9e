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

use std::fmt;

/// Ordered, space-joined list of class names describing a visual state.
///
/// Renderers treat the names as opaque style hooks; tests use them to observe
/// which state a component is rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new(base: impl Into<String>) -> Self { Self(vec![base.into()]) }

    pub fn push(&mut self, class: impl Into<String>) { self.0.push(class.into()); }

    /// Appends `class` only when `condition` holds.
    pub fn push_if(&mut self, condition: bool, class: impl Into<String>) {
        if condition {
            self.push(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool { self.0.iter().any(|c| c == class) }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0.join(" ")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_spaces() {
        let mut classes = ClassList::new("pane");
        classes.push("pane--left");
        classes.push_if(false, "pane--fixed");
        classes.push_if(true, "pane--overlay");

        assert_eq!(classes.to_string(), "pane pane--left pane--overlay");
        assert!(classes.contains("pane--overlay"));
        assert!(!classes.contains("pane--fixed"));
    }
}
