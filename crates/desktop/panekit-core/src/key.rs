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

//! Keyboard keys the components react to.

use strum_macros::EnumString;

/// A key as delivered by the host's key-down event.
///
/// Parses both DOM-style names (`"ArrowLeft"`) and the short lowercase names
/// desktop toolkits report (`"left"`). Anything else lands in [`Key::Other`].
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    #[strum(serialize = "Escape", serialize = "Esc")]
    Escape,
    #[strum(serialize = "ArrowLeft", serialize = "Left")]
    ArrowLeft,
    #[strum(serialize = "ArrowRight", serialize = "Right")]
    ArrowRight,
    #[strum(serialize = "ArrowUp", serialize = "Up")]
    ArrowUp,
    #[strum(serialize = "ArrowDown", serialize = "Down")]
    ArrowDown,
    Home,
    End,
    #[strum(default)]
    Other(String),
}

impl Key {
    /// Parses a key name, never failing.
    pub fn named(name: &str) -> Self { name.parse().unwrap_or_else(|_| Self::Other(name.into())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_and_toolkit_names() {
        assert_eq!(Key::named("Escape"), Key::Escape);
        assert_eq!(Key::named("escape"), Key::Escape);
        assert_eq!(Key::named("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::named("right"), Key::ArrowRight);
        assert_eq!(Key::named("down"), Key::ArrowDown);
        assert_eq!(Key::named("home"), Key::Home);
        assert_eq!(Key::named("End"), Key::End);
    }

    #[test]
    fn unknown_names_are_preserved() {
        assert_eq!(Key::named("a"), Key::Other("a".to_string()));
        assert_eq!(Key::named("tab"), Key::Other("tab".to_string()));
    }
}
