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

//! Application actions and their default key bindings.

use gpui::{App, KeyBinding, actions};

actions!(
    showcase,
    [Quit, ToggleNavigation, ShowPanePage, ShowTabsPage, ShowAboutPage]
);

pub fn bind_default_keys(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("secondary-q", Quit, None),
        KeyBinding::new("secondary-b", ToggleNavigation, None),
        KeyBinding::new("secondary-1", ShowPanePage, None),
        KeyBinding::new("secondary-2", ShowTabsPage, None),
        KeyBinding::new("secondary-3", ShowAboutPage, None),
    ]);
    cx.on_action(|_: &Quit, cx| cx.quit());
}
