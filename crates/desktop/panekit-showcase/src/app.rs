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

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size,
};
use gpui_component::Root;
use panekit_ui::ThemeProvider;

use crate::{actions, config::ShowcaseConfig, shell::Shell};

/// Opens the showcase window and runs the gpui event loop until quit.
pub fn run(config: ShowcaseConfig) {
    Application::new().run(move |cx: &mut App| {
        // Must run before any gpui-component widget is built.
        gpui_component::init(cx);
        ThemeProvider::init_with_preset(cx, config.theme);
        actions::bind_default_keys(cx);
        cx.on_window_closed(|cx| cx.quit()).detach();

        #[allow(clippy::cast_precision_loss)]
        let bounds = Bounds::centered(
            None,
            size(px(config.window.width as f32), px(config.window.height as f32)),
            cx,
        );
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("panekit showcase".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.spawn(async move |cx| {
            cx.open_window(options, |window, cx| {
                let shell = cx.new(|cx| Shell::new(&config, window, cx));
                cx.new(|cx| Root::new(shell, window, cx))
            })?;
            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });
}
