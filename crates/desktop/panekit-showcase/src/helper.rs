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

use std::{
    collections::HashMap,
    io::{self, IsTerminal},
    path::Path,
    sync::OnceLock,
};

use gpui::{AppContext, Application, PromptLevel, WindowOptions};
use jiff::Timestamp;

static STARTUP_TIME: OnceLock<Timestamp> = OnceLock::new();

const FORCE_CLI_MODE_ENV_VAR_NAME: &str = "PANEKIT_FORCE_CLI_MODE";

#[inline]
pub(crate) fn startup_time() -> Timestamp { *STARTUP_TIME.get_or_init(Timestamp::now) }

/// Creates the directories the showcase writes to, grouping failures by kind.
pub(crate) fn init_paths() -> HashMap<io::ErrorKind, Vec<&'static Path>> {
    [
        panekit_paths::config_dir(),
        panekit_paths::data_dir(),
        panekit_paths::logs_dir(),
    ]
    .into_iter()
    .fold(HashMap::default(), |mut errors, path| {
        if let Err(e) = std::fs::create_dir_all(path) {
            errors.entry(e.kind()).or_insert_with(Vec::new).push(path.as_path());
        }
        errors
    })
}

fn describe_path_errors(errors: HashMap<io::ErrorKind, Vec<&Path>>) -> String {
    errors
        .into_iter()
        .map(|(kind, paths)| {
            #[allow(unused_mut)]
            let mut details = match paths.as_slice() {
                [path] => format!("{kind} when creating directory {}", path.display()),
                _ => format!("{kind} when creating directories {paths:?}"),
            };

            #[cfg(unix)]
            {
                if kind == io::ErrorKind::PermissionDenied {
                    details.push_str(
                        "\n\nConsider using chown and chmod to give your user access to these \
                         directories.",
                    );
                }
            }

            details
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Reports directories that could not be created in a native prompt, then
/// quits.
pub(crate) fn files_not_created_on_launch(errors: HashMap<io::ErrorKind, Vec<&Path>>) {
    let message = "panekit showcase failed to launch";
    let details = describe_path_errors(errors);
    eprintln!("{message}: {details}");

    Application::new().run(move |cx| {
        let opened = cx.open_window(WindowOptions::default(), |_, cx| cx.new(|_| gpui::Empty));
        let Ok(window) = opened else {
            cx.quit();
            return;
        };
        let shown = window.update(cx, |_, window, cx| {
            let response = window.prompt(PromptLevel::Critical, message, Some(&details), &["Exit"], cx);
            cx.spawn(async move |_, cx| {
                response.await.ok();
                cx.update(|cx| cx.quit()).ok();
            })
            .detach();
        });
        if shown.is_err() {
            cx.quit();
        }
    });
}

pub(crate) fn stdout_is_a_pty() -> bool {
    std::env::var(FORCE_CLI_MODE_ENV_VAR_NAME).ok().is_none() && io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path_is_named() {
        let errors = HashMap::from([(io::ErrorKind::NotFound, vec![Path::new("/tmp/panekit")])]);
        let details = describe_path_errors(errors);
        assert!(details.contains("/tmp/panekit"), "{details}");
        assert!(details.contains("creating directory "), "{details}");
    }

    #[test]
    fn startup_time_is_stable() { assert_eq!(startup_time(), startup_time()); }
}
