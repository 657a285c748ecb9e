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

//! Layered showcase configuration.
//!
//! Sources, later ones winning:
//! 1. the defaults embedded from `config/default.toml`
//! 2. `<config_dir>/showcase.toml`, when present
//! 3. the file passed with `--config`, which must exist
//! 4. `PANEKIT__<SECTION>__<KEY>` environment variables

use std::path::PathBuf;

use bon::Builder;
use config::{Config, Environment, File, FileFormat};
use panekit_common_telemetry::LoggingOptions;
use panekit_core::ScrollOptions;
use panekit_ui::ThemePreset;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};
use validator::Validate;

use crate::{
    err::{ConfigFileMissingSnafu, InvalidConfigSnafu, LoadConfigSnafu, Result},
    page::Page,
};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

pub const ENV_PREFIX: &str = "PANEKIT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WindowConfig {
    #[validate(range(min = 480, max = 7680))]
    pub width:  u32,
    #[validate(range(min = 320, max = 4320))]
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ShowcaseConfig {
    pub theme:      ThemePreset,
    pub start_page: Page,
    #[validate(nested)]
    pub window:     WindowConfig,
    pub logging:    LoggingOptions,
    #[validate(nested)]
    pub scroll:     ScrollOptions,
}

impl ShowcaseConfig {
    /// Applies command-line overrides on top of the loaded layers.
    #[must_use]
    pub fn with_overrides(mut self, theme: Option<ThemePreset>, page: Option<Page>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(page) = page {
            self.start_page = page;
        }
        self
    }

    /// Logging options with an empty directory resolved to the platform logs
    /// directory.
    pub fn logging_options(&self, stdout_is_a_pty: bool) -> LoggingOptions {
        let mut logging = self.logging.clone();
        if logging.dir.is_empty() {
            logging.dir = panekit_paths::logs_dir().to_string_lossy().into_owned();
        }
        logging.append_stdout = logging.append_stdout && stdout_is_a_pty;
        logging
    }
}

/// Which layers to read. The binary uses [`ConfigLoader::standard`]; tests
/// point the layers at temporary files and a fixed environment.
#[derive(Debug, Default, Builder)]
pub struct ConfigLoader {
    user_file: Option<PathBuf>,
    explicit:  Option<PathBuf>,
    /// Replaces the process environment when set.
    env:       Option<config::Map<String, String>>,
}

impl ConfigLoader {
    pub fn standard(explicit: Option<PathBuf>) -> Self {
        Self::builder()
            .user_file(panekit_paths::showcase_config_file().clone())
            .maybe_explicit(explicit)
            .build()
    }

    pub fn load(&self) -> Result<ShowcaseConfig> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(user_file) = &self.user_file {
            builder = builder.add_source(File::from(user_file.as_path()).required(false));
        }

        if let Some(path) = &self.explicit {
            ensure!(path.is_file(), ConfigFileMissingSnafu { path: path.clone() });
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(self.env.clone()),
        );

        let config: ShowcaseConfig = builder
            .build()
            .context(LoadConfigSnafu)?
            .try_deserialize()
            .context(LoadConfigSnafu)?;
        config.validate().context(InvalidConfigSnafu)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use panekit_common_telemetry::LogFormat;

    use super::*;
    use crate::err::Error;

    /// A process environment with no `PANEKIT` variables.
    fn no_env() -> config::Map<String, String> { config::Map::new() }

    #[test]
    fn embedded_defaults_are_valid() {
        let config = ConfigLoader::builder().env(no_env()).build().load().unwrap();
        assert_eq!(config.theme, ThemePreset::Dark);
        assert_eq!(config.start_page, Page::Pane);
        assert_eq!(config.window, WindowConfig { width: 1200, height: 800 });
        assert_eq!(config.logging.log_format, LogFormat::Text);
        assert_eq!(config.scroll, ScrollOptions::default());
    }

    #[test]
    fn explicit_file_wins_over_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let user_file = dir.path().join("showcase.toml");
        fs::write(&user_file, "theme = \"light\"\nstart_page = \"tabs\"\n").unwrap();
        let explicit = dir.path().join("override.toml");
        fs::write(&explicit, "theme = \"oled_black\"\n[window]\nwidth = 1600\n").unwrap();

        let config = ConfigLoader::builder().env(no_env())
            .user_file(user_file)
            .explicit(explicit)
            .build()
            .load()
            .unwrap();

        assert_eq!(config.theme, ThemePreset::OledBlack);
        assert_eq!(config.start_page, Page::Tabs);
        assert_eq!(config.window.width, 1600);
        assert_eq!(config.window.height, 800);
    }

    #[test]
    fn absent_user_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::builder().env(no_env())
            .user_file(dir.path().join("showcase.toml"))
            .build()
            .load()
            .unwrap();
        assert_eq!(config.theme, ThemePreset::Dark);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::builder().env(no_env())
            .explicit(dir.path().join("nope.toml"))
            .build()
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::ConfigFileMissing { .. }), "{err:?}");
    }

    #[test]
    fn environment_overrides_files() {
        let env = config::Map::from([
            ("PANEKIT__WINDOW__HEIGHT".to_string(), "900".to_string()),
            ("PANEKIT__SCROLL__HOLD_DELAY_MS".to_string(), "350".to_string()),
        ]);
        let config = ConfigLoader::builder().env(env).build().load().unwrap();
        assert_eq!(config.window.height, 900);
        assert_eq!(config.scroll.hold_delay_ms, 350);
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        fs::write(&explicit, "[window]\nwidth = 100\n[scroll]\nstep_px = 0.1\n").unwrap();

        let err = ConfigLoader::builder().env(no_env()).explicit(explicit).build().load().unwrap_err();
        let Error::InvalidConfig { source, .. } = err else {
            panic!("expected a validation error, got {err:?}");
        };
        let fields = source.errors();
        assert!(fields.contains_key("window"));
        assert!(fields.contains_key("scroll"));
    }

    #[test]
    fn unknown_theme_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("theme.toml");
        fs::write(&explicit, "theme = \"sepia\"\n").unwrap();

        let err = ConfigLoader::builder().env(no_env()).explicit(explicit).build().load().unwrap_err();
        assert!(matches!(err, Error::LoadConfig { .. }), "{err:?}");
    }

    #[test]
    fn command_line_overrides_apply_last() {
        let config = ConfigLoader::builder().env(no_env())
            .build()
            .load()
            .unwrap()
            .with_overrides(Some(ThemePreset::Light), None);
        assert_eq!(config.theme, ThemePreset::Light);
        assert_eq!(config.start_page, Page::Pane);

        let config = config.with_overrides(None, Some(Page::About));
        assert_eq!(config.theme, ThemePreset::Light);
        assert_eq!(config.start_page, Page::About);
    }

    #[test]
    fn empty_log_dir_resolves_to_platform_logs() {
        let config = ConfigLoader::builder().env(no_env()).build().load().unwrap();
        let logging = config.logging_options(false);
        assert_eq!(logging.dir, panekit_paths::logs_dir().to_string_lossy());
        assert!(!logging.append_stdout);
    }
}
