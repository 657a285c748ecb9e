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

//! Platform directories for panekit.
//!
//! Every path is resolved once and cached for the process lifetime.

use std::{path::PathBuf, sync::OnceLock};

const APP_DIR: &str = "panekit";
const APP_DIR_TITLE: &str = "Panekit";

/// Name of the showcase configuration file inside [`config_dir`].
pub const SHOWCASE_CONFIG_FILE: &str = "showcase.toml";

/// Returns the user's home directory, or the system temp directory when no
/// home can be determined.
pub fn home_dir() -> &'static PathBuf {
    static HOME_DIR: OnceLock<PathBuf> = OnceLock::new();
    HOME_DIR.get_or_init(|| dirs::home_dir().unwrap_or_else(std::env::temp_dir))
}

/// Returns the configuration directory.
///
/// On Linux/FreeBSD, this is `$XDG_CONFIG_HOME/panekit` (Flatpak aware).
/// On Windows, `%APPDATA%\Panekit`. Elsewhere, `~/.config/panekit`.
pub fn config_dir() -> &'static PathBuf {
    static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();
    CONFIG_DIR.get_or_init(|| {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| home_dir().join("AppData").join("Roaming"))
                .join(APP_DIR_TITLE)
        } else if cfg!(any(target_os = "linux", target_os = "freebsd")) {
            if let Ok(flatpak_xdg_config) = std::env::var("FLATPAK_XDG_CONFIG_HOME") {
                PathBuf::from(flatpak_xdg_config)
            } else {
                dirs::config_dir().unwrap_or_else(|| home_dir().join(".config"))
            }
            .join(APP_DIR)
        } else {
            home_dir().join(".config").join(APP_DIR)
        }
    })
}

/// Returns the data directory.
///
/// On Linux/FreeBSD, this is `$XDG_DATA_HOME/panekit` (Flatpak aware).
/// Elsewhere, the platform's local data directory plus `Panekit`.
pub fn data_dir() -> &'static PathBuf {
    static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
    DATA_DIR.get_or_init(|| {
        if cfg!(any(target_os = "linux", target_os = "freebsd")) {
            if let Ok(flatpak_xdg_data) = std::env::var("FLATPAK_XDG_DATA_HOME") {
                PathBuf::from(flatpak_xdg_data)
            } else {
                dirs::data_local_dir().unwrap_or_else(|| home_dir().join(".local").join("share"))
            }
            .join(APP_DIR)
        } else {
            dirs::data_local_dir()
                .unwrap_or_else(|| home_dir().join(".local").join("share"))
                .join(APP_DIR_TITLE)
        }
    })
}

/// Returns the logs directory.
pub fn logs_dir() -> &'static PathBuf {
    static LOGS_DIR: OnceLock<PathBuf> = OnceLock::new();
    LOGS_DIR.get_or_init(|| {
        if cfg!(target_os = "macos") {
            home_dir().join("Library/Logs").join(APP_DIR_TITLE)
        } else {
            data_dir().join("logs")
        }
    })
}

/// Returns the path of the showcase configuration file.
pub fn showcase_config_file() -> &'static PathBuf {
    static CONFIG_FILE: OnceLock<PathBuf> = OnceLock::new();
    CONFIG_FILE.get_or_init(|| config_dir().join(SHOWCASE_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_in_config_dir() {
        assert_eq!(showcase_config_file().parent(), Some(config_dir().as_path()));
        assert!(showcase_config_file().ends_with(SHOWCASE_CONFIG_FILE));
    }

    #[test]
    fn app_directories_are_namespaced() {
        let name = config_dir().file_name().and_then(|name| name.to_str());
        assert!(matches!(name, Some(APP_DIR | APP_DIR_TITLE)));
        assert!(logs_dir().components().count() > 1);
    }
}
