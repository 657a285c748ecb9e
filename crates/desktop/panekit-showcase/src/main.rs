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

mod actions;
mod app;
mod build_info;
mod config;
mod err;
mod helper;
mod host;
mod page;
mod pages;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use panekit_common_telemetry::{TracingOptions, init_global_logging, set_panic_hook};
use panekit_ui::ThemePreset;
use snafu::{ResultExt, Whatever};

use crate::{
    config::{ConfigLoader, ShowcaseConfig},
    err::{LoggingSnafu, RenderConfigSnafu},
    page::Page,
};

#[derive(Debug, Parser)]
#[clap(
    name = "panekit-showcase",
    about = "Interactive demo of the panekit pane and tab components",
    author,
    version = build_info::VERSION
)]
struct Cli {
    /// Extra configuration file, applied over the user config.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Page to open on start.
    #[arg(long, global = true)]
    page: Option<Page>,

    /// Theme preset: dark, oled_black or light.
    #[arg(long, global = true)]
    theme: Option<ThemePreset>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the effective configuration as JSON and exit.
    PrintConfig,
}

impl Cli {
    fn config(&self) -> err::Result<ShowcaseConfig> {
        let config = ConfigLoader::standard(self.config.clone()).load()?;
        Ok(config.with_overrides(self.theme, self.page))
    }
}

fn print_config(config: &ShowcaseConfig) -> err::Result<()> {
    let json = serde_json::to_string_pretty(config).context(RenderConfigSnafu)?;
    println!("{json}");
    Ok(())
}

fn start(config: ShowcaseConfig) -> err::Result<()> {
    helper::startup_time();
    let file_errors = helper::init_paths();
    if !file_errors.is_empty() {
        helper::files_not_created_on_launch(file_errors);
        return Ok(());
    }

    let _guards = init_global_logging(
        "panekit-showcase",
        &config.logging_options(helper::stdout_is_a_pty()),
        &TracingOptions::default(),
    )
    .context(LoggingSnafu)?;
    set_panic_hook();
    tracing::info!(
        "========== starting panekit-showcase {} ==========",
        build_info::VERSION,
    );
    tracing::debug!(?config, startup = %helper::startup_time(), "effective configuration");

    app::run(config);
    Ok(())
}

fn main() -> Result<(), Whatever> {
    let cli = Cli::parse();
    let config = cli
        .config()
        .whatever_context("failed to load showcase configuration")?;

    match cli.command {
        Some(Commands::PrintConfig) => {
            print_config(&config).whatever_context("failed to print configuration")
        }
        None => start(config).whatever_context("failed to start the showcase"),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() { Cli::command().debug_assert(); }

    #[test]
    fn global_flags_parse_with_subcommand() {
        let cli = Cli::try_parse_from([
            "panekit-showcase",
            "print-config",
            "--theme",
            "oled_black",
            "--page",
            "tabs",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::PrintConfig)));
        assert_eq!(cli.theme, Some(ThemePreset::OledBlack));
        assert_eq!(cli.page, Some(Page::Tabs));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["panekit-showcase", "--theme", "sepia"]).is_err());
    }
}
