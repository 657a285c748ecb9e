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

//! # Logging
//!
//! One global `tracing` subscriber per process, assembled from optional
//! layers:
//!
//! - **stdout**: text or JSON, ANSI colors only on a terminal
//! - **file**: hourly rolling files under [`LoggingOptions::dir`]
//! - **error file**: a second rolling file that only receives `ERROR` events
//!
//! The level filter sits behind a reload layer so [`reload_level`] can change
//! it at runtime. `log` records from dependencies are bridged through
//! `tracing-log`.

use std::{
    env,
    io::IsTerminal,
    sync::{Arc, Mutex, Once},
};

use bon::Builder;
use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Deserializer, Serialize, de};
use smart_default::SmartDefault;
use snafu::{OptionExt, ResultExt};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, layer::SubscriberExt};

use crate::err::{
    GlobalSubscriberSnafu, InvalidFilterSnafu, LogBridgeSnafu, NotInitializedSnafu, ReloadSnafu,
    Result, RollingAppenderSnafu,
};

/// Deserializes a string value, using `Default::default()` if the string is
/// empty.
///
/// Lets configuration files and environment variables spell "use the default"
/// as an empty string.
pub fn empty_string_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        Ok(T::default())
    } else {
        T::deserialize(de::value::StrDeserializer::new(&s)).map_err(|e: de::value::Error| {
            de::Error::custom(format!("invalid value, expect empty string, err: {e}"))
        })
    }
}

/// Global handle for reloading the level filter at runtime.
///
/// Only populated after [`init_global_logging`] has run.
pub static RELOAD_HANDLE: OnceCell<tracing_subscriber::reload::Handle<filter::Targets, Registry>> =
    OnceCell::new();

/// Configuration options for the logging system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, SmartDefault, Builder)]
#[serde(default)]
pub struct LoggingOptions {
    /// Directory for rolling log files. Empty disables file logging.
    #[default = ""]
    #[builder(default)]
    pub dir: String,

    /// Level filter such as `"info"` or `"info,panekit_core=debug"`. Falls
    /// back to `RUST_LOG`, then `"info"`.
    pub level: Option<String>,

    /// Output format for every layer.
    #[serde(default, deserialize_with = "empty_string_as_default")]
    #[builder(default)]
    pub log_format: LogFormat,

    /// Rotated files kept per log kind. The default keeps 30 days of hourly
    /// files.
    #[default = 720]
    #[builder(default = 720)]
    pub max_log_files: usize,

    /// Whether to also log to stdout.
    #[default = true]
    #[builder(default = true)]
    pub append_stdout: bool,
}

/// Available log output formats.
#[derive(
    Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize, Default, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per event, for log processing pipelines.
    Json,

    /// Human-readable lines.
    ///
    /// ```text
    /// 2025-01-01T12:00:00.123Z  INFO panekit_showcase: window opened
    /// ```
    #[default]
    Text,
}

/// Span-related switches for the subscriber.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, SmartDefault)]
#[serde(default)]
pub struct TracingOptions {
    /// Include the current span and span list in JSON output.
    #[default = true]
    pub json_span_context: bool,
}

/// Initialize logging for unit tests.
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Honors `UNITTEST_LOG_DIR` and `UNITTEST_LOG_LEVEL`.
pub fn init_default_ut_logging() {
    static START: Once = Once::new();

    START.call_once(|| {
        let dir =
            env::var("UNITTEST_LOG_DIR").unwrap_or_else(|_| "/tmp/__unittest_logs".to_string());
        let level = env::var("UNITTEST_LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());
        let opts = LoggingOptions {
            dir: dir.clone(),
            level: Some(level),
            ..Default::default()
        };

        match init_global_logging("unittest", &opts, &TracingOptions::default()) {
            Ok(guards) => {
                if let Ok(mut slot) = GLOBAL_UT_LOG_GUARD.lock() {
                    *slot = Some(guards);
                }
                tracing::info!("logs dir = {}", dir);
            }
            Err(e) => eprintln!("unit test logging disabled: {e}"),
        }
    });
}

/// Keeps the unit-test worker guards alive for the whole test binary.
static GLOBAL_UT_LOG_GUARD: Lazy<Arc<Mutex<Option<Vec<WorkerGuard>>>>> =
    Lazy::new(|| Arc::new(Mutex::new(None)));

const DEFAULT_LOG_TARGETS: &str = "info";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

fn fmt_layer<S, W>(writer: W, format: LogFormat, ansi: bool, span_context: bool) -> BoxedLayer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => tracing_subscriber::fmt::Layer::new()
            .json()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_current_span(span_context)
            .with_span_list(span_context)
            .boxed(),
        LogFormat::Text => tracing_subscriber::fmt::Layer::new()
            .with_writer(writer)
            .with_ansi(ansi)
            .boxed(),
    }
}

fn rolling_appender(prefix: &str, opts: &LoggingOptions) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::HOURLY)
        .filename_prefix(prefix)
        .max_log_files(opts.max_log_files)
        .build(&opts.dir)
        .context(RollingAppenderSnafu { dir: opts.dir.clone() })
}

/// Parses the effective level filter: explicit option, then `RUST_LOG`, then
/// `info`.
pub fn resolve_filter(level: Option<&str>) -> Result<filter::Targets> {
    let from_env = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = level
        .or(from_env.as_deref())
        .unwrap_or(DEFAULT_LOG_TARGETS);
    filter
        .parse::<filter::Targets>()
        .context(InvalidFilterSnafu { filter })
}

/// Initialize the global subscriber.
///
/// Returns the worker guards of the non-blocking writers; keep them alive
/// for as long as logs should be flushed. Only the first call in a process
/// installs anything, later calls return no guards.
///
/// File names are prefixed with `app_name`, error files with
/// `{app_name}-err`.
pub fn init_global_logging(
    app_name: &str,
    opts: &LoggingOptions,
    tracing_opts: &TracingOptions,
) -> Result<Vec<WorkerGuard>> {
    static START: Once = Once::new();
    let mut outcome = Ok(Vec::new());

    START.call_once(|| {
        outcome = install(app_name, opts, tracing_opts);
    });

    outcome
}

fn install(app_name: &str, opts: &LoggingOptions, tracing_opts: &TracingOptions) -> Result<Vec<WorkerGuard>> {
    let mut guards = vec![];
    let span_context = tracing_opts.json_span_context;

    LogTracer::init().context(LogBridgeSnafu)?;

    let stdout_logging_layer = if opts.append_stdout {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);
        Some(fmt_layer(
            writer,
            opts.log_format,
            std::io::stdout().is_terminal(),
            span_context,
        ))
    } else {
        None
    };

    let (file_logging_layer, err_file_logging_layer) = if opts.dir.is_empty() {
        (None, None)
    } else {
        let (writer, guard) = tracing_appender::non_blocking(rolling_appender(app_name, opts)?);
        guards.push(guard);
        let file = fmt_layer(writer, opts.log_format, false, span_context);

        let (writer, guard) =
            tracing_appender::non_blocking(rolling_appender(&format!("{app_name}-err"), opts)?);
        guards.push(guard);
        let err_file = fmt_layer(writer, opts.log_format, false, span_context)
            .with_filter(filter::LevelFilter::ERROR)
            .boxed();

        (Some(file), Some(err_file))
    };

    let (dyn_filter, reload_handle) =
        tracing_subscriber::reload::Layer::new(resolve_filter(opts.level.as_deref())?);
    if RELOAD_HANDLE.set(reload_handle).is_err() {
        tracing::warn!("reload handle already set, keeping the first one");
    }

    let subscriber = Registry::default()
        .with(dyn_filter)
        .with(stdout_logging_layer)
        .with(file_logging_layer)
        .with(err_file_logging_layer);

    tracing::subscriber::set_global_default(subscriber).context(GlobalSubscriberSnafu)?;
    Ok(guards)
}

/// Replaces the level filter of the installed subscriber.
pub fn reload_level(level: &str) -> Result<()> {
    let handle = RELOAD_HANDLE.get().context(NotInitializedSnafu)?;
    let targets = level
        .parse::<filter::Targets>()
        .context(InvalidFilterSnafu { filter: level })?;
    handle.reload(targets).context(ReloadSnafu)?;
    tracing::info!(level, "log level reloaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_format_string_means_default() {
        let opts: LoggingOptions =
            serde_json::from_str(r#"{ "dir": "", "log_format": "" }"#).unwrap();
        assert_eq!(opts.log_format, LogFormat::Text);
        assert_eq!(opts.max_log_files, 720);
        assert!(opts.append_stdout);

        let opts: LoggingOptions = serde_json::from_str(r#"{ "log_format": "json" }"#).unwrap();
        assert_eq!(opts.log_format, LogFormat::Json);
    }

    #[test]
    fn builder_matches_defaults() {
        let built = LoggingOptions::builder().build();
        assert_eq!(built, LoggingOptions::default());
    }

    #[test]
    fn explicit_level_wins() {
        let targets = resolve_filter(Some("warn,panekit_core=trace")).unwrap();
        assert!(targets.would_enable("panekit_core::tabs", &tracing::Level::TRACE));
        assert!(!targets.would_enable("gpui", &tracing::Level::INFO));
    }

    #[test]
    fn rolling_appender_writes_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let opts = LoggingOptions {
            dir: dir.path().display().to_string(),
            ..Default::default()
        };
        assert!(rolling_appender("panekit", &opts).is_ok());
    }

    #[test]
    fn reload_requires_initialization_or_succeeds() {
        match RELOAD_HANDLE.get() {
            None => assert!(reload_level("debug").is_err()),
            Some(_) => assert!(reload_level("debug").is_ok()),
        }
    }
}
