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

//! # panekit telemetry
//!
//! Process-wide observability shared by every panekit binary:
//! - [`logging`]: `tracing` subscriber setup with stdout, rolling files and a
//!   reloadable level filter
//! - [`panic_hook`]: panics reported as structured events with backtraces

mod err;
pub mod logging;
pub mod panic_hook;

pub use err::{Error, Result};
pub use logging::{
    LogFormat, LoggingOptions, RELOAD_HANDLE, TracingOptions, init_default_ut_logging,
    init_global_logging, reload_level,
};
pub use panic_hook::{panic_count, set_panic_hook};
