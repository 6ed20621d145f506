// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A synchronous `log` implementation writing formatted lines to stdout and stderr.

use std::{fmt::Display, io::Write, sync::atomic::Ordering};

use ahash::AHashMap;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, STATIC_MAX_LEVEL, set_boxed_logger, set_max_level};
use lrucache_core::correctness::check_predicate_true;
use ustr::Ustr;

pub use super::config::LoggerConfig;
use super::{KV_COLOR, KV_COMPONENT, LOGGING_INITIALIZED};
use crate::enums::LogColor;

/// A logger writing each record as a single formatted line.
///
/// Records at [`Level::Error`] go to stderr, everything else to stdout. Per-component and
/// per-module overrides from the [`LoggerConfig`] can only restrict what `stdout_level`
/// already allows.
#[derive(Debug)]
pub struct Logger {
    /// Configuration for logging levels and behavior.
    pub config: LoggerConfig,
    module_filters: Vec<(Ustr, LevelFilter)>,
}

/// Represents a log event which includes a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    /// The timestamp for the event.
    pub timestamp: DateTime<Utc>,
    /// The log level for the event.
    pub level: Level,
    /// The color for the log message content.
    pub color: LogColor,
    /// The component the log event originated from.
    pub component: Ustr,
    /// The log message content.
    pub message: String,
}

impl Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.component, self.message)
    }
}

impl LogLine {
    /// Returns the plain log line including the ISO 8601 timestamp.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        format!(
            "{} [{}] {}: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.level,
            self.component,
            self.message,
        )
    }

    /// Returns the log line with ANSI color codes applied.
    #[must_use]
    pub fn to_colored_string(&self) -> String {
        format!(
            "\x1b[1m{}\x1b[0m {}[{}] {}: {}\x1b[0m",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.color.as_ansi(),
            self.level,
            self.component,
            self.message,
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.config.stdout_level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();
        let key_values = record.key_values();
        let color: LogColor = key_values
            .get(KV_COLOR.into())
            .and_then(|v| v.to_u64().map(|v| (v as u8).into()))
            .unwrap_or(level.into());
        let component = key_values.get(KV_COMPONENT.into()).map_or_else(
            || Ustr::from(record.metadata().target()),
            |v| Ustr::from(&v.to_string()),
        );

        let module_path = record.module_path().unwrap_or_else(|| record.target());

        if should_filter_log(
            &component,
            module_path,
            level,
            &self.module_filters,
            &self.config.component_level,
            self.config.log_components_only,
        ) {
            return;
        }

        let line = LogLine {
            timestamp: Utc::now(),
            level,
            color,
            component,
            message: format!("{}", record.args()),
        };
        self.write_line(&line);
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}

impl Logger {
    /// Creates a new [`Logger`] for the given configuration without installing it.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let module_filters = config.module_filters_sorted();
        Self {
            config,
            module_filters,
        }
    }

    /// Initializes the logger based on the `LRUCACHE_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the environment variable or parsing the configuration fails.
    pub fn init_with_env() -> anyhow::Result<()> {
        let config = LoggerConfig::from_env()?;
        Self::init_with_config(config)
    }

    /// Installs a logger with the given configuration as the process-wide `log` implementation.
    ///
    /// # Errors
    ///
    /// Returns an error if another `log` implementation has already been installed.
    pub fn init_with_config(config: LoggerConfig) -> anyhow::Result<()> {
        check_config(&config)?;

        if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
            anyhow::bail!("Logging already initialized");
        }

        let print_config = config.print_config;
        if print_config {
            println!("STATIC_MAX_LEVEL={STATIC_MAX_LEVEL}");
            println!("Logger initialized with {config:?}");
        }

        let max_level = config.stdout_level;
        let use_tracing = config.use_tracing;
        let is_colored = config.is_colored;

        set_boxed_logger(Box::new(Self::new(config)))?;
        set_max_level(max_level);

        if print_config {
            println!("Logger set as `log` implementation with max level {max_level}");
        }

        LOGGING_INITIALIZED.store(true, Ordering::SeqCst);

        // The logger is installed at this point, so a bridge failure is only reported
        if use_tracing && let Err(e) = init_tracing_bridge(is_colored) {
            log::warn!("Tracing bridge not installed: {e}");
        }

        Ok(())
    }

    fn write_line(&self, line: &LogLine) {
        let text = if self.config.is_colored {
            line.to_colored_string()
        } else {
            line.to_plain_string()
        };

        // Write errors are dropped, there is nowhere left to report them
        if line.level == Level::Error {
            let _ = writeln!(std::io::stderr().lock(), "{text}");
        } else {
            let _ = writeln!(std::io::stdout().lock(), "{text}");
        }
    }
}

/// Rejects a configuration this build cannot honour, before anything is installed.
fn check_config(config: &LoggerConfig) -> anyhow::Result<()> {
    check_predicate_true(
        !config.use_tracing || cfg!(feature = "tracing-bridge"),
        "`use_tracing` requires the `tracing-bridge` feature",
    )
}

#[cfg(feature = "tracing-bridge")]
fn init_tracing_bridge(is_colored: bool) -> anyhow::Result<()> {
    super::bridge::init_tracing(is_colored)
}

// Unreachable, `check_config` rejects `use_tracing` without the feature
#[cfg(not(feature = "tracing-bridge"))]
fn init_tracing_bridge(_is_colored: bool) -> anyhow::Result<()> {
    Ok(())
}

/// Determines whether a log line should be filtered out.
///
/// Module filters match `module_path` by prefix and take precedence over component filters,
/// which match `component` exactly. `module_filters_sorted` must be ordered by descending
/// path length (see [`LoggerConfig::module_filters_sorted`]) so the first `starts_with`
/// match is the longest prefix.
#[must_use]
pub fn should_filter_log(
    component: &Ustr,
    module_path: &str,
    line_level: Level,
    module_filters_sorted: &[(Ustr, LevelFilter)],
    component_level: &AHashMap<Ustr, LevelFilter>,
    log_components_only: bool,
) -> bool {
    let module_filter = module_filters_sorted
        .iter()
        .find(|(path, _)| module_path.starts_with(path.as_str()))
        .map(|(_, level)| *level);

    let component_filter = component_level.get(component).copied();

    match module_filter.or(component_filter) {
        Some(filter_level) => line_level > filter_level,
        None => log_components_only,
    }
}
