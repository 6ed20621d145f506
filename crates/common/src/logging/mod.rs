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

//! The logging framework for lrucache systems.
//!
//! Library code logs through the `log` facade. A process installs the [`logger::Logger`]
//! once, either explicitly with [`init_logging`] or lazily with
//! [`ensure_logging_initialized`], which reads the `LRUCACHE_LOG` environment variable.
//! Log records may carry a `component` key-value which is used for filtering and display
//! in place of the module path.

pub mod config;
pub mod logger;

#[cfg(feature = "tracing-bridge")]
pub mod bridge;

use std::{
    str::FromStr,
    sync::{
        OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use log::LevelFilter;

use self::logger::{Logger, LoggerConfig};

pub(crate) const KV_COLOR: &str = "color";
pub(crate) const KV_COMPONENT: &str = "component";

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);
static LAZY_INIT: OnceLock<bool> = OnceLock::new();

/// Returns whether the core logger is enabled.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Ensures logging is initialized on first use.
///
/// If `LRUCACHE_LOG` is set and valid, initializes the logger with that config.
/// Otherwise, initializes with INFO level to stdout.
///
/// Returns `true` if logging is available (either already initialized or
/// successfully lazy-initialized), `false` otherwise.
pub fn ensure_logging_initialized() -> bool {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return true;
    }

    LAZY_INIT.get_or_init(|| {
        let config = LoggerConfig::from_env().unwrap_or_default();
        Logger::init_with_config(config).is_ok()
    });

    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}

/// Initializes logging with the given configuration.
///
/// Should only be called once during an application run, ideally at the beginning.
///
/// # Errors
///
/// Returns an error if logging was already initialized or another `log` implementation
/// has been installed.
pub fn init_logging(config: LoggerConfig) -> anyhow::Result<()> {
    Logger::init_with_config(config)
}

/// Parses a string into a [`LevelFilter`].
///
/// Accepts `WARNING` as an alias for `WARN`.
///
/// # Errors
///
/// Returns an error if the provided string is not a valid `LevelFilter`.
pub fn parse_level_filter_str(s: &str) -> anyhow::Result<LevelFilter> {
    let mut log_level_str = s.to_uppercase();
    if log_level_str == "WARNING" {
        log_level_str = "WARN".to_string();
    }
    LevelFilter::from_str(&log_level_str)
        .map_err(|_| anyhow::anyhow!("Invalid log level string: '{s}'"))
}
