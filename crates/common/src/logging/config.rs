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

//! Logging configuration types and parsing.
//!
//! The `LRUCACHE_LOG` environment variable uses a semicolon-separated format:
//!
//! ```text
//! stdout=Info;sessions=Debug;lrucache_common::cache=Trace;is_colored
//! ```
//!
//! Bare flags toggle output options: `is_colored` (on by default), `print_config`,
//! `log_components_only` and `use_tracing`. Each may also be given an explicit value, where
//! `false`, `0` and `no` disable it. Every other key takes a log level: `stdout` caps the
//! overall output, keys containing `::` set a module path level (longest prefix wins) and
//! any remaining key sets the level of the component with exactly that name.
//!
//! Log levels are case-insensitive (`Off`, `Error`, `Warn`, `Info`, `Debug`, `Trace`).

use std::{env, str::FromStr};

use ahash::AHashMap;
use log::LevelFilter;
use strum::{AsRefStr, EnumString};
use ustr::Ustr;

use super::parse_level_filter_str;

/// The environment variable read by [`LoggerConfig::from_env`].
pub const LRUCACHE_LOG: &str = "LRUCACHE_LOG";

/// The boolean options of a [`LoggerConfig`] spec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
enum LoggerFlag {
    IsColored,
    PrintConfig,
    LogComponentsOnly,
    UseTracing,
}

/// Configuration for the lrucache logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Maximum log level for stdout output.
    pub stdout_level: LevelFilter,
    /// Per-component log level overrides (exact match).
    pub component_level: AHashMap<Ustr, LevelFilter>,
    /// Per-module path log level overrides (prefix match).
    pub module_level: AHashMap<Ustr, LevelFilter>,
    /// Log only components with explicit level filters.
    pub log_components_only: bool,
    /// Use ANSI color codes in output.
    pub is_colored: bool,
    /// Print configuration to stdout at startup.
    pub print_config: bool,
    /// Initialize the tracing subscriber for external Rust crate logs.
    pub use_tracing: bool,
}

impl Default for LoggerConfig {
    /// Creates a new default [`LoggerConfig`] instance.
    fn default() -> Self {
        Self {
            stdout_level: LevelFilter::Info,
            component_level: AHashMap::new(),
            module_level: AHashMap::new(),
            log_components_only: false,
            is_colored: true,
            print_config: false,
            use_tracing: false,
        }
    }
}

impl LoggerConfig {
    /// Creates a new [`LoggerConfig`] which writes to stdout up to `stdout_level`.
    #[must_use]
    pub fn new(stdout_level: LevelFilter) -> Self {
        Self {
            stdout_level,
            ..Self::default()
        }
    }

    /// Parses a configuration from a spec string.
    ///
    /// Semicolon-separated key-value pairs or bare flags:
    /// ```text
    /// stdout=Info;sessions=Error;lrucache_common::cache=Debug;is_colored
    /// ```
    ///
    /// Keys containing `::` are treated as module paths, any other key as a component name.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec string contains invalid syntax or log levels.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();

        for kv in spec.split(';').map(str::trim).filter(|kv| !kv.is_empty()) {
            let (key, value) = match kv.split_once('=') {
                Some((k, v)) => (k.trim(), Some(v.trim())),
                None => (kv, None),
            };

            if let Ok(flag) = LoggerFlag::from_str(key) {
                config.set_flag(flag, value.is_none_or(parse_bool_value));
                continue;
            }

            let Some(value) = value else {
                anyhow::bail!("Invalid spec pair: {kv}");
            };
            let level = parse_level_filter_str(value)?;

            if key.eq_ignore_ascii_case("stdout") {
                config.stdout_level = level;
            } else if key.contains("::") {
                config.module_level.insert(Ustr::from(key), level);
            } else {
                config.component_level.insert(Ustr::from(key), level);
            }
        }

        Ok(config)
    }

    /// Parses configuration from the `LRUCACHE_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or contains invalid syntax.
    pub fn from_env() -> anyhow::Result<Self> {
        let spec = env::var(LRUCACHE_LOG)?;
        Self::from_spec(&spec)
    }

    fn set_flag(&mut self, flag: LoggerFlag, enabled: bool) {
        match flag {
            LoggerFlag::IsColored => self.is_colored = enabled,
            LoggerFlag::PrintConfig => self.print_config = enabled,
            LoggerFlag::LogComponentsOnly => self.log_components_only = enabled,
            LoggerFlag::UseTracing => self.use_tracing = enabled,
        }
    }

    /// Returns the module filters sorted by descending path length.
    ///
    /// The first `starts_with` match in the returned list is the longest prefix.
    #[must_use]
    pub fn module_filters_sorted(&self) -> Vec<(Ustr, LevelFilter)> {
        let mut filters: Vec<(Ustr, LevelFilter)> = self
            .module_level
            .iter()
            .map(|(path, level)| (*path, *level))
            .collect();
        filters.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        filters
    }
}

/// Parses a boolean value from a string.
///
/// Returns `true` unless the value is explicitly "false", "0", or "no" (case-insensitive).
fn parse_bool_value(v: &str) -> bool {
    !matches!(v.to_lowercase().as_str(), "false" | "0" | "no")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.stdout_level, LevelFilter::Info);
        assert!(config.component_level.is_empty());
        assert!(config.module_level.is_empty());
        assert!(!config.log_components_only);
        assert!(config.is_colored);
        assert!(!config.print_config);
        assert!(!config.use_tracing);
    }

    #[rstest]
    fn test_new_sets_stdout_level_only() {
        let config = LoggerConfig::new(LevelFilter::Debug);
        assert_eq!(config.stdout_level, LevelFilter::Debug);
        assert!(config.is_colored);
        assert!(config.component_level.is_empty());
    }

    #[rstest]
    fn test_from_spec_empty_string() {
        let config = LoggerConfig::from_spec("").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[rstest]
    fn test_from_spec_case_insensitive_keys_and_levels() {
        let config = LoggerConfig::from_spec("STDOUT=debug").unwrap();
        assert_eq!(config.stdout_level, LevelFilter::Debug);
    }

    #[rstest]
    fn test_from_spec_with_whitespace_and_trailing_semicolon() {
        let config = LoggerConfig::from_spec("  stdout = Warn ; is_colored = no ;").unwrap();
        assert_eq!(config.stdout_level, LevelFilter::Warn);
        assert!(!config.is_colored);
    }

    #[rstest]
    #[case("is_colored", true)]
    #[case("is_colored=true", true)]
    #[case("is_colored=false", false)]
    #[case("is_colored=0", false)]
    #[case("is_colored=no", false)]
    #[case("IS_COLORED=FALSE", false)]
    fn test_from_spec_is_colored(#[case] spec: &str, #[case] expected: bool) {
        let config = LoggerConfig::from_spec(spec).unwrap();
        assert_eq!(config.is_colored, expected);
    }

    #[rstest]
    fn test_from_spec_bare_flags() {
        let config =
            LoggerConfig::from_spec("print_config;log_components_only;use_tracing").unwrap();
        assert!(config.print_config);
        assert!(config.log_components_only);
        assert!(config.use_tracing);
    }

    #[rstest]
    fn test_from_spec_component_level_preserves_case() {
        let config = LoggerConfig::from_spec("Sessions=Error;tokens=Debug").unwrap();
        assert_eq!(
            config.component_level[&Ustr::from("Sessions")],
            LevelFilter::Error
        );
        assert_eq!(
            config.component_level[&Ustr::from("tokens")],
            LevelFilter::Debug
        );
        assert!(
            !config
                .component_level
                .contains_key(&Ustr::from("sessions"))
        );
    }

    #[rstest]
    fn test_from_spec_module_and_component() {
        let config =
            LoggerConfig::from_spec("lrucache_common::cache=Trace;Sessions=Warn;Component:Name=Info")
                .unwrap();
        assert_eq!(
            config.module_level[&Ustr::from("lrucache_common::cache")],
            LevelFilter::Trace
        );
        assert_eq!(config.module_level.len(), 1);
        assert_eq!(config.component_level.len(), 2);
        assert!(
            config
                .component_level
                .contains_key(&Ustr::from("Component:Name"))
        );
    }

    #[rstest]
    #[case("Off", LevelFilter::Off)]
    #[case("Error", LevelFilter::Error)]
    #[case("Warn", LevelFilter::Warn)]
    #[case("Info", LevelFilter::Info)]
    #[case("Debug", LevelFilter::Debug)]
    #[case("Trace", LevelFilter::Trace)]
    #[case("Warning", LevelFilter::Warn)]
    fn test_all_log_levels(#[case] level_str: &str, #[case] expected: LevelFilter) {
        let config = LoggerConfig::from_spec(&format!("stdout={level_str}")).unwrap();
        assert_eq!(config.stdout_level, expected);
    }

    #[rstest]
    fn test_from_spec_invalid_level() {
        let err = LoggerConfig::from_spec("stdout=Loud").unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level string: 'Loud'");
    }

    #[rstest]
    fn test_from_spec_missing_value() {
        assert!(LoggerConfig::from_spec("stdout=").is_err());
    }

    #[rstest]
    fn test_from_spec_invalid_bare_flag() {
        let err = LoggerConfig::from_spec("verbose").unwrap_err();
        assert!(err.to_string().contains("Invalid spec pair"));
    }

    #[rstest]
    #[case("is_colored", LoggerFlag::IsColored)]
    #[case("Print_Config", LoggerFlag::PrintConfig)]
    #[case("LOG_COMPONENTS_ONLY", LoggerFlag::LogComponentsOnly)]
    #[case("use_tracing", LoggerFlag::UseTracing)]
    fn test_logger_flag_parsing(#[case] key: &str, #[case] expected: LoggerFlag) {
        let flag = LoggerFlag::from_str(key).unwrap();
        assert_eq!(flag, expected);
        let name: &str = flag.as_ref();
        assert_eq!(name, key.to_lowercase());
    }

    #[rstest]
    fn test_from_spec_later_flag_overrides_earlier() {
        let config = LoggerConfig::from_spec("print_config;print_config=no").unwrap();
        assert!(!config.print_config);
    }

    #[rstest]
    fn test_module_filters_sorted_longest_first() {
        let config = LoggerConfig::from_spec(
            "lrucache_common::cache=Debug;lrucache_common::cache::lru=Trace;lrucache_common::logging=Info",
        )
        .unwrap();
        let sorted = config.module_filters_sorted();
        let paths: Vec<&str> = sorted.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "lrucache_common::cache::lru",
                "lrucache_common::logging",
                "lrucache_common::cache",
            ]
        );
    }
}
