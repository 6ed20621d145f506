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

//! Enumerations for common components.

use log::Level;
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

/// The log color for log messages.
#[repr(C)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LogColor {
    /// The default/normal log color.
    #[default]
    Normal = 0,
    /// The green log color, typically used with INFO log levels.
    Green = 1,
    /// The blue log color, typically used with TRACE and DEBUG log levels.
    Blue = 2,
    /// The magenta log color.
    Magenta = 3,
    /// The cyan log color.
    Cyan = 4,
    /// The yellow log color, typically used with WARNING log levels.
    Yellow = 5,
    /// The red log color, typically used with ERROR log levels.
    Red = 6,
}

impl LogColor {
    /// Returns the ANSI escape sequence for the color.
    #[must_use]
    pub const fn as_ansi(&self) -> &str {
        match *self {
            Self::Normal => "",
            Self::Green => "\x1b[92m",
            Self::Blue => "\x1b[94m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::Yellow => "\x1b[1;33m",
            Self::Red => "\x1b[1;31m",
        }
    }
}

impl From<u8> for LogColor {
    fn from(value: u8) -> Self {
        Self::from_repr(usize::from(value)).unwrap_or_default()
    }
}

impl From<Level> for LogColor {
    fn from(value: Level) -> Self {
        match value {
            Level::Error => Self::Red,
            Level::Warn => Self::Yellow,
            Level::Info => Self::Normal,
            Level::Debug | Level::Trace => Self::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(Level::Error, LogColor::Red)]
    #[case(Level::Warn, LogColor::Yellow)]
    #[case(Level::Info, LogColor::Normal)]
    #[case(Level::Debug, LogColor::Blue)]
    #[case(Level::Trace, LogColor::Blue)]
    fn test_log_color_from_level(#[case] level: Level, #[case] expected: LogColor) {
        assert_eq!(LogColor::from(level), expected);
    }

    #[rstest]
    fn test_log_color_from_u8_round_trips_repr() {
        for color in LogColor::iter() {
            assert_eq!(LogColor::from(color as u8), color);
        }
    }

    #[rstest]
    #[case(0, LogColor::Normal)]
    #[case(4, LogColor::Cyan)]
    #[case(6, LogColor::Red)]
    #[case(7, LogColor::Normal)]
    #[case(u8::MAX, LogColor::Normal)]
    fn test_log_color_from_u8(#[case] value: u8, #[case] expected: LogColor) {
        assert_eq!(LogColor::from(value), expected);
    }

    #[rstest]
    fn test_log_color_parse_case_insensitive() {
        assert_eq!(LogColor::from_str("green").unwrap(), LogColor::Green);
        assert_eq!(LogColor::Magenta.to_string(), "MAGENTA");
    }

    #[rstest]
    fn test_normal_has_no_ansi_code() {
        assert!(LogColor::Normal.as_ansi().is_empty());
        assert!(LogColor::Red.as_ansi().starts_with("\x1b["));
    }
}
