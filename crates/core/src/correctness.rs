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

//! Argument checks for validating values at API boundaries.
//!
//! Each check returns an [`anyhow::Result`] carrying a descriptive message naming the
//! offending parameter, so callers can propagate failures with `?`.

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if the predicate is false.
#[inline(always)]
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the string `s` is not empty and not all whitespace.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is an empty string.
/// - `s` consists solely of whitespace characters.
#[inline(always)]
pub fn check_valid_string_utf8<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();

    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty");
    }

    if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(false, false)]
    #[case(true, true)]
    fn test_check_predicate_true(#[case] predicate: bool, #[case] expected: bool) {
        let result = check_predicate_true(predicate, "the predicate was false").is_ok();
        assert_eq!(result, expected);
    }

    #[rstest]
    fn test_check_predicate_true_message() {
        let err = check_predicate_true(false, "duplicate key 'capacity'").unwrap_err();
        assert_eq!(err.to_string(), "duplicate key 'capacity'");
    }

    #[rstest]
    #[case("a")]
    #[case("sessions")]
    #[case(" padded ")]
    fn test_check_valid_string_utf8_with_valid_value(#[case] s: &str) {
        assert!(check_valid_string_utf8(s, "value").is_ok());
    }

    #[rstest]
    #[case("", "invalid string for 'name', was empty")]
    #[case(" ", "invalid string for 'name', was all whitespace")]
    #[case("\t\n", "invalid string for 'name', was all whitespace")]
    fn test_check_valid_string_utf8_with_invalid_value(#[case] s: &str, #[case] expected: &str) {
        let err = check_valid_string_utf8(s, "name").unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
}
