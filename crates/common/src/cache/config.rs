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

//! Configuration for constructing an [`LruCache`](super::LruCache).
//!
//! A configuration can be built in code, deserialized from JSON, or parsed from a
//! semicolon-separated spec string such as the `LRUCACHE_CONFIG` environment variable:
//!
//! ```text
//! capacity=512;name=sessions
//! ```

use std::{
    env::{self, VarError},
    num::NonZeroUsize,
};

use ahash::AHashSet;
use lrucache_core::correctness::{check_predicate_true, check_valid_string_utf8};
use serde::{Deserialize, Serialize};

use super::error::CacheError;

/// The environment variable read by [`LruCacheConfig::from_env`].
pub const LRUCACHE_CONFIG: &str = "LRUCACHE_CONFIG";

/// The default maximum number of entries.
pub const DEFAULT_CAPACITY: i64 = 1024;

/// Configuration for an LRU cache.
///
/// The capacity is signed so that configurations coming from outside the process can be
/// represented before validation rejects non-positive values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LruCacheConfig {
    /// Maximum number of entries held by the cache.
    pub capacity: i64,
    /// Optional cache name, used as the logging component.
    pub name: Option<String>,
}

impl Default for LruCacheConfig {
    /// Creates a new default [`LruCacheConfig`] instance.
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            name: None,
        }
    }
}

impl LruCacheConfig {
    /// Creates a new unnamed [`LruCacheConfig`] with the given capacity.
    #[must_use]
    pub const fn new(capacity: i64) -> Self {
        Self {
            capacity,
            name: None,
        }
    }

    /// Sets the cache name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the validated capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] if the capacity is zero or negative.
    pub fn validate(&self) -> Result<NonZeroUsize, CacheError> {
        usize::try_from(self.capacity)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(CacheError::InvalidCapacity(self.capacity))
    }

    /// Deserializes and validates a configuration from JSON.
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, contains unknown fields, or the
    /// resulting configuration is invalid.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Parses and validates a configuration from a spec string.
    ///
    /// Keys are case-insensitive, unspecified keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec contains an unknown or repeated key, a value which does
    /// not parse, or the resulting configuration is invalid.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let mut seen = AHashSet::new();

        for kv in spec.split(';') {
            let kv = kv.trim();
            if kv.is_empty() {
                continue;
            }

            let Some((k, v)) = kv.split_once('=') else {
                anyhow::bail!("Invalid spec pair: {kv}");
            };
            let v = v.trim();
            let k = k.trim().to_lowercase();
            check_predicate_true(
                !seen.contains(&k),
                &format!("Duplicate spec key: {k}"),
            )?;

            match k.as_str() {
                "capacity" => {
                    config.capacity = v
                        .parse()
                        .map_err(|e| anyhow::anyhow!("Invalid capacity '{v}': {e}"))?;
                }
                "name" => config.name = Some(v.to_string()),
                _ => anyhow::bail!("Invalid spec key: {k}"),
            }
            seen.insert(k);
        }

        config.check()?;
        Ok(config)
    }

    /// Parses configuration from the `LRUCACHE_CONFIG` environment variable.
    ///
    /// Returns the default configuration if the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not valid unicode or contains an invalid spec.
    pub fn from_env() -> anyhow::Result<Self> {
        match env::var(LRUCACHE_CONFIG) {
            Ok(spec) => Self::from_spec(&spec),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the validated name, if one is set.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidName`] if the name is empty or all whitespace.
    pub fn validate_name(&self) -> Result<Option<&str>, CacheError> {
        let Some(name) = self.name.as_deref() else {
            return Ok(None);
        };
        check_valid_string_utf8(name, "name")
            .map_err(|e| CacheError::InvalidName(e.to_string()))?;
        Ok(Some(name))
    }

    fn check(&self) -> Result<(), CacheError> {
        self.validate()?;
        self.validate_name()?;
        Ok(())
    }
}
