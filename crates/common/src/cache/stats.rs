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

//! Operation counters for an LRU cache.

use serde::{Deserialize, Serialize};

/// Counters for the operations applied to a cache since construction or the last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups which found their key.
    pub hits: u64,
    /// Lookups which did not find their key.
    pub misses: u64,
    /// Sets which added a new key.
    pub insertions: u64,
    /// Sets which replaced the value of an existing key.
    pub updates: u64,
    /// Entries dropped to stay within capacity.
    pub evictions: u64,
    /// Entries dropped by an explicit remove.
    pub removals: u64,
}

impl CacheStats {
    /// Returns the total number of lookups (hits and misses).
    #[must_use]
    pub const fn total_lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Returns the fraction of lookups which were hits, in the range `[0.0, 1.0]`.
    ///
    /// Returns `0.0` if there have been no lookups.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
