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

//! Fixtures for constructing caches in tests.

use rstest::fixture;

use super::{LruCache, LruCacheConfig};

/// An empty unnamed cache of strings holding at most two entries.
#[fixture]
pub fn lru_cache_capacity_2() -> LruCache<String> {
    LruCache::new(2).expect("capacity is positive")
}

/// An empty unnamed cache of integers holding at most three entries.
#[fixture]
pub fn lru_cache_capacity_3() -> LruCache<u32> {
    LruCache::new(3).expect("capacity is positive")
}

/// A named configuration for a small cache.
#[fixture]
pub fn sessions_config() -> LruCacheConfig {
    LruCacheConfig::new(4).with_name("sessions")
}
