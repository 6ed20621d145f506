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

//! A fixed-capacity, thread-safe least-recently-used cache.
//!
//! The `lrucache-common` crate provides:
//!
//! - [`cache::LruCache`]: the cache itself, with its configuration, errors and statistics.
//! - [`logging`]: a `log` implementation configured from the `LRUCACHE_LOG` environment variable.
//!
//! # Feature flags
//!
//! - `python`: Enables Python bindings from [PyO3](https://pyo3.rs).
//! - `extension-module`: Builds as a Python extension module (used with `python`).
//! - `stubs`: Exposes test fixtures for use in other crates.
//! - `tracing-bridge`: Routes logs from crates using `tracing` through a subscriber.

#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(clippy::missing_errors_doc)]

pub mod cache;
pub mod enums;
pub mod logging;

#[cfg(feature = "python")]
pub mod python;
