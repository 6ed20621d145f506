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

//! Python bindings for logging initialization.

use lrucache_core::python::{to_pyruntime_err, to_pyvalue_err};
use pyo3::prelude::*;

use crate::logging::{self, config::LoggerConfig};

/// Initializes logging from a spec string such as `"stdout=Debug;is_colored=false"`.
///
/// With no spec the `LRUCACHE_LOG` environment variable is used if set,
/// otherwise the default configuration.
///
/// # Errors
///
/// Returns a `ValueError` if the spec is invalid, or a `RuntimeError` if logging
/// was already initialized.
#[pyfunction(name = "init_logging")]
#[pyo3(signature = (spec=None))]
pub fn py_init_logging(spec: Option<&str>) -> PyResult<()> {
    let config = match spec {
        Some(spec) => LoggerConfig::from_spec(spec).map_err(to_pyvalue_err)?,
        None => LoggerConfig::from_env().unwrap_or_default(),
    };
    logging::init_logging(config).map_err(to_pyruntime_err)
}

/// Returns whether logging has been initialized.
#[pyfunction(name = "logging_is_initialized")]
#[must_use]
pub fn py_logging_is_initialized() -> bool {
    logging::logging_is_initialized()
}
