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

//! Python bindings for the LRU cache.

use std::sync::Arc;

use lrucache_core::python::{to_pykey_err, to_pyvalue_err};
use pyo3::prelude::*;

use crate::cache::{LruCache, LruCacheConfig};

/// A fixed-capacity least-recently-used cache of Python objects keyed by strings.
///
/// The cache is safe to share between Python threads.
#[pyo3::pyclass(name = "LruCache", module = "lrucache._lrucache_pyo3", frozen)]
#[derive(Debug)]
pub struct PyLruCache {
    inner: LruCache<Arc<Py<PyAny>>>,
}

#[pymethods]
impl PyLruCache {
    #[new]
    #[pyo3(signature = (capacity, name=None))]
    fn py_new(capacity: i64, name: Option<String>) -> PyResult<Self> {
        let config = LruCacheConfig { capacity, name };
        let inner = LruCache::from_config(&config).map_err(to_pyvalue_err)?;
        Ok(Self { inner })
    }

    fn __repr__(&self) -> String {
        format!(
            "LruCache(name='{}', capacity={}, len={})",
            self.inner.name(),
            self.inner.capacity(),
            self.inner.len()
        )
    }

    #[getter]
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __contains__(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    fn __getitem__(&self, py: Python<'_>, key: &str) -> PyResult<Py<PyAny>> {
        self.inner
            .get(key)
            .map(|value| value.clone_ref(py))
            .ok_or_else(|| to_pykey_err(key))
    }

    fn __setitem__(&self, key: String, value: Py<PyAny>) {
        self.set(key, value);
    }

    fn __delitem__(&self, key: &str) -> PyResult<()> {
        if self.inner.remove(key) {
            Ok(())
        } else {
            Err(to_pykey_err(key))
        }
    }

    #[pyo3(signature = (key, default=None))]
    fn get(&self, py: Python<'_>, key: &str, default: Option<Py<PyAny>>) -> Option<Py<PyAny>> {
        self.inner
            .get(key)
            .map(|value| value.clone_ref(py))
            .or(default)
    }

    fn peek(&self, py: Python<'_>, key: &str) -> Option<Py<PyAny>> {
        self.inner.peek(key).map(|value| value.clone_ref(py))
    }

    fn set(&self, key: String, value: Py<PyAny>) {
        self.inner.set(key, Arc::new(value));
    }

    fn remove(&self, key: &str) -> bool {
        self.inner.remove(key)
    }

    fn clear(&self) {
        self.inner.clear();
    }

    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }

    fn stats_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.stats()).map_err(to_pyvalue_err)
    }
}
