use pyo3::prelude::*;

#[pymodule]
fn _lrucache_pyo3(m: &Bound<'_, PyModule>) -> PyResult<()> {
    lrucache_common::python::register(m)
}
