// PyClassRecord / PyEnumRecord - PyO3 wrappers for catalog records
//
// All fields are read-only from Python.

use crate::extractors::base::{ClassRecord, EnumRecord};
use pyo3::prelude::*;

/// Python-accessible class record
#[pyclass(name = "ClassRecord")]
pub struct PyClassRecord {
    inner: ClassRecord,
}

impl PyClassRecord {
    pub fn from_record(record: ClassRecord) -> Self {
        PyClassRecord { inner: record }
    }
}

#[pymethods]
impl PyClassRecord {
    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[getter]
    fn parents(&self) -> Vec<String> {
        self.inner.parents.clone()
    }

    #[getter]
    fn fields(&self) -> Vec<String> {
        self.inner.fields.clone()
    }

    #[getter]
    fn properties(&self) -> Vec<String> {
        self.inner.properties.clone()
    }

    #[getter]
    fn events(&self) -> Vec<String> {
        self.inner.events.clone()
    }

    #[getter]
    fn methods(&self) -> Vec<String> {
        self.inner.methods.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "ClassRecord(name='{}', parents={}, fields={}, properties={}, events={}, methods={})",
            self.inner.name,
            self.inner.parents.len(),
            self.inner.fields.len(),
            self.inner.properties.len(),
            self.inner.events.len(),
            self.inner.methods.len()
        )
    }
}

/// Python-accessible enum record
#[pyclass(name = "EnumRecord")]
pub struct PyEnumRecord {
    inner: EnumRecord,
}

impl PyEnumRecord {
    pub fn from_record(record: EnumRecord) -> Self {
        PyEnumRecord { inner: record }
    }
}

#[pymethods]
impl PyEnumRecord {
    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[getter]
    fn constants(&self) -> Vec<String> {
        self.inner.constants.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "EnumRecord(name='{}', constants={:?})",
            self.inner.name, self.inner.constants
        )
    }
}
