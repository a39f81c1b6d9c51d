// PyO3 Bindings Module
//
// Python bindings for the declaration extractors. Wraps the catalog records
// and the extraction session in PyO3-compatible types.

mod api;
mod records;
mod session;

// Re-export for lib.rs
pub use api::{extract_files, normalize_signature, supported_languages};
pub use records::{PyClassRecord, PyEnumRecord};
pub use session::PyExtractionSession;

use crate::catalog::DuplicatePolicy;
use crate::error::ExtractionError;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub(crate) fn to_py_err(err: ExtractionError) -> PyErr {
    PyValueError::new_err(format!("Extraction failed: {}", err))
}

pub(crate) fn parse_policy(policy: &str) -> Result<DuplicatePolicy, PyErr> {
    policy.parse().map_err(PyValueError::new_err)
}
