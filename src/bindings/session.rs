// PyExtractionSession - PyO3 wrapper for ExtractionSession

use super::{parse_policy, to_py_err, PyClassRecord, PyEnumRecord};
use crate::session::{ExtractionSession, InputOutcome, SessionConfig};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-accessible extraction session
///
/// Accumulates classes and enums across calls. Raises ValueError on parse
/// failures and duplicate declarations; invalid paths are skipped.
#[pyclass(name = "ExtractionSession")]
pub struct PyExtractionSession {
    inner: ExtractionSession,
}

impl PyExtractionSession {
    pub fn from_session(session: ExtractionSession) -> Self {
        PyExtractionSession { inner: session }
    }
}

#[pymethods]
impl PyExtractionSession {
    #[new]
    #[pyo3(signature = (duplicate_policy = "reject"))]
    fn new(duplicate_policy: &str) -> PyResult<Self> {
        let config = SessionConfig {
            duplicate_policy: parse_policy(duplicate_policy)?,
        };
        Ok(Self::from_session(ExtractionSession::with_config(config)))
    }

    /// Extract one file; returns False when the path was skipped
    fn extract_path(&mut self, path: &str) -> PyResult<bool> {
        let outcome = self.inner.extract_path(path).map_err(to_py_err)?;
        Ok(matches!(outcome, InputOutcome::Extracted { .. }))
    }

    /// Extract several files in order; returns the number actually extracted
    fn extract_paths(&mut self, paths: Vec<String>) -> PyResult<usize> {
        let summary = self.inner.extract_paths(&paths).map_err(to_py_err)?;
        Ok(summary.processed.len())
    }

    /// Extract in-memory C# source under a label
    fn extract_source(&mut self, label: &str, source: &str) -> PyResult<()> {
        self.inner.extract_source(label, source).map_err(to_py_err)?;
        Ok(())
    }

    #[getter]
    fn classes(&self) -> Vec<PyClassRecord> {
        self.inner
            .classes()
            .iter()
            .map(|c| PyClassRecord::from_record(c.clone()))
            .collect()
    }

    #[getter]
    fn enums(&self) -> Vec<PyEnumRecord> {
        self.inner
            .enums()
            .iter()
            .map(|e| PyEnumRecord::from_record(e.clone()))
            .collect()
    }

    /// Skipped inputs as (path, reason) tuples
    #[getter]
    fn skipped(&self) -> Vec<(String, String)> {
        self.inner
            .skipped()
            .iter()
            .map(|s| (s.path.to_string_lossy().to_string(), s.reason.to_string()))
            .collect()
    }

    /// Catalogs as a JSON document (classes and enums keyed by name, in insertion order)
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(self.inner.catalogs())
            .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
    }

    fn __repr__(&self) -> String {
        format!(
            "ExtractionSession(classes={}, enums={}, skipped={})",
            self.inner.classes().len(),
            self.inner.enums().len(),
            self.inner.skipped().len()
        )
    }
}
