// API Functions - PyO3-exposed functions for Python

use super::{parse_policy, to_py_err, PyExtractionSession};
use crate::extractors::{normalize_whitespace, ExtractorManager};
use crate::session::{ExtractionSession, SessionConfig};
use pyo3::prelude::*;

/// Extract classes and enums from a list of files into a new session
///
/// Parsing runs on all cores with the GIL released; results are merged in
/// the order given, so duplicates are reported exactly as a sequential run
/// would report them.
///
/// Args:
///     paths (list[str]): Source files; non-.cs or missing paths are skipped
///     duplicate_policy (str): "reject" (default), "overwrite" or "keep-first"
///
/// Returns:
///     ExtractionSession: Session holding the merged catalogs
///
/// Raises:
///     ValueError: On parse failure or (under "reject") a duplicate declaration
#[pyfunction]
#[pyo3(signature = (paths, duplicate_policy = "reject"))]
pub fn extract_files(
    py: Python<'_>,
    paths: Vec<String>,
    duplicate_policy: &str,
) -> PyResult<PyExtractionSession> {
    let config = SessionConfig {
        duplicate_policy: parse_policy(duplicate_policy)?,
    };

    // Release GIL for parallel processing
    let session = py.detach(move || {
        let mut session = ExtractionSession::with_config(config);
        session.extract_paths_parallel(&paths).map(|_| session)
    });

    session
        .map(PyExtractionSession::from_session)
        .map_err(to_py_err)
}

/// Normalize a C# method signature to its canonical single-line spacing
#[pyfunction]
#[pyo3(signature = (signature))]
pub fn normalize_signature(signature: &str) -> String {
    normalize_whitespace(signature)
}

/// Get list of all supported languages
#[pyfunction]
pub fn supported_languages() -> PyResult<Vec<String>> {
    let manager = ExtractorManager::new();
    let langs = manager.supported_languages();

    Ok(langs.iter().map(|&s| s.to_string()).collect())
}
