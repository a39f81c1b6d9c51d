// ParserDoc Core - tree-sitter declaration extraction for C# sources
//
// Walks C# syntax trees and collects classes (parents, fields, properties,
// events, normalized method signatures) and enums (constant names) into
// insertion-ordered catalogs shared across a whole extraction session.
//
// The Python extension module is compiled only with the `python` feature.

pub mod catalog;
pub mod error;
pub mod extractors;
pub mod language;
pub mod session;

// PyO3 bindings layer
#[cfg(feature = "python")]
pub mod bindings;

pub use catalog::{Catalog, Catalogs, DuplicatePolicy, MergeCount};
pub use error::{ExtractionError, Result, SkipReason};
pub use extractors::base::{ClassRecord, DeclarationKind, EnumRecord};
pub use extractors::{normalize_method, normalize_whitespace};
pub use session::{ExtractionSession, ExtractionSummary, InputOutcome, SessionConfig, SkippedInput};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// ParserDoc Core Python module
///
/// Provides class and enum extraction for C# source files.
#[cfg(feature = "python")]
#[pymodule]
fn parserdoc_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::extract_files, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::normalize_signature, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::supported_languages, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyExtractionSession>()?;
    m.add_class::<bindings::PyClassRecord>()?;
    m.add_class::<bindings::PyEnumRecord>()?;

    Ok(())
}
