//! ExtractorManager - Input validation, parsing and per-input collection
//!
//! Handles file checks and tree-sitter parsing, then delegates to the
//! language adapter and the collector. Stateless, so one manager can serve
//! parallel workers.

use std::path::Path;
use tree_sitter::Parser;

use crate::catalog::{Catalogs, DuplicatePolicy};
use crate::error::{ExtractionError, Result, SkipReason};
use crate::extractors::base::DeclarationNode;
use crate::extractors::collector::DeclarationCollector;
use crate::extractors::csharp::CSharpExtractor;

/// Manager for the language extractors
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractorManager {
    // No state needed - this is a stateless manager that delegates to the language adapter
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["csharp"]
    }

    /// Check that a path is an existing source file of a supported language
    pub fn validate_input(&self, path: &Path) -> Result<&'static str> {
        let invalid = |reason| ExtractionError::InvalidInput {
            path: path.to_path_buf(),
            reason,
        };

        if !path.exists() {
            return Err(invalid(SkipReason::NotFound));
        }
        if !path.is_file() {
            return Err(invalid(SkipReason::NotAFile));
        }
        crate::language::detect_language_from_path(path)
            .ok_or_else(|| invalid(SkipReason::WrongExtension))
    }

    /// Validate, read and collect one file into its own catalogs
    pub fn extract_file(&self, path: &Path, policy: DuplicatePolicy) -> Result<Catalogs> {
        let language = self.validate_input(path)?;

        let bytes = std::fs::read(path).map_err(|e| {
            tracing::debug!("Failed to read {}: {}", path.display(), e);
            ExtractionError::InvalidInput {
                path: path.to_path_buf(),
                reason: SkipReason::Unreadable,
            }
        })?;

        let content = String::from_utf8(bytes).map_err(|e| ExtractionError::Parse {
            path: path.to_path_buf(),
            message: format!("source is not valid UTF-8: {}", e),
        })?;

        self.extract_content(path, &content, language, policy)
    }

    /// Parse and collect in-memory source
    pub fn extract_content(
        &self,
        path: &Path,
        content: &str,
        language: &str,
        policy: DuplicatePolicy,
    ) -> Result<Catalogs> {
        let declarations = self.extract_declarations(path, content, language)?;
        DeclarationCollector::new(path, policy).collect(declarations)
    }

    /// Parse source into the declaration stream
    pub fn extract_declarations(
        &self,
        path: &Path,
        content: &str,
        language: &str,
    ) -> Result<Vec<DeclarationNode>> {
        let parse_error = |message: String| ExtractionError::Parse {
            path: path.to_path_buf(),
            message,
        };

        // Create parser for the language
        let mut parser = Parser::new();
        let tree_sitter_language = crate::language::get_tree_sitter_language(language)
            .map_err(|e| parse_error(e.to_string()))?;

        parser.set_language(&tree_sitter_language).map_err(|e| {
            parse_error(format!(
                "Failed to set parser language for {}: {}",
                language, e
            ))
        })?;

        // Parse the file
        let tree = parser
            .parse(content, None)
            .ok_or_else(|| parse_error("parser produced no syntax tree".to_string()))?;

        let file_path = path.to_string_lossy().to_string();
        let declarations = match language {
            "csharp" => {
                CSharpExtractor::new(language.to_string(), file_path, content.to_string())
                    .extract_declarations(&tree)
            }
            _ => {
                return Err(parse_error(format!(
                    "No extractor available for {}",
                    language
                )))
            }
        };

        tracing::debug!(
            "Extracted {} declarations from {} file: {}",
            declarations.len(),
            language,
            path.display()
        );
        Ok(declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_input_reasons() {
        let dir = TempDir::new().unwrap();
        let manager = ExtractorManager::new();

        let notes = dir.path().join("notes.txt");
        fs::write(&notes, "class A {}").unwrap();
        let source = dir.path().join("A.CS");
        fs::write(&source, "class A {}").unwrap();

        let reason = |path: &Path| match manager.validate_input(path) {
            Err(ExtractionError::InvalidInput { reason, .. }) => Some(reason),
            Err(other) => panic!("unexpected error: {:?}", other),
            Ok(_) => None,
        };

        assert_eq!(reason(&dir.path().join("missing.cs")), Some(SkipReason::NotFound));
        assert_eq!(reason(dir.path()), Some(SkipReason::NotAFile));
        assert_eq!(reason(&notes), Some(SkipReason::WrongExtension));
        assert_eq!(reason(&source), None);
    }

    #[test]
    fn test_non_utf8_source_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Latin1.cs");
        fs::write(&path, b"class Caf\xe9 {}").unwrap();

        let err = ExtractorManager::new()
            .extract_file(&path, DuplicatePolicy::Reject)
            .unwrap_err();

        assert!(matches!(err, ExtractionError::Parse { .. }));
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_unsupported_language_is_a_parse_error() {
        let err = ExtractorManager::new()
            .extract_declarations(Path::new("x.rs"), "fn main() {}", "rust")
            .unwrap_err();

        assert!(matches!(err, ExtractionError::Parse { .. }));
    }

    #[test]
    fn test_extract_file_collects_catalogs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Shapes.cs");
        fs::write(
            &path,
            "abstract class Shape { public abstract double Area(); }\nclass Circle : Shape { public override double Area() => 3.14; }\n",
        )
        .unwrap();

        let catalogs = ExtractorManager::new()
            .extract_file(&path, DuplicatePolicy::Reject)
            .unwrap();

        assert_eq!(catalogs.classes.names().collect::<Vec<_>>(), vec!["Shape", "Circle"]);
        assert_eq!(
            catalogs.classes.get("Shape").unwrap().methods,
            vec!["public abstract double Area();"]
        );
        assert_eq!(
            catalogs.classes.get("Circle").unwrap().methods,
            vec!["public override double Area();"]
        );
    }
}
