//! Language Support - Shared tree-sitter language configuration
//!
//! ALL tree-sitter grammar configuration lives here so the extractor manager
//! and the session agree on which inputs are accepted.

use anyhow::Result;
use std::path::Path;

/// Get tree-sitter language parser for a given language name
///
/// This is the SINGLE SOURCE OF TRUTH for grammar selection. Only C# is
/// wired up; the declaration model is tied to its class/enum node kinds.
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "csharp" => Ok(tree_sitter_c_sharp::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: csharp",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
/// Matching is case-insensitive (`Foo.CS` is a C# file).
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "cs" => Some("csharp"),
        _ => None,
    }
}

/// Detect language for a path, `None` when the extension is missing or unknown
pub fn detect_language_from_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_detection_is_case_insensitive() {
        assert_eq!(detect_language_from_extension("cs"), Some("csharp"));
        assert_eq!(detect_language_from_extension("CS"), Some("csharp"));
        assert_eq!(detect_language_from_extension("txt"), None);
        assert_eq!(detect_language_from_extension(""), None);
    }

    #[test]
    fn test_path_detection() {
        assert_eq!(
            detect_language_from_path(Path::new("src/Models/User.Cs")),
            Some("csharp")
        );
        assert_eq!(detect_language_from_path(Path::new("README")), None);
        assert_eq!(detect_language_from_path(Path::new("notes.txt")), None);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let err = get_tree_sitter_language("cobol").unwrap_err();
        assert!(err.to_string().contains("Unsupported language"));
        assert!(get_tree_sitter_language("csharp").is_ok());
    }
}
