// Error taxonomy for declaration extraction
//
// InvalidInput is recoverable (the session records a skip and moves on);
// Parse and DuplicateDeclaration are surfaced to the caller.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::extractors::base::DeclarationKind;

/// Why an input was skipped instead of extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Path does not exist
    NotFound,
    /// Path exists but is a directory or other non-regular file
    NotAFile,
    /// Extension does not map to a supported source language
    WrongExtension,
    /// File exists but could not be read (permissions, I/O failure)
    Unreadable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NotFound => "no such file",
            SkipReason::NotAFile => "not a regular file",
            SkipReason::WrongExtension => "not a .cs source file",
            SkipReason::Unreadable => "file could not be read",
        };
        f.write_str(text)
    }
}

/// Errors produced while extracting declarations into a session
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("invalid input {}: {reason}", path.display())]
    InvalidInput { path: PathBuf, reason: SkipReason },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("duplicate {kind} declaration `{name}` in {}", path.display())]
    DuplicateDeclaration {
        name: String,
        kind: DeclarationKind,
        path: PathBuf,
    },
}

impl ExtractionError {
    /// Why the input is skipped, or `None` when the error must abort the run
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            ExtractionError::InvalidInput { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
