//! Declaration Extractors Module
//!
//! Tree-sitter based adapters that turn source files into declaration
//! streams, and the collector that records them.
//!
//! # Architecture
//!
//! - `base` - Declaration node types, catalog records, BaseExtractor
//! - `csharp` - C# adapter and method signature normalizer
//! - `collector` - Single-pass DeclarationCollector
//! - `manager` - ExtractorManager public API (validation, parsing)

pub mod base;
pub mod collector;
pub mod csharp;
pub mod manager;

// Re-export the public API
pub use base::{
    ClassDecl, ClassRecord, DeclarationKind, DeclarationNode, EnumDecl, EnumRecord, IgnoredKind,
    MethodBody, MethodDecl,
};
pub use collector::DeclarationCollector;
pub use csharp::{normalize_method, normalize_whitespace, CSharpExtractor};
pub use manager::ExtractorManager;
