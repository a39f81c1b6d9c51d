// Base Extractor Types and Traits for ParserDoc
//
// - types.rs: declaration nodes and catalog records
// - extractor.rs: BaseExtractor (source text access, leading comments)
// - tree_methods.rs: tree navigation and traversal methods

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{
    ClassDecl, ClassRecord, DeclarationKind, DeclarationNode, EnumDecl, EnumRecord, IgnoredKind,
    MethodBody, MethodDecl,
};
