// Base Extractor Types for ParserDoc
//
// Declaration nodes handed out by language adapters, and the records the
// collector stores in the session catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a recorded declaration (used as the catalog discriminator in errors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Enum,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Class => write!(f, "class"),
            DeclarationKind::Enum => write!(f, "enum"),
        }
    }
}

/// Declaration kinds the adapter recognizes but the model does not record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoredKind {
    Interface,
    Struct,
    Record,
    Delegate,
    Namespace,
}

impl fmt::Display for IgnoredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoredKind::Interface => "interface",
            IgnoredKind::Struct => "struct",
            IgnoredKind::Record => "record",
            IgnoredKind::Delegate => "delegate",
            IgnoredKind::Namespace => "namespace",
        };
        f.write_str(text)
    }
}

/// One declaration from the adapter's pre-order walk
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationNode {
    Class(ClassDecl),
    Enum(EnumDecl),
    /// Recognized but out of scope; carries the name when one was found
    Ignored {
        kind: IgnoredKind,
        name: Option<String>,
    },
}

impl DeclarationNode {
    pub fn name(&self) -> Option<&str> {
        match self {
            DeclarationNode::Class(class) => Some(&class.name),
            DeclarationNode::Enum(enumeration) => Some(&enumeration.name),
            DeclarationNode::Ignored { name, .. } => name.as_deref(),
        }
    }
}

/// A class declaration as the adapter sees it, methods not yet normalized
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    /// Base-list entries in source order (base class and interfaces together)
    pub parents: Vec<String>,
    /// Verbatim field declarations
    pub fields: Vec<String>,
    /// Verbatim property declarations
    pub properties: Vec<String>,
    /// Verbatim event field declarations
    pub events: Vec<String>,
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    /// Member identifiers in source order, duplicates kept
    pub constants: Vec<String>,
}

/// Body of a method declaration
#[derive(Debug, Clone, PartialEq)]
pub enum MethodBody {
    /// `{ ... }`
    Block(String),
    /// `=> expr;`
    Expression(String),
}

/// A method declaration split into the parts the normalizer cares about
///
/// Every part holds raw source text exactly as written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodDecl {
    /// Comments directly preceding the declaration
    pub leading_trivia: Vec<String>,
    pub attributes: Vec<String>,
    pub modifiers: Vec<String>,
    pub return_type: String,
    /// Method name, including an explicit interface qualifier (`IFoo.Bar`)
    pub name: String,
    /// `<T, U>` when generic
    pub type_parameters: Option<String>,
    /// `(int x, string y)`
    pub parameters: String,
    /// `where T : class` clauses
    pub constraints: Vec<String>,
    pub body: Option<MethodBody>,
}

/// One class in the session catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub parents: Vec<String>,
    pub fields: Vec<String>,
    pub properties: Vec<String>,
    pub events: Vec<String>,
    /// Normalized single-line signatures
    pub methods: Vec<String>,
}

/// One enumeration in the session catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRecord {
    pub name: String,
    pub constants: Vec<String>,
}
