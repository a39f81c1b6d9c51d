//! Declaration Collector
//!
//! Consumes the declaration stream of one input and records classes and enums
//! into fresh catalogs. The collector is consumed by [`DeclarationCollector::collect`],
//! so a walk can neither be resumed nor re-entered.

use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::catalog::{Catalogs, DuplicatePolicy};
use crate::error::Result;
use crate::extractors::base::{ClassDecl, ClassRecord, DeclarationNode, EnumDecl, EnumRecord};
use crate::extractors::csharp::normalize_method;

pub struct DeclarationCollector {
    source: PathBuf,
    policy: DuplicatePolicy,
    catalogs: Catalogs,
}

impl DeclarationCollector {
    pub fn new(source: &Path, policy: DuplicatePolicy) -> Self {
        Self {
            source: source.to_path_buf(),
            policy,
            catalogs: Catalogs::new(),
        }
    }

    /// Walk the stream once and return the catalogs of this input
    pub fn collect<I>(mut self, nodes: I) -> Result<Catalogs>
    where
        I: IntoIterator<Item = DeclarationNode>,
    {
        for node in nodes {
            match node {
                DeclarationNode::Class(class) => {
                    let record = class_record(class);
                    self.catalogs
                        .classes
                        .insert(record, self.policy, &self.source)?;
                }
                DeclarationNode::Enum(enumeration) => {
                    let record = enum_record(enumeration);
                    self.catalogs
                        .enums
                        .insert(record, self.policy, &self.source)?;
                }
                DeclarationNode::Ignored { kind, name } => {
                    trace!(
                        "Ignoring {} {} in {}",
                        kind,
                        name.as_deref().unwrap_or("<anonymous>"),
                        self.source.display()
                    );
                }
            }
        }

        debug!(
            "Collected {} classes and {} enums from {}",
            self.catalogs.classes.len(),
            self.catalogs.enums.len(),
            self.source.display()
        );
        Ok(self.catalogs)
    }
}

/// Class record with every method reduced to its normalized signature
pub fn class_record(class: ClassDecl) -> ClassRecord {
    ClassRecord {
        methods: class.methods.iter().map(normalize_method).collect(),
        name: class.name,
        parents: class.parents,
        fields: class.fields,
        properties: class.properties,
        events: class.events,
    }
}

pub fn enum_record(enumeration: EnumDecl) -> EnumRecord {
    EnumRecord {
        name: enumeration.name,
        constants: enumeration.constants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::extractors::base::{DeclarationKind, IgnoredKind, MethodBody, MethodDecl};

    fn class_node(name: &str) -> DeclarationNode {
        DeclarationNode::Class(ClassDecl {
            name: name.to_string(),
            ..Default::default()
        })
    }

    fn enum_node(name: &str, constants: &[&str]) -> DeclarationNode {
        DeclarationNode::Enum(EnumDecl {
            name: name.to_string(),
            constants: constants.iter().map(|c| c.to_string()).collect(),
        })
    }

    #[test]
    fn test_member_counts_and_order_are_preserved() {
        let class = ClassDecl {
            name: "Derived".to_string(),
            parents: vec!["Base".to_string(), "IComparable".to_string()],
            fields: vec!["int a;".to_string(), "int b;".to_string()],
            properties: vec!["public int X { get; set; }".to_string()],
            events: vec!["public event EventHandler E;".to_string()],
            methods: vec![
                MethodDecl {
                    modifiers: vec!["public".to_string()],
                    return_type: "void".to_string(),
                    name: "Run".to_string(),
                    parameters: "()".to_string(),
                    body: Some(MethodBody::Block("{ }".to_string())),
                    ..Default::default()
                },
                MethodDecl {
                    return_type: "int".to_string(),
                    name: "Count".to_string(),
                    parameters: "( )".to_string(),
                    ..Default::default()
                },
            ],
        };

        let catalogs = DeclarationCollector::new(Path::new("a.cs"), DuplicatePolicy::Reject)
            .collect(vec![DeclarationNode::Class(class)])
            .unwrap();

        let record = catalogs.classes.get("Derived").unwrap();
        assert_eq!(record.parents, vec!["Base", "IComparable"]);
        assert_eq!(record.fields, vec!["int a;", "int b;"]);
        assert_eq!(record.properties.len(), 1);
        assert_eq!(record.events.len(), 1);
        assert_eq!(record.methods, vec!["public void Run();", "int Count();"]);
    }

    #[test]
    fn test_enum_duplicates_constants_are_kept() {
        let catalogs = DeclarationCollector::new(Path::new("a.cs"), DuplicatePolicy::Reject)
            .collect(vec![enum_node("Color", &["Red", "Green", "Red"])])
            .unwrap();

        assert_eq!(
            catalogs.enums.get("Color").unwrap().constants,
            vec!["Red", "Green", "Red"]
        );
    }

    #[test]
    fn test_duplicate_class_within_one_input_is_rejected() {
        let err = DeclarationCollector::new(Path::new("partial.cs"), DuplicatePolicy::Reject)
            .collect(vec![class_node("Foo"), class_node("Foo")])
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::DuplicateDeclaration {
                kind: DeclarationKind::Class,
                ref name,
                ..
            } if name == "Foo"
        ));
    }

    #[test]
    fn test_class_and_enum_names_do_not_collide() {
        let catalogs = DeclarationCollector::new(Path::new("a.cs"), DuplicatePolicy::Reject)
            .collect(vec![class_node("Mode"), enum_node("Mode", &["On"])])
            .unwrap();

        assert!(catalogs.classes.contains("Mode"));
        assert!(catalogs.enums.contains("Mode"));
    }

    #[test]
    fn test_ignored_nodes_leave_catalogs_empty() {
        let catalogs = DeclarationCollector::new(Path::new("a.cs"), DuplicatePolicy::Reject)
            .collect(vec![
                DeclarationNode::Ignored {
                    kind: IgnoredKind::Interface,
                    name: Some("IThing".to_string()),
                },
                DeclarationNode::Ignored {
                    kind: IgnoredKind::Namespace,
                    name: None,
                },
            ])
            .unwrap();

        assert!(catalogs.is_empty());
    }
}
