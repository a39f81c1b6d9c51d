// C# Type Declaration Extraction

use super::{helpers, members};
use crate::extractors::base::{
    BaseExtractor, ClassDecl, DeclarationNode, EnumDecl, IgnoredKind,
};
use tracing::debug;
use tree_sitter::Node;

/// Extract class with its direct members
pub fn extract_class(base: &BaseExtractor, node: Node) -> Option<DeclarationNode> {
    let name = base.extract_identifier_name(&node)?;
    let mut class = ClassDecl {
        parents: helpers::extract_base_list(base, &node),
        name,
        ..Default::default()
    };

    if let Some(body) = base.find_body(&node, "declaration_list") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "field_declaration" => class
                    .fields
                    .push(members::extract_member_text(base, member)),
                "property_declaration" => class
                    .properties
                    .push(members::extract_member_text(base, member)),
                "event_field_declaration" => class
                    .events
                    .push(members::extract_member_text(base, member)),
                "method_declaration" => match members::extract_method(base, member) {
                    Some(method) => class.methods.push(method),
                    None => debug!(
                        "Skipping malformed method in {} at line {}",
                        class.name,
                        member.start_position().row + 1
                    ),
                },
                _ => {}
            }
        }
    }

    Some(DeclarationNode::Class(class))
}

/// Extract enum with its member names; explicit values are dropped
pub fn extract_enum(base: &BaseExtractor, node: Node) -> Option<DeclarationNode> {
    let name = base.extract_identifier_name(&node)?;

    let constants = base
        .find_body(&node, "enum_member_declaration_list")
        .map(|body| {
            base.find_children_by_type(&body, "enum_member_declaration")
                .iter()
                .filter_map(|member| base.extract_identifier_name(member))
                .collect()
        })
        .unwrap_or_default();

    Some(DeclarationNode::Enum(EnumDecl { name, constants }))
}

/// Recognized-but-unrecorded declaration
pub fn extract_ignored(base: &BaseExtractor, node: Node, kind: IgnoredKind) -> DeclarationNode {
    DeclarationNode::Ignored {
        kind,
        name: base.extract_identifier_name(&node),
    }
}
