// C# Member Declaration Extraction

use super::helpers;
use crate::extractors::base::{BaseExtractor, MethodBody, MethodDecl};
use tree_sitter::Node;

/// Verbatim text of a field, property or event field declaration
///
/// The node span starts at its first attribute or modifier and ends at its
/// terminator, so preceding doc comments are not included.
pub fn extract_member_text(base: &BaseExtractor, node: Node) -> String {
    base.get_node_text(&node)
}

/// Split a `method_declaration` into its parts
pub fn extract_method(base: &BaseExtractor, node: Node) -> Option<MethodDecl> {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    let param_list_index = children.iter().position(|c| c.kind() == "parameter_list")?;

    // Everything between modifiers and the parameter list that is not a
    // type parameter list: the return type, an optional explicit interface
    // specifier and the name, in that order.
    let head: Vec<&Node> = children[..param_list_index]
        .iter()
        .filter(|c| {
            !matches!(
                c.kind(),
                "attribute_list" | "modifier" | "type_parameter_list" | "comment"
            )
        })
        .collect();

    let name_index = head.iter().rposition(|c| c.kind() == "identifier")?;
    let interface_index = head[..name_index]
        .iter()
        .position(|c| c.kind() == "explicit_interface_specifier");

    let return_end = interface_index.unwrap_or(name_index);
    let return_type = head[..return_end]
        .iter()
        .map(|c| base.get_node_text(c))
        .collect::<Vec<_>>()
        .join(" ");

    let name = head[return_end..=name_index]
        .iter()
        .map(|c| base.get_node_text(c))
        .collect::<String>();

    let body = children.iter().find_map(|c| match c.kind() {
        "block" => Some(MethodBody::Block(base.get_node_text(c))),
        "arrow_expression_clause" => Some(MethodBody::Expression(base.get_node_text(c))),
        _ => None,
    });

    Some(MethodDecl {
        leading_trivia: base.find_leading_comments(&node),
        attributes: helpers::extract_attributes(base, &node),
        modifiers: helpers::extract_modifiers(base, &node),
        return_type,
        name,
        type_parameters: helpers::extract_type_parameters(base, &node),
        parameters: base.get_node_text(&children[param_list_index]),
        constraints: helpers::extract_constraint_clauses(base, &node),
        body,
    })
}
