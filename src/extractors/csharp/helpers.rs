// C# Helper Methods
//
// Utility functions for reading C# declaration nodes

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Extract base list entries (base class and interfaces, undistinguished)
///
/// Only the type is kept: `class D(int x) : B(x), IFoo` yields `["B", "IFoo"]`.
pub fn extract_base_list(base: &BaseExtractor, node: &Node) -> Vec<String> {
    let Some(base_list) = base.find_child_by_type(node, "base_list") else {
        return Vec::new();
    };

    let mut cursor = base_list.walk();
    let parents = base_list
        .named_children(&mut cursor)
        .filter(|c| !BaseExtractor::is_comment(c) && c.kind() != "argument_list")
        .map(|c| {
            if c.kind() == "primary_constructor_base_type" {
                let type_node = c.child_by_field_name("type").or_else(|| c.named_child(0));
                type_node
                    .map(|t| base.get_node_text(&t))
                    .unwrap_or_else(|| base.get_node_text(&c))
            } else {
                base.get_node_text(&c)
            }
        })
        .collect();
    parents
}

/// Extract attribute lists (`[Obsolete]`) in source order
pub fn extract_attributes(base: &BaseExtractor, node: &Node) -> Vec<String> {
    base.find_children_by_type(node, "attribute_list")
        .iter()
        .map(|attr| base.get_node_text(attr))
        .collect()
}

/// Extract modifiers (`public`, `static`, ...) in source order
pub fn extract_modifiers(base: &BaseExtractor, node: &Node) -> Vec<String> {
    base.find_children_by_type(node, "modifier")
        .iter()
        .map(|modifier| base.get_node_text(modifier))
        .collect()
}

/// Extract type parameters (generic type parameters like <T, U>)
pub fn extract_type_parameters(base: &BaseExtractor, node: &Node) -> Option<String> {
    base.find_child_by_type(node, "type_parameter_list")
        .map(|tp| base.get_node_text(&tp))
}

/// Extract `where` clauses
pub fn extract_constraint_clauses(base: &BaseExtractor, node: &Node) -> Vec<String> {
    base.find_children_by_type(node, "type_parameter_constraints_clause")
        .iter()
        .map(|clause| base.get_node_text(clause))
        .collect()
}
