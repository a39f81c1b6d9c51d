// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Walk tree with visitor, pre-order, children in source order
    #[allow(clippy::only_used_in_recursion)] // &self used in recursive calls
    pub fn walk_tree<'a, F>(&self, node: &Node<'a>, visitor: &mut F, depth: u32)
    where
        F: FnMut(&Node<'a>, u32),
    {
        visitor(node, depth);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk_tree(&child, visitor, depth + 1);
        }
    }

    /// Check if node has error
    pub fn has_error(&self, node: &Node) -> bool {
        node.has_error() || node.kind() == "ERROR"
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child.kind() == child_type);
        found
    }

    /// Find children by type
    pub fn find_children_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Vec<Node<'a>> {
        let mut cursor = node.walk();
        let children = node
            .children(&mut cursor)
            .filter(|child| child.kind() == child_type)
            .collect();
        children
    }

    /// Body of a type declaration (`declaration_list` / `enum_member_declaration_list`)
    pub fn find_body<'a>(&self, node: &Node<'a>, body_type: &str) -> Option<Node<'a>> {
        node.child_by_field_name("body")
            .filter(|body| body.kind() == body_type)
            .or_else(|| self.find_child_by_type(node, body_type))
    }
}
