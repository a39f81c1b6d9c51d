// BaseExtractor implementation for ParserDoc
//
// Owns the source text of one input and answers text-level questions
// about tree-sitter nodes. Language adapters hold one of these.

use tracing::debug;
use tree_sitter::Node;

/// Base implementation for language extractors
pub struct BaseExtractor {
    pub language: String,
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: String, file_path: String, content: String) -> Self {
        debug!("BaseExtractor created for {} ({})", file_path, language);

        Self {
            language,
            file_path,
            content,
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Collect the comments directly preceding a node (its leading trivia)
    ///
    /// Walks previous siblings while they are comments, so a blank `//` line
    /// separated by code is not picked up. Returned top to bottom.
    pub fn find_leading_comments(&self, node: &Node) -> Vec<String> {
        let mut comments = Vec::new();

        let mut current = node.prev_sibling();
        while let Some(sibling) = current {
            if !Self::is_comment(&sibling) {
                break;
            }
            comments.push(self.get_node_text(&sibling));
            current = sibling.prev_sibling();
        }

        // Reverse to get source order (top to bottom)
        comments.reverse();
        comments
    }

    /// Name of a declaration node, from the `name` field or its first identifier child
    pub fn extract_identifier_name(&self, node: &Node) -> Option<String> {
        if let Some(name_node) = node.child_by_field_name("name") {
            return Some(self.get_node_text(&name_node));
        }

        self.find_child_by_type(node, "identifier")
            .map(|identifier| self.get_node_text(&identifier))
    }

    pub fn is_comment(node: &Node) -> bool {
        node.kind() == "comment"
    }
}
