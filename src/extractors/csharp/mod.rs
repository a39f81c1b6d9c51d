// C# Language Extractor
//
// Adapts a tree-sitter-c-sharp syntax tree into the declaration stream the
// collector consumes:
// - Classes (base list, fields, properties, event fields, methods)
// - Enums (member names)
// - Interfaces, structs, records, delegates and namespaces as ignored nodes

mod helpers;
mod members;
pub mod signatures;
mod types;

use crate::extractors::base::{BaseExtractor, DeclarationNode, IgnoredKind};
use tracing::warn;
use tree_sitter::{Node, Tree};

pub use signatures::{normalize_method, normalize_whitespace};

/// C# extractor using tree-sitter-c-sharp parser
pub struct CSharpExtractor {
    base: BaseExtractor,
}

impl CSharpExtractor {
    /// Create new C# extractor
    pub fn new(language: String, file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(language, file_path, content),
        }
    }

    /// Declaration nodes of the whole tree, pre-order, siblings in source order
    pub fn extract_declarations(&self, tree: &Tree) -> Vec<DeclarationNode> {
        let root = tree.root_node();
        if self.base.has_error(&root) {
            warn!(
                "{} contains syntax errors; extracting what the parser recovered",
                self.base.file_path
            );
        }

        let mut declarations = Vec::new();
        self.base.walk_tree(
            &root,
            &mut |node, _depth| {
                if let Some(declaration) = self.extract_declaration(*node) {
                    declarations.push(declaration);
                }
            },
            0,
        );
        declarations
    }

    fn extract_declaration(&self, node: Node) -> Option<DeclarationNode> {
        let base = &self.base;
        match node.kind() {
            "class_declaration" => types::extract_class(base, node),
            "enum_declaration" => types::extract_enum(base, node),
            "interface_declaration" => {
                Some(types::extract_ignored(base, node, IgnoredKind::Interface))
            }
            "struct_declaration" => Some(types::extract_ignored(base, node, IgnoredKind::Struct)),
            "record_declaration" | "record_struct_declaration" => {
                Some(types::extract_ignored(base, node, IgnoredKind::Record))
            }
            "delegate_declaration" => {
                Some(types::extract_ignored(base, node, IgnoredKind::Delegate))
            }
            "namespace_declaration" | "file_scoped_namespace_declaration" => {
                Some(types::extract_ignored(base, node, IgnoredKind::Namespace))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::{ClassDecl, EnumDecl, MethodBody};
    use crate::extractors::csharp::signatures::TERMINATOR;
    use tree_sitter::Parser;

    fn extract(code: &str) -> Vec<DeclarationNode> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(code, None).unwrap();
        let extractor =
            CSharpExtractor::new("csharp".to_string(), "test.cs".to_string(), code.to_string());
        extractor.extract_declarations(&tree)
    }

    fn classes(nodes: &[DeclarationNode]) -> Vec<&ClassDecl> {
        nodes
            .iter()
            .filter_map(|n| match n {
                DeclarationNode::Class(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    fn enums(nodes: &[DeclarationNode]) -> Vec<&EnumDecl> {
        nodes
            .iter()
            .filter_map(|n| match n {
                DeclarationNode::Enum(e) => Some(e),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_class_with_base_list_and_members() {
        let code = r#"
class Base {}
class Derived : Base, IComparable {
    /// The x
    public int X { get; set; }
    private readonly string _name = "n";
    public event EventHandler Changed;
    public void Run() { Console.WriteLine(1); }
}
"#;
        let nodes = extract(code);
        let classes = classes(&nodes);
        assert_eq!(classes.len(), 2);

        let base = classes[0];
        assert_eq!(base.name, "Base");
        assert!(base.parents.is_empty());
        assert!(base.methods.is_empty());

        let derived = classes[1];
        assert_eq!(derived.name, "Derived");
        assert_eq!(derived.parents, vec!["Base", "IComparable"]);
        assert_eq!(derived.properties, vec!["public int X { get; set; }"]);
        assert_eq!(derived.fields, vec!["private readonly string _name = \"n\";"]);
        assert_eq!(derived.events, vec!["public event EventHandler Changed;"]);
        assert_eq!(derived.methods.len(), 1);

        let run = &derived.methods[0];
        assert_eq!(run.name, "Run");
        assert_eq!(run.return_type, "void");
        assert_eq!(run.modifiers, vec!["public"]);
        assert!(matches!(run.body, Some(MethodBody::Block(_))));
    }

    #[test]
    fn test_method_parts_are_separated() {
        let code = r#"
class Repo {
    // finds things
    [Obsolete]
    public static T Find<T>(string key) where T : class => default;
}
"#;
        let nodes = extract(code);
        let method = &classes(&nodes)[0].methods[0];

        assert_eq!(method.leading_trivia, vec!["// finds things"]);
        assert_eq!(method.attributes, vec!["[Obsolete]"]);
        assert_eq!(method.modifiers, vec!["public", "static"]);
        assert_eq!(method.return_type, "T");
        assert_eq!(method.name, "Find");
        assert_eq!(method.type_parameters.as_deref(), Some("<T>"));
        assert_eq!(method.parameters, "(string key)");
        assert_eq!(method.constraints, vec!["where T : class"]);
        assert!(matches!(method.body, Some(MethodBody::Expression(_))));
        assert_eq!(normalize_method(method), "public static T Find<T>(string key);");
    }

    #[test]
    fn test_explicit_interface_method() {
        let code = "class Res : IDisposable { void IDisposable.Dispose() { } }";
        let nodes = extract(code);
        let method = &classes(&nodes)[0].methods[0];

        assert_eq!(normalize_method(method), "void IDisposable.Dispose();");
    }

    #[test]
    fn test_enum_constants_drop_values() {
        let code = "enum Color { Red = 1, Green, [Description(\"b\")] Blue = Red | Green }";
        let nodes = extract(code);
        let enums = enums(&nodes);

        assert_eq!(enums.len(), 1);
        assert_eq!(enums[0].name, "Color");
        assert_eq!(enums[0].constants, vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_nested_and_namespaced_declarations_are_visited_in_order() {
        let code = r#"
namespace App.Models {
    public class Outer {
        public int A;
        public class Inner { public int B; }
        public enum Mode { On, Off }
    }
    interface IThing {}
    struct Point {}
    delegate void Handler();
}
"#;
        let nodes = extract(code);
        let names: Vec<&str> = nodes.iter().filter_map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec!["App.Models", "Outer", "Inner", "Mode", "IThing", "Point", "Handler"]
        );

        let classes = classes(&nodes);
        assert_eq!(classes[0].fields, vec!["public int A;"]);
        assert_eq!(classes[1].fields, vec!["public int B;"]);

        assert!(nodes.iter().any(|n| matches!(
            n,
            DeclarationNode::Ignored {
                kind: IgnoredKind::Struct,
                ..
            }
        )));
    }

    #[test]
    fn test_constructors_and_custom_events_are_not_members() {
        let code = r#"
class Widget {
    public Widget() {}
    public event EventHandler Clicked { add {} remove {} }
    public int this[int i] => i;
}
"#;
        let nodes = extract(code);
        let widget = classes(&nodes)[0];

        assert!(widget.methods.is_empty());
        assert!(widget.events.is_empty());
        assert!(widget.properties.is_empty());
    }

    #[test]
    fn test_normalized_signature_reparses_to_itself() {
        let declarations = [
            "public static async Task<List<int>> Load<T>(T key, int[,] grid, global::System.String s = \"x\") where T : class { return null; }",
            "protected internal int? Find(string? name, int? limit = null) => null;",
            "private (int count, string name) Pair() { return (1, \"a\"); }",
            "void IDisposable.Dispose() { }",
            "public static string Join(string sep = \", \", params object[] rest) => sep;",
            "[Obsolete] internal bool Check(int x = -1, bool flag = true ? false : true, CancellationToken ct = default) { return true; }",
            "public override string ToString() => \"z\";",
            "public T Make<T>(CancellationToken ct = new()) where T : new() => new T();",
        ];

        for declaration in declarations {
            let first = {
                let nodes = extract(&format!("class Z {{ {} }}", declaration));
                normalize_method(&classes(&nodes)[0].methods[0])
            };
            let second = {
                let nodes = extract(&format!("class Z {{ {} }}", first));
                normalize_method(&classes(&nodes)[0].methods[0])
            };

            assert_eq!(first, second, "signature changed when re-parsed: {}", declaration);
            assert!(first.ends_with(TERMINATOR), "missing terminator: {}", first);
        }
    }

    #[test]
    fn test_syntax_errors_are_tolerated() {
        let code = "enum Ok { A }\nclass Broken { public void M( { } }";
        let nodes = extract(code);

        assert!(enums(&nodes).iter().any(|e| e.name == "Ok"));
    }
}
