// C# Method Signature Normalization
//
// Turns a MethodDecl into a one-line `public void Foo(int x);` rendering:
// attributes, constraint clauses, body and leading comments are removed, the
// remaining tokens are re-joined with canonical spacing.

use crate::extractors::base::{MethodBody, MethodDecl};
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that replaces the body of every normalized method
pub const TERMINATOR: &str = ";";

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        (?P<comment>//[^\n]*|/\*(?s:.*?)\*/)
        | (?P<literal>
            \$?@"(?:[^"]|"")*"
          | @?\$?"(?:[^"\\\n]|\\.)*"
          | '(?:[^'\\\n]|\\.)*'
          | [0-9](?:[eE][+-][0-9]|[\p{L}\p{N}_.])*
          )
        | (?P<word>@?[\p{L}_][\p{L}\p{N}_]*)
        | (?P<punct>::|=>|==|!=|&&|\|\||\?\?|\S)
        "#,
    )
    .expect("signature token pattern is valid")
});

/// Keywords after which `(` and `<` keep their space (`public (int, int) F()`)
const SPACED_KEYWORDS: &[&str] = &[
    "abstract", "async", "const", "extern", "file", "in", "internal", "new", "out", "override",
    "params", "partial", "private", "protected", "public", "readonly", "ref", "required",
    "scoped", "sealed", "static", "this", "unsafe", "virtual", "volatile",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Word,
    Literal,
    Punct,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    kind: TokenKind,
}

impl MethodDecl {
    pub fn without_attributes(mut self) -> Self {
        self.attributes.clear();
        self
    }

    pub fn without_constraints(mut self) -> Self {
        self.constraints.clear();
        self
    }

    pub fn without_body(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn without_leading_trivia(mut self) -> Self {
        self.leading_trivia.clear();
        self
    }

    /// Source-order rendering of whatever parts are still present
    pub fn to_source(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(self.leading_trivia.iter().map(String::as_str));
        parts.extend(self.attributes.iter().map(String::as_str));
        parts.extend(self.modifiers.iter().map(String::as_str));
        parts.push(&self.return_type);

        let mut head = self.name.clone();
        if let Some(type_parameters) = &self.type_parameters {
            head.push_str(type_parameters);
        }
        head.push_str(&self.parameters);

        let mut rendered = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !rendered.is_empty() {
            rendered.push(' ');
        }
        rendered.push_str(&head);

        for constraint in &self.constraints {
            rendered.push(' ');
            rendered.push_str(constraint);
        }

        match &self.body {
            Some(MethodBody::Block(block)) => {
                rendered.push(' ');
                rendered.push_str(block);
            }
            Some(MethodBody::Expression(expression)) => {
                rendered.push(' ');
                rendered.push_str(expression);
                rendered.push_str(TERMINATOR);
            }
            None => rendered.push_str(TERMINATOR),
        }

        rendered
    }
}

/// Normalize a method declaration to its single-line signature
pub fn normalize_method(method: &MethodDecl) -> String {
    let stripped = method
        .clone()
        .without_attributes()
        .without_constraints()
        .without_body()
        .without_leading_trivia();

    normalize_whitespace(&stripped.to_source())
}

/// Canonical single-spaced rendering of C# declaration text; comments are dropped
pub fn normalize_whitespace(text: &str) -> String {
    let tokens = tokenize(text);
    let mut out = String::with_capacity(text.len());
    let mut prev_unary = false;

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && needs_space(&tokens, i, prev_unary) {
            out.push(' ');
        }

        prev_unary = is_unary(*token, i.checked_sub(1).map(|p| tokens[p]));
        out.push_str(token.text);
    }

    out
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| {
            if caps.name("comment").is_some() {
                None
            } else if let Some(m) = caps.name("literal") {
                Some(Token {
                    text: m.as_str(),
                    kind: TokenKind::Literal,
                })
            } else if let Some(m) = caps.name("word") {
                Some(Token {
                    text: m.as_str(),
                    kind: TokenKind::Word,
                })
            } else {
                caps.name("punct").map(|m| Token {
                    text: m.as_str(),
                    kind: TokenKind::Punct,
                })
            }
        })
        .collect()
}

fn is_type_like(token: Token) -> bool {
    token.kind == TokenKind::Word && !SPACED_KEYWORDS.contains(&token.text)
}

fn is_unary(token: Token, prev: Option<Token>) -> bool {
    if !matches!(token.text, "-" | "+" | "!" | "~") {
        return false;
    }
    match prev {
        None => true,
        Some(p) => p.kind == TokenKind::Punct && matches!(p.text, "=" | "(" | "," | "[" | ":"),
    }
}

/// Keywords that can follow a conditional `?` but never a nullable one
const VALUE_KEYWORDS: &[&str] = &[
    "default", "false", "nameof", "new", "null", "sizeof", "this", "true", "typeof",
];

/// Tokens after which `new` starts a value, not a modifier
fn starts_value(token: Token) -> bool {
    token.kind == TokenKind::Punct && matches!(token.text, "=" | "(" | "," | "[" | "?" | ":")
}

/// Whether a `?` is a nullable suffix rather than the conditional operator
fn is_nullable_suffix(after: Option<Token>) -> bool {
    match after {
        None => true,
        Some(t) => match t.kind {
            TokenKind::Word => !VALUE_KEYWORDS.contains(&t.text),
            TokenKind::Literal => false,
            TokenKind::Punct => matches!(t.text, "," | ")" | ">" | "[" | "]" | ";" | "*" | "?"),
        },
    }
}

fn needs_space(tokens: &[Token], i: usize, prev_unary: bool) -> bool {
    let prev = tokens[i - 1];
    let next = tokens[i];

    if prev_unary {
        return false;
    }
    if prev.kind == TokenKind::Punct && matches!(prev.text, "(" | "[" | "<" | "." | "::") {
        return false;
    }
    if next.kind != TokenKind::Punct {
        return true;
    }

    match next.text {
        "," | ")" | "]" | ";" | "." | "::" | ">" => false,
        // nullable suffix hugs its type; a conditional `?` does not
        "?" => {
            let hugs = is_type_like(prev) || matches!(prev.text, ">" | "]" | ")");
            !(hugs && is_nullable_suffix(tokens.get(i + 1).copied()))
        }
        "*" => !(is_type_like(prev) || matches!(prev.text, ">" | "]" | ")")),
        // target-typed `new()` in a default value or a constraint
        "(" if prev.text == "new" => !(i >= 2 && starts_value(tokens[i - 2])),
        "(" | "<" => !(is_type_like(prev) || prev.text == ">"),
        "[" => !(is_type_like(prev) || matches!(prev.text, ">" | "]" | "?")),
        _ => true,
    }
}
