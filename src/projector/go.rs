//! Go projector backed by tree-sitter-go.
//!
//! The file is parsed as a single compilation unit and rejected unless it is
//! a syntactically valid Go file: no error or missing nodes, a leading
//! `package` clause, and only declarations at top level. Every node is then
//! visited in preorder; `type X ...` specs and `type X = Y` aliases become
//! stubs in visit order.

use tree_sitter::{Node, Parser, Tree, TreeCursor};

use crate::error::{AppError, Result};
use crate::models::{Dialect, TypeStub};
use crate::projector::{DeclarationScope, Projector};

/// Named node kinds allowed directly under `source_file`.
const TOP_LEVEL_KINDS: &[&str] = &[
    "package_clause",
    "import_declaration",
    "function_declaration",
    "method_declaration",
    "type_declaration",
    "const_declaration",
    "var_declaration",
    "comment",
];

pub struct GoProjector {
    scope: DeclarationScope,
}

impl GoProjector {
    pub fn new(scope: DeclarationScope) -> Self {
        Self { scope }
    }

    fn parse(&self, source_id: &str, content: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| AppError::Internal(format!("failed to load Go grammar: {}", e)))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| parse_failure(source_id, None, "parser produced no syntax tree"))?;

        check_syntax(source_id, tree.root_node(), content.as_bytes())?;
        Ok(tree)
    }
}

impl Default for GoProjector {
    fn default() -> Self {
        Self::new(DeclarationScope::default())
    }
}

impl Projector for GoProjector {
    fn dialect(&self) -> Dialect {
        Dialect::Go
    }

    fn extract(&self, source_id: &str, content: &str) -> Result<Vec<TypeStub>> {
        let tree = self.parse(source_id, content)?;
        let source = content.as_bytes();

        let mut stubs = Vec::new();
        for node in Preorder::new(tree.root_node()) {
            match GoNode::classify(node) {
                GoNode::TypeDeclaration { name, top_level } => {
                    if self.scope == DeclarationScope::TopLevel && !top_level {
                        continue;
                    }
                    let name = name
                        .utf8_text(source)
                        .map_err(|e| parse_failure(source_id, Some(node), &e.to_string()))?;
                    stubs.push(TypeStub::new(name));
                }
                GoNode::Other => {}
            }
        }

        Ok(stubs)
    }
}

/// Syntax nodes the projector cares about.
enum GoNode<'tree> {
    TypeDeclaration { name: Node<'tree>, top_level: bool },
    Other,
}

impl<'tree> GoNode<'tree> {
    fn classify(node: Node<'tree>) -> Self {
        match node.kind() {
            "type_spec" | "type_alias" => match node.child_by_field_name("name") {
                Some(name) => GoNode::TypeDeclaration {
                    name,
                    top_level: is_top_level(node),
                },
                None => GoNode::Other,
            },
            _ => GoNode::Other,
        }
    }
}

/// A spec is top-level when its `type` declaration sits in the source file.
fn is_top_level(spec: Node<'_>) -> bool {
    spec.parent()
        .filter(|decl| decl.kind() == "type_declaration")
        .and_then(|decl| decl.parent())
        .is_some_and(|parent| parent.kind() == "source_file")
}

/// Depth-first, parent-before-children walk over every node.
struct Preorder<'tree> {
    cursor: TreeCursor<'tree>,
    done: bool,
}

impl<'tree> Preorder<'tree> {
    fn new(root: Node<'tree>) -> Self {
        Self {
            cursor: root.walk(),
            done: false,
        }
    }
}

impl<'tree> Iterator for Preorder<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let node = self.cursor.node();
        if !self.cursor.goto_first_child() {
            loop {
                if self.cursor.goto_next_sibling() {
                    break;
                }
                if !self.cursor.goto_parent() {
                    self.done = true;
                    break;
                }
            }
        }
        Some(node)
    }
}

fn check_syntax(source_id: &str, root: Node<'_>, source: &[u8]) -> Result<()> {
    if root.has_error() {
        let broken = Preorder::new(root).find(|n| n.is_error() || n.is_missing());
        let message = match broken {
            Some(node) if node.is_missing() => format!("missing `{}`", node.kind()),
            Some(node) => format!("unexpected `{}`", snippet(node, source)),
            None => "syntax error".to_string(),
        };
        return Err(parse_failure(source_id, broken, &message));
    }

    let mut cursor = root.walk();
    let mut declarations = root
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .peekable();

    match declarations.peek() {
        Some(first) if first.kind() == "package_clause" => {}
        Some(first) => {
            return Err(parse_failure(
                source_id,
                Some(*first),
                &format!("expected 'package', found `{}`", snippet(*first, source)),
            ));
        }
        None => return Err(parse_failure(source_id, None, "expected 'package', found EOF")),
    }

    if let Some(stray) = declarations.find(|n| !TOP_LEVEL_KINDS.contains(&n.kind())) {
        return Err(parse_failure(
            source_id,
            Some(stray),
            "non-declaration statement outside function body",
        ));
    }

    Ok(())
}

/// First line of a node's text, capped for error messages.
fn snippet(node: Node<'_>, source: &[u8]) -> String {
    let text = node.utf8_text(source).unwrap_or_default();
    let line = text.lines().next().unwrap_or_default().trim();
    line.chars().take(40).collect()
}

fn parse_failure(source_id: &str, node: Option<Node<'_>>, message: &str) -> AppError {
    let (line, column) = node
        .map(|n| (n.start_position().row + 1, n.start_position().column + 1))
        .unwrap_or((1, 1));

    AppError::ParseFailure {
        source_id: source_id.to_string(),
        line,
        column,
        message: message.to_string(),
    }
}
