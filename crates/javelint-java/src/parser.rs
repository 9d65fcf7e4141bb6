//! Java CST lowering using Tree-sitter.

use javelint_core::{NodeId, NodeKind, SyntaxTree, TreeBuilder};
use thiserror::Error;
use tree_sitter::{Language, Node, Parser};

/// Errors from the Java front end.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The bundled grammar was rejected by the Tree-sitter runtime.
    #[error("Failed to load the Java grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser returned without producing a tree.
    #[error("Tree-sitter produced no syntax tree")]
    Aborted,
}

/// Parses Java source into the core syntax-tree model.
pub struct JavaParser {
    language: Language,
}

impl JavaParser {
    /// Creates a parser with the bundled Java grammar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    /// Parses one compilation unit.
    ///
    /// Lowering is best-effort: constructs outside the lowered subset,
    /// and anything Tree-sitter marked as an error, are skipped rather
    /// than faulted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Language`] if the grammar cannot be loaded
    /// and [`ParseError::Aborted`] if Tree-sitter gives up entirely.
    pub fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        let cst = parser.parse(source, None).ok_or(ParseError::Aborted)?;

        let mut lowering = Lowering {
            src: source.as_bytes(),
            builder: TreeBuilder::new(),
        };
        let root = lowering.builder.root();
        lowering.lower_children(cst.root_node(), root);
        Ok(lowering.builder.build())
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

struct Lowering<'s> {
    src: &'s [u8],
    builder: TreeBuilder,
}

impl Lowering<'_> {
    fn text(&self, node: Node<'_>) -> &str {
        std::str::from_utf8(&self.src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn locate(&mut self, id: NodeId, node: Node<'_>) {
        let point = node.start_position();
        self.builder.set_position(id, point.row + 1, point.column + 1);
        self.builder
            .set_span(id, node.start_byte(), node.end_byte() - node.start_byte());
    }

    /// Lowers every recognizable construct among `node`'s children into
    /// children of `parent`.
    fn lower_children(&mut self, node: Node<'_>, parent: NodeId) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.lower_node(child, parent);
        }
    }

    fn lower_node(&mut self, node: Node<'_>, parent: NodeId) {
        match node.kind() {
            "import_declaration" => self.lower_import(node, parent),
            "class_declaration" | "interface_declaration" | "enum_declaration" => {
                self.lower_type_declaration(node, parent);
            }
            "method_declaration" => self.lower_callable(node, parent, NodeKind::MethodDeclaration),
            "constructor_declaration" => {
                self.lower_callable(node, parent, NodeKind::ConstructorDeclaration);
            }
            "local_variable_declaration" => self.lower_local_variable(node, parent),
            "block" => self.lower_block(node, parent),
            // Methods of an enum live behind this wrapper.
            "enum_body_declarations" => self.lower_children(node, parent),
            _ => {}
        }
    }

    fn lower_import(&mut self, node: Node<'_>, parent: NodeId) {
        let mut path = None;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if matches!(child.kind(), "scoped_identifier" | "identifier") {
                path = Some(self.text(child).to_owned());
            }
        }
        let import =
            self.builder
                .named_node(parent, NodeKind::ImportDeclaration, path.unwrap_or_default());
        self.locate(import, node);
    }

    fn lower_type_declaration(&mut self, node: Node<'_>, parent: NodeId) {
        let name = node
            .child_by_field_name("name")
            .map(|child| self.text(child).to_owned())
            .unwrap_or_default();
        let decl = self.builder.named_node(parent, NodeKind::TypeDeclaration, name);
        self.locate(decl, node);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                // `extends_interfaces` is the interface form of the clause
                // and may list several types.
                "superclass" | "extends_interfaces" => {
                    self.lower_clause(child, decl, NodeKind::ExtendsList);
                }
                "super_interfaces" => {
                    self.lower_clause(child, decl, NodeKind::ImplementsList);
                }
                "class_body" | "interface_body" | "enum_body" => {
                    let body = self.builder.node(decl, NodeKind::ClassBody);
                    self.locate(body, child);
                    self.lower_children(child, body);
                }
                _ => {}
            }
        }
    }

    fn lower_clause(&mut self, node: Node<'_>, decl: NodeId, kind: NodeKind) {
        let list = self.builder.node(decl, kind);
        self.locate(list, node);
        self.lower_type_refs(node, list);
    }

    /// Adds a type reference for every type under `node`, which is either
    /// a clause wrapping a `type_list` or the list itself.
    fn lower_type_refs(&mut self, node: Node<'_>, list: NodeId) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "type_list" {
                self.lower_type_refs(child, list);
            } else if is_type_node(child.kind()) {
                let image = self.text(child).to_owned();
                let reference = self.builder.named_node(list, NodeKind::TypeReference, image);
                self.locate(reference, child);
            }
        }
    }

    fn lower_callable(&mut self, node: Node<'_>, parent: NodeId, kind: NodeKind) {
        let name = node
            .child_by_field_name("name")
            .map(|child| self.text(child).to_owned())
            .unwrap_or_default();
        let decl = self.builder.named_node(parent, kind, name);
        self.locate(decl, node);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "formal_parameters" => self.lower_parameters(child, decl),
                "throws" => self.lower_throws(child, decl),
                "block" | "constructor_body" => self.lower_block(child, decl),
                _ => {}
            }
        }
    }

    /// A `throws` clause becomes a list whose name references sit exactly
    /// two levels below the declaration, the depth the signature rules
    /// anchor on.
    fn lower_throws(&mut self, node: Node<'_>, decl: NodeId) {
        let list = self.builder.node(decl, NodeKind::ThrowsList);
        self.locate(list, node);
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if is_type_node(child.kind()) {
                let image = self.text(child).to_owned();
                let name = self.builder.named_node(list, NodeKind::NameReference, image);
                self.locate(name, child);
            }
        }
    }

    fn lower_parameters(&mut self, node: Node<'_>, decl: NodeId) {
        let list = self.builder.node(decl, NodeKind::ParameterList);
        self.locate(list, node);
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if matches!(child.kind(), "formal_parameter" | "spread_parameter") {
                let parameter = self.builder.node(list, NodeKind::Parameter);
                self.locate(parameter, child);
                if let Some(ty) = child.child_by_field_name("type") {
                    let image = self.text(ty).to_owned();
                    let name = self.builder.named_node(parameter, NodeKind::NameReference, image);
                    self.locate(name, ty);
                }
            }
        }
    }

    fn lower_block(&mut self, node: Node<'_>, parent: NodeId) {
        let block = self.builder.node(parent, NodeKind::Block);
        self.locate(block, node);
        self.lower_children(node, block);
    }

    fn lower_local_variable(&mut self, node: Node<'_>, parent: NodeId) {
        let local = self.builder.node(parent, NodeKind::LocalVariableDeclaration);
        self.locate(local, node);
        if let Some(ty) = node.child_by_field_name("type") {
            let image = self.text(ty).to_owned();
            let name = self.builder.named_node(local, NodeKind::NameReference, image);
            self.locate(name, ty);
        }
    }
}

fn is_type_node(kind: &str) -> bool {
    matches!(
        kind,
        "type_identifier" | "scoped_type_identifier" | "generic_type"
    )
}
