//! Arena-backed syntax tree for Java compilation units.
//!
//! Trees are produced by a front end (or assembled with [`TreeBuilder`] in
//! tests) and consumed read-only by rules. Nodes are addressed by copyable
//! [`NodeId`]s; parent links are back-references for navigation and own
//! nothing.

use crate::resolve::{ClassId, TypeResolution};

/// Identifies a node within one [`SyntaxTree`].
///
/// Ids are only meaningful for the tree that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

/// Kind tag of a syntax node.
///
/// The set covers the declarations and references the built-in rules look
/// at, plus the structural containers that give name references their
/// grammatical depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a single source file.
    CompilationUnit,
    /// One `import` statement; the image is the dotted import path.
    ImportDeclaration,
    /// Class, interface or enum declaration; the image is the simple name.
    TypeDeclaration,
    /// `extends` clause; children are [`NodeKind::TypeReference`]s.
    ExtendsList,
    /// `implements` clause; children are [`NodeKind::TypeReference`]s.
    ImplementsList,
    /// A type mentioned in an extends or implements clause; the image is
    /// the type text as written in source.
    TypeReference,
    /// Body of a type declaration.
    ClassBody,
    /// Method declaration; the image is the method name.
    MethodDeclaration,
    /// Constructor declaration; the image is the constructor name.
    ConstructorDeclaration,
    /// `throws` clause; children are [`NodeKind::NameReference`]s.
    ThrowsList,
    /// Formal parameter list.
    ParameterList,
    /// A single formal parameter.
    Parameter,
    /// A statement block.
    Block,
    /// A local variable declaration inside a block.
    LocalVariableDeclaration,
    /// An identifier occurrence; the image is the raw lexeme, qualifiers
    /// included.
    NameReference,
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    image: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    line: usize,
    column: usize,
    offset: usize,
    length: usize,
    resolved: Option<ClassId>,
}

/// One parsed compilation unit.
///
/// Navigation is id-based: accessors take the [`NodeId`]s this tree
/// produced and panic on ids from another tree only if the index happens
/// to be out of range, so ids must not be mixed across trees.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Root node, always a [`NodeKind::CompilationUnit`].
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Kind of `node`.
    #[must_use]
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes[node.index()].kind
    }

    /// Raw image of `node`, if it carries one.
    #[must_use]
    pub fn image(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.index()].image.as_deref()
    }

    /// Whether the image of `node` equals `text` exactly.
    ///
    /// Nodes without an image never match.
    #[must_use]
    pub fn has_image(&self, node: NodeId, text: &str) -> bool {
        self.image(node) == Some(text)
    }

    /// Parent of `node`, `None` for the root.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    /// Parent of the parent of `node`.
    #[must_use]
    pub fn grandparent(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node).and_then(|parent| self.parent(parent))
    }

    /// Direct children of `node` in document order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.index()].children
    }

    /// First direct child of `node`, if any.
    #[must_use]
    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).first().copied()
    }

    /// 1-based source line of `node`.
    #[must_use]
    pub fn line(&self, node: NodeId) -> usize {
        self.nodes[node.index()].line
    }

    /// 1-based source column of `node`.
    #[must_use]
    pub fn column(&self, node: NodeId) -> usize {
        self.nodes[node.index()].column
    }

    /// Byte offset of the source text of `node`.
    ///
    /// Zero until a front end records the span.
    #[must_use]
    pub fn offset(&self, node: NodeId) -> usize {
        self.nodes[node.index()].offset
    }

    /// Byte length of the source text of `node`.
    #[must_use]
    pub fn length(&self, node: NodeId) -> usize {
        self.nodes[node.index()].length
    }

    /// Resolution state of `node`.
    ///
    /// Only type references ever carry a [`TypeResolution::Resolved`]
    /// marker; for every other kind this returns
    /// [`TypeResolution::Unresolved`].
    #[must_use]
    pub fn resolution(&self, node: NodeId) -> TypeResolution {
        match self.nodes[node.index()].resolved {
            Some(class) => TypeResolution::Resolved(class),
            None => TypeResolution::Unresolved,
        }
    }

    /// First descendant of `from` with the given kind, in document order.
    ///
    /// The search is depth-first and may surface a node from a nested
    /// declaration; callers that need a direct clause must check the
    /// parent of the result.
    #[must_use]
    pub fn find_first_descendant(&self, from: NodeId, kind: NodeKind) -> Option<NodeId> {
        for &child in self.children(from) {
            if self.kind(child) == kind {
                return Some(child);
            }
            if let Some(found) = self.find_first_descendant(child, kind) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant of `from` with the given kind, in document order.
    ///
    /// `from` itself is not considered.
    #[must_use]
    pub fn descendants_of_kind(&self, from: NodeId, kind: NodeKind) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_descendants(from, kind, &mut found);
        found
    }

    fn collect_descendants(&self, from: NodeId, kind: NodeKind, found: &mut Vec<NodeId>) {
        for &child in self.children(from) {
            if self.kind(child) == kind {
                found.push(child);
            }
            self.collect_descendants(child, kind, found);
        }
    }
}

/// Incremental constructor for [`SyntaxTree`]s.
///
/// Front ends append nodes in document order; tests use it to assemble
/// fixture units directly. The compilation-unit root exists from the
/// start.
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    /// Starts a tree holding only its [`NodeKind::CompilationUnit`] root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::CompilationUnit,
                image: None,
                parent: None,
                children: Vec::new(),
                line: 1,
                column: 1,
                offset: 0,
                length: 0,
                resolved: None,
            }],
        }
    }

    /// Root id of the tree under construction.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a child of `parent` without an image.
    pub fn node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        self.push(parent, kind, None)
    }

    /// Appends a child of `parent` carrying a raw image.
    pub fn named_node(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        image: impl Into<String>,
    ) -> NodeId {
        self.push(parent, kind, Some(image.into()))
    }

    /// Sets the 1-based source position of `node`.
    pub fn set_position(&mut self, node: NodeId, line: usize, column: usize) {
        let data = &mut self.nodes[node.index()];
        data.line = line;
        data.column = column;
    }

    /// Sets the byte span of `node`.
    pub fn set_span(&mut self, node: NodeId, offset: usize, length: usize) {
        let data = &mut self.nodes[node.index()];
        data.offset = offset;
        data.length = length;
    }

    /// Attaches resolved class metadata to `node`.
    pub fn set_resolution(&mut self, node: NodeId, class: ClassId) {
        self.nodes[node.index()].resolved = Some(class);
    }

    /// Finishes construction.
    #[must_use]
    pub fn build(self) -> SyntaxTree {
        SyntaxTree { nodes: self.nodes }
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind, image: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            image,
            parent: Some(parent),
            children: Vec::new(),
            line: 1,
            column: 1,
            offset: 0,
            length: 0,
            resolved: None,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
