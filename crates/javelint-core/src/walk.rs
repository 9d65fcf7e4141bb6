//! Depth-first traversal dispatching nodes to visitor hooks.
//!
//! The walker owns the traversal: hooks observe nodes but cannot skip or
//! abort descent, so every hook sees its nodes in document order exactly
//! once per walk.

use crate::tree::{NodeId, NodeKind, SyntaxTree};

/// Per-unit visitor with a no-op default for every hook.
///
/// Rules implement this on a short-lived struct constructed inside
/// [`Rule::check`](crate::Rule::check), so per-unit state cannot outlive
/// the unit it was accumulated for.
#[allow(unused_variables)]
pub trait Visitor {
    /// Called for every class, interface or enum declaration, nested ones
    /// included.
    fn visit_type_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {}

    /// Called for every import declaration.
    fn visit_import_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {}

    /// Called for every method declaration.
    fn visit_method_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {}

    /// Called for every constructor declaration.
    fn visit_constructor_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {}

    /// Called for every name reference.
    fn visit_name_reference(&mut self, tree: &SyntaxTree, node: NodeId) {}
}

/// Walks `tree` depth-first from the root, dispatching each node to its
/// hook before descending into the node's children.
pub fn walk_tree<V: Visitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree) {
    walk_node(visitor, tree, tree.root());
}

fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, node: NodeId) {
    dispatch(visitor, tree, node);
    for &child in tree.children(node) {
        walk_node(visitor, tree, child);
    }
}

fn dispatch<V: Visitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, node: NodeId) {
    match tree.kind(node) {
        NodeKind::TypeDeclaration => visitor.visit_type_declaration(tree, node),
        NodeKind::ImportDeclaration => visitor.visit_import_declaration(tree, node),
        NodeKind::MethodDeclaration => visitor.visit_method_declaration(tree, node),
        NodeKind::ConstructorDeclaration => visitor.visit_constructor_declaration(tree, node),
        NodeKind::NameReference => visitor.visit_name_reference(tree, node),
        // Structural kinds carry no hook of their own.
        NodeKind::CompilationUnit
        | NodeKind::ExtendsList
        | NodeKind::ImplementsList
        | NodeKind::TypeReference
        | NodeKind::ClassBody
        | NodeKind::ThrowsList
        | NodeKind::ParameterList
        | NodeKind::Parameter
        | NodeKind::Block
        | NodeKind::LocalVariableDeclaration => {}
    }
}
