//! Rule flagging `throws Exception` on method and constructor signatures.
//!
//! A signature declaring the generic `Exception` hides which failures a
//! caller actually has to handle. The fix is a specific checked exception
//! or a `RuntimeException` subclass.
//!
//! JUnit 3 forces `setUp`/`tearDown` overrides to keep the inherited
//! `throws Exception` signature, so those two methods are exempt once the
//! compilation unit is recognized as test-framework code: a type that
//! implements `junit.framework.Test` directly (by name or by resolved
//! type), a type whose resolved superclass hierarchy reaches that
//! interface, or any import whose dotted path contains `junit`. The
//! affiliation flag is scoped to the whole unit and latches on first
//! detection.

use javelint_core::{
    walk_tree, ClassId, Location, NodeId, NodeKind, Rule, Severity, Suggestion, SyntaxTree,
    TypeResolution, UnitContext, Violation, Visitor,
};

/// Rule code for signature-declare-throws-exception.
pub const CODE: &str = "JL001";

/// Rule name for signature-declare-throws-exception.
pub const NAME: &str = "signature-declare-throws-exception";

/// Unqualified type name considered too generic for a throws clause.
const BROAD_EXCEPTION: &str = "Exception";

/// Qualified name of the JUnit 3 marker interface.
const TEST_MARKER: &str = "junit.framework.Test";

/// Import-path substring that affiliates a unit with the test framework.
const TEST_IMPORT_TOKEN: &str = "junit";

/// Method names exempt from the check in affiliated units.
const LIFECYCLE_HOOKS: [&str; 2] = ["setUp", "tearDown"];

/// Detects method and constructor signatures declaring `throws Exception`.
#[derive(Debug, Clone)]
pub struct SignatureDeclareThrowsException {
    severity: Severity,
}

impl SignatureDeclareThrowsException {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Default for SignatureDeclareThrowsException {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for SignatureDeclareThrowsException {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids declaring the generic Exception in throws clauses"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &UnitContext<'_>, tree: &SyntaxTree) -> Vec<Violation> {
        let mut visitor = ThrowsVisitor {
            ctx,
            rule: self,
            marker: ctx.types.lookup(TEST_MARKER),
            affiliated: false,
            violations: Vec::new(),
        };
        walk_tree(&mut visitor, tree);
        visitor.violations
    }
}

/// Per-unit traversal state.
///
/// `affiliated` is a monotonic latch shared by every type declaration of
/// the unit: the type-declaration and import hooks may set it, later
/// hooks only read it, and nothing resets it before the walk ends.
struct ThrowsVisitor<'a> {
    ctx: &'a UnitContext<'a>,
    rule: &'a SignatureDeclareThrowsException,
    marker: Option<ClassId>,
    affiliated: bool,
    violations: Vec<Violation>,
}

impl Visitor for ThrowsVisitor<'_> {
    fn visit_type_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        if self.affiliated {
            return;
        }
        if self.implements_test_marker(tree, node) || self.extends_test_hierarchy(tree, node) {
            self.affiliated = true;
        }
    }

    fn visit_import_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        if tree
            .image(node)
            .is_some_and(|path| path.contains(TEST_IMPORT_TOKEN))
        {
            self.affiliated = true;
        }
    }

    fn visit_method_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        let lifecycle = tree
            .image(node)
            .is_some_and(|name| LIFECYCLE_HOOKS.contains(&name));
        if self.affiliated && lifecycle {
            return;
        }
        self.check_exceptions(tree, node);
    }

    fn visit_constructor_declaration(&mut self, tree: &SyntaxTree, node: NodeId) {
        // Constructors get no lifecycle exemption.
        self.check_exceptions(tree, node);
    }
}

impl ThrowsVisitor<'_> {
    /// First affiliation strategy: the declaration's own implements
    /// clause reaches the marker interface. Unresolved entries match by
    /// exact written name; resolved entries match the marker type itself
    /// or a type declaring it directly.
    fn implements_test_marker(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        let Some(list) = tree.find_first_descendant(node, NodeKind::ImplementsList) else {
            return false;
        };
        // The descendant search can surface the clause of a nested type.
        if tree.parent(list) != Some(node) {
            return false;
        }
        for &listed in tree.children(list) {
            match tree.resolution(listed) {
                TypeResolution::Unresolved => {
                    if tree.has_image(listed, TEST_MARKER) {
                        return true;
                    }
                }
                TypeResolution::Resolved(class) => {
                    if self.marker == Some(class) {
                        return true;
                    }
                    if let Some(marker) = self.marker {
                        if self.ctx.types.interfaces(class).contains(&marker) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Second affiliation strategy: the extended type resolves to the
    /// marker itself, or some class on its superclass chain declares it.
    /// Unresolved extends clauses never match; the chain stops at the
    /// universal root, whose interfaces are not examined.
    fn extends_test_hierarchy(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        let Some(first) = tree.first_child(node) else {
            return false;
        };
        if tree.kind(first) != NodeKind::ExtendsList {
            return false;
        }
        let Some(extended) = tree.first_child(first) else {
            return false;
        };
        let TypeResolution::Resolved(class) = tree.resolution(extended) else {
            return false;
        };
        let Some(marker) = self.marker else {
            return false;
        };
        if class == marker {
            return true;
        }
        let mut cursor = Some(class);
        while let Some(current) = cursor {
            if self.ctx.types.is_root(current) {
                break;
            }
            if self.ctx.types.interfaces(current).contains(&marker) {
                return true;
            }
            cursor = self.ctx.types.superclass(current);
        }
        false
    }

    /// Scans every name reference under `declaration` and reports the
    /// ones sitting directly in its throws clause with the broad image.
    /// Matches are reported one violation each, duplicates included.
    fn check_exceptions(&mut self, tree: &SyntaxTree, declaration: NodeId) {
        for name in tree.descendants_of_kind(declaration, NodeKind::NameReference) {
            if tree.has_image(name, BROAD_EXCEPTION) && tree.grandparent(name) == Some(declaration)
            {
                self.report(tree, name, declaration);
            }
        }
    }

    fn report(&mut self, tree: &SyntaxTree, name: NodeId, declaration: NodeId) {
        let what = match tree.kind(declaration) {
            NodeKind::ConstructorDeclaration => "constructor",
            _ => "method",
        };
        self.violations.push(
            Violation::new(
                CODE,
                NAME,
                self.rule.severity,
                Location::from_node(self.ctx.relative_path.clone(), tree, name),
                format!("{what} signature declares the generic `throws Exception`"),
            )
            .with_suggestion(Suggestion::new(
                "Throw the specific checked exceptions callers must handle, or a RuntimeException subclass",
            )),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelint_core::{TreeBuilder, TypeIndex};
    use std::path::Path;

    /// Adds a top-level type declaration with optional clauses, returning
    /// `(declaration, body)`. The extends clause lands first so the tree
    /// matches what the grammar produces.
    fn class(
        b: &mut TreeBuilder,
        name: &str,
        extends: Option<&str>,
        implements: &[&str],
    ) -> (NodeId, NodeId) {
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, name);
        if let Some(superty) = extends {
            let list = b.node(decl, NodeKind::ExtendsList);
            b.named_node(list, NodeKind::TypeReference, superty);
        }
        if !implements.is_empty() {
            let list = b.node(decl, NodeKind::ImplementsList);
            for ty in implements {
                b.named_node(list, NodeKind::TypeReference, *ty);
            }
        }
        let body = b.node(decl, NodeKind::ClassBody);
        (decl, body)
    }

    fn callable(
        b: &mut TreeBuilder,
        parent: NodeId,
        kind: NodeKind,
        name: &str,
        throws: &[&str],
    ) -> NodeId {
        let decl = b.named_node(parent, kind, name);
        b.node(decl, NodeKind::ParameterList);
        if !throws.is_empty() {
            let list = b.node(decl, NodeKind::ThrowsList);
            for thrown in throws {
                b.named_node(list, NodeKind::NameReference, *thrown);
            }
        }
        b.node(decl, NodeKind::Block);
        decl
    }

    fn method(b: &mut TreeBuilder, body: NodeId, name: &str, throws: &[&str]) -> NodeId {
        callable(b, body, NodeKind::MethodDeclaration, name, throws)
    }

    fn constructor(b: &mut TreeBuilder, body: NodeId, name: &str, throws: &[&str]) -> NodeId {
        callable(b, body, NodeKind::ConstructorDeclaration, name, throws)
    }

    fn import(b: &mut TreeBuilder, path: &str) {
        let root = b.root();
        b.named_node(root, NodeKind::ImportDeclaration, path);
    }

    fn check_with(tree: &SyntaxTree, types: &TypeIndex) -> Vec<Violation> {
        let ctx = UnitContext::new(Path::new("src/Foo.java"), Path::new("."), types);
        SignatureDeclareThrowsException::new().check(&ctx, tree)
    }

    fn check(tree: &SyntaxTree) -> Vec<Violation> {
        check_with(tree, &TypeIndex::new())
    }

    #[test]
    fn reports_method_declaring_exception() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &[]);
        method(&mut b, body, "bar", &["Exception"]);

        let violations = check(&b.build());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].rule, NAME);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("method signature"));
        assert!(violations[0].suggestion.is_some());
    }

    #[test]
    fn reports_constructor_declaring_exception() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &["Runnable"]);
        constructor(&mut b, body, "Foo", &["Exception"]);

        let violations = check(&b.build());
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("constructor signature"));
    }

    #[test]
    fn clean_signatures_stay_silent() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &[]);
        method(&mut b, body, "bar", &[]);
        method(&mut b, body, "baz", &["IOException"]);

        assert!(check(&b.build()).is_empty());
    }

    #[test]
    fn only_the_exact_unqualified_name_matches() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &[]);
        method(
            &mut b,
            body,
            "bar",
            &["java.lang.Exception", "MyException", "ExceptionHolder", "exception"],
        );

        assert!(check(&b.build()).is_empty());
    }

    #[test]
    fn duplicate_declarations_report_twice() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &[]);
        method(&mut b, body, "bar", &["Exception", "IOException", "Exception"]);

        assert_eq!(check(&b.build()).len(), 2);
    }

    #[test]
    fn names_deeper_or_shallower_than_the_throws_clause_are_ignored() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &[]);
        let decl = b.named_node(body, NodeKind::MethodDeclaration, "bar");
        // Parameter type: three levels below the declaration.
        let params = b.node(decl, NodeKind::ParameterList);
        let param = b.node(params, NodeKind::Parameter);
        b.named_node(param, NodeKind::NameReference, "Exception");
        // Direct child: one level below.
        b.named_node(decl, NodeKind::NameReference, "Exception");
        // Local variable type inside the body.
        let block = b.node(decl, NodeKind::Block);
        let local = b.node(block, NodeKind::LocalVariableDeclaration);
        b.named_node(local, NodeKind::NameReference, "Exception");

        assert!(check(&b.build()).is_empty());
    }

    #[test]
    fn violation_points_at_the_name_node() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &[]);
        let decl = b.named_node(body, NodeKind::MethodDeclaration, "bar");
        let list = b.node(decl, NodeKind::ThrowsList);
        let name = b.named_node(list, NodeKind::NameReference, "Exception");
        b.set_position(name, 41, 58);

        let violations = check(&b.build());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.file, Path::new("src/Foo.java"));
        assert_eq!(violations[0].location.line, 41);
        assert_eq!(violations[0].location.column, 58);
    }

    #[test]
    fn junit_import_suppresses_lifecycle_methods() {
        let mut b = TreeBuilder::new();
        import(&mut b, "junit.framework.TestCase");
        let (_, body) = class(&mut b, "FooTest", Some("TestCase"), &[]);
        method(&mut b, body, "setUp", &["Exception"]);
        method(&mut b, body, "tearDown", &["Exception"]);
        method(&mut b, body, "testSomething", &["Exception"]);

        let violations = check(&b.build());
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("method"));
    }

    #[test]
    fn import_substring_match_is_deliberately_broad() {
        let mut b = TreeBuilder::new();
        import(&mut b, "com.example.junitish.Helper");
        let (_, body) = class(&mut b, "Foo", None, &[]);
        method(&mut b, body, "setUp", &["Exception"]);

        assert!(check(&b.build()).is_empty());
    }

    #[test]
    fn unrelated_imports_do_not_affiliate() {
        let mut b = TreeBuilder::new();
        import(&mut b, "java.util.List");
        import(&mut b, "java.io.IOException");
        let (_, body) = class(&mut b, "Foo", None, &[]);
        method(&mut b, body, "setUp", &["Exception"]);

        assert_eq!(check(&b.build()).len(), 1);
    }

    #[test]
    fn constructors_are_checked_even_in_affiliated_units() {
        let mut b = TreeBuilder::new();
        import(&mut b, "junit.framework.TestCase");
        let (_, body) = class(&mut b, "FooTest", Some("TestCase"), &[]);
        constructor(&mut b, body, "FooTest", &["Exception"]);

        assert_eq!(check(&b.build()).len(), 1);
    }

    #[test]
    fn implements_clause_matches_marker_by_image() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "FooTest", None, &["Serializable", "junit.framework.Test"]);
        method(&mut b, body, "setUp", &["Exception"]);
        method(&mut b, body, "countTestCases", &["Exception"]);

        let violations = check(&b.build());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn implements_image_must_be_fully_qualified() {
        // Unresolved references only match the exact marker text.
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "FooTest", None, &["Test"]);
        method(&mut b, body, "setUp", &["Exception"]);

        assert_eq!(check(&b.build()).len(), 1);
    }

    #[test]
    fn resolved_implements_matches_marker_type() {
        let mut types = TypeIndex::new();
        let marker = types.define("junit.framework.Test");

        let mut b = TreeBuilder::new();
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, "FooTest");
        let list = b.node(decl, NodeKind::ImplementsList);
        // Written as the short name; resolution is what matches here.
        let listed = b.named_node(list, NodeKind::TypeReference, "Test");
        b.set_resolution(listed, marker);
        let body = b.node(decl, NodeKind::ClassBody);
        method(&mut b, body, "setUp", &["Exception"]);
        method(&mut b, body, "testIt", &["Exception"]);

        let violations = check_with(&b.build(), &types);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn resolved_implements_matches_interface_declaring_marker() {
        let mut types = TypeIndex::new();
        let marker = types.define("junit.framework.Test");
        let custom = types.define("com.example.CustomTest");
        types.add_interface(custom, marker);

        let mut b = TreeBuilder::new();
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, "FooTest");
        let list = b.node(decl, NodeKind::ImplementsList);
        let listed = b.named_node(list, NodeKind::TypeReference, "CustomTest");
        b.set_resolution(listed, custom);
        let body = b.node(decl, NodeKind::ClassBody);
        method(&mut b, body, "setUp", &["Exception"]);

        assert!(check_with(&b.build(), &types).is_empty());
    }

    #[test]
    fn resolved_implements_without_marker_relation_stays_unaffiliated() {
        let mut types = TypeIndex::new();
        types.define("junit.framework.Test");
        let plain = types.define("java.lang.Runnable");

        let mut b = TreeBuilder::new();
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, "Foo");
        let list = b.node(decl, NodeKind::ImplementsList);
        let listed = b.named_node(list, NodeKind::TypeReference, "Runnable");
        b.set_resolution(listed, plain);
        let body = b.node(decl, NodeKind::ClassBody);
        method(&mut b, body, "setUp", &["Exception"]);

        assert_eq!(check_with(&b.build(), &types).len(), 1);
    }

    #[test]
    fn resolved_extends_chain_reaching_marker_affiliates() {
        let mut types = TypeIndex::new();
        let marker = types.define("junit.framework.Test");
        let test_case = types.define("junit.framework.TestCase");
        types.add_interface(test_case, marker);
        let base = types.define("com.example.BaseTest");
        types.set_superclass(base, Some(test_case));

        let mut b = TreeBuilder::new();
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, "FooTest");
        let list = b.node(decl, NodeKind::ExtendsList);
        let extended = b.named_node(list, NodeKind::TypeReference, "BaseTest");
        b.set_resolution(extended, base);
        let body = b.node(decl, NodeKind::ClassBody);
        method(&mut b, body, "setUp", &["Exception"]);
        method(&mut b, body, "testIt", &["Exception"]);

        let violations = check_with(&b.build(), &types);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn resolved_extends_of_the_marker_itself_affiliates() {
        let mut types = TypeIndex::new();
        let marker = types.define("junit.framework.Test");

        let mut b = TreeBuilder::new();
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, "SuiteLike");
        let list = b.node(decl, NodeKind::ExtendsList);
        let extended = b.named_node(list, NodeKind::TypeReference, "Test");
        b.set_resolution(extended, marker);
        let body = b.node(decl, NodeKind::ClassBody);
        method(&mut b, body, "setUp", &["Exception"]);

        assert!(check_with(&b.build(), &types).is_empty());
    }

    #[test]
    fn unresolved_extends_never_affiliates() {
        // Without resolution the extends scan has nothing to walk, even
        // when the written name looks like a test base class.
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "FooTest", Some("TestCase"), &[]);
        method(&mut b, body, "setUp", &["Exception"]);

        assert_eq!(check(&b.build()).len(), 1);
    }

    #[test]
    fn resolved_extends_outside_the_hierarchy_stays_unaffiliated() {
        let mut types = TypeIndex::new();
        types.define("junit.framework.Test");
        let widget = types.define("com.example.Widget");

        let mut b = TreeBuilder::new();
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, "Foo");
        let list = b.node(decl, NodeKind::ExtendsList);
        let extended = b.named_node(list, NodeKind::TypeReference, "Widget");
        b.set_resolution(extended, widget);
        let body = b.node(decl, NodeKind::ClassBody);
        method(&mut b, body, "setUp", &["Exception"]);

        assert_eq!(check_with(&b.build(), &types).len(), 1);
    }

    #[test]
    fn extends_scan_requires_the_clause_in_first_position() {
        // An implements clause ahead of the extends clause hides the
        // latter from the scan, which only looks at the first child.
        let mut types = TypeIndex::new();
        let marker = types.define("junit.framework.Test");
        let test_case = types.define("junit.framework.TestCase");
        types.add_interface(test_case, marker);

        let mut b = TreeBuilder::new();
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, "FooTest");
        let impls = b.node(decl, NodeKind::ImplementsList);
        b.named_node(impls, NodeKind::TypeReference, "Serializable");
        let ext = b.node(decl, NodeKind::ExtendsList);
        let extended = b.named_node(ext, NodeKind::TypeReference, "TestCase");
        b.set_resolution(extended, test_case);
        let body = b.node(decl, NodeKind::ClassBody);
        method(&mut b, body, "setUp", &["Exception"]);

        assert_eq!(check_with(&b.build(), &types).len(), 1);
    }

    #[test]
    fn nested_implements_clause_does_not_affiliate_the_outer_type() {
        let mut b = TreeBuilder::new();
        let (_, outer_body) = class(&mut b, "Outer", None, &[]);
        // Visited while the unit is still unaffiliated.
        method(&mut b, outer_body, "setUp", &["Exception"]);
        let inner = b.named_node(outer_body, NodeKind::TypeDeclaration, "Inner");
        let list = b.node(inner, NodeKind::ImplementsList);
        b.named_node(list, NodeKind::TypeReference, "junit.framework.Test");
        let inner_body = b.node(inner, NodeKind::ClassBody);
        method(&mut b, inner_body, "setUp", &["Exception"]);

        // The outer scan must not pick up Inner's clause, so Outer's
        // setUp is reported; Inner's own visit then affiliates the unit
        // and its setUp is suppressed.
        let violations = check(&b.build());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn empty_clauses_are_no_match_not_a_fault() {
        let mut b = TreeBuilder::new();
        let root = b.root();
        let decl = b.named_node(root, NodeKind::TypeDeclaration, "Odd");
        b.node(decl, NodeKind::ExtendsList);
        b.node(decl, NodeKind::ImplementsList);
        let body = b.node(decl, NodeKind::ClassBody);
        method(&mut b, body, "setUp", &["Exception"]);
        b.named_node(root, NodeKind::TypeDeclaration, "Childless");

        assert_eq!(check(&b.build()).len(), 1);
    }

    #[test]
    fn affiliation_is_shared_across_sibling_types() {
        let mut b = TreeBuilder::new();
        let (_, first_body) = class(&mut b, "FirstTest", None, &["junit.framework.Test"]);
        method(&mut b, first_body, "run", &["Exception"]);
        let (_, second_body) = class(&mut b, "Second", None, &[]);
        method(&mut b, second_body, "setUp", &["Exception"]);
        method(&mut b, second_body, "work", &["Exception"]);

        // The unit-scoped latch set by FirstTest also exempts Second's
        // setUp; run and work are ordinary methods and stay reported.
        let violations = check(&b.build());
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn lifecycle_methods_before_affiliation_are_reported() {
        let mut b = TreeBuilder::new();
        let (_, first_body) = class(&mut b, "Plain", None, &[]);
        method(&mut b, first_body, "setUp", &["Exception"]);
        class(&mut b, "Affiliating", None, &["junit.framework.Test"]);

        // The latch flips only when the second declaration is visited,
        // after Plain.setUp has already been checked.
        assert_eq!(check(&b.build()).len(), 1);
    }

    #[test]
    fn local_class_signatures_report_once_from_their_own_visit() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &[]);
        let outer = b.named_node(body, NodeKind::MethodDeclaration, "outer");
        let block = b.node(outer, NodeKind::Block);
        let local = b.named_node(block, NodeKind::TypeDeclaration, "Local");
        let local_body = b.node(local, NodeKind::ClassBody);
        method(&mut b, local_body, "inner", &["Exception"]);

        // The inner name is a descendant of `outer` too, but its
        // grandparent is the inner declaration, so only that declaration
        // reports it.
        assert_eq!(check(&b.build()).len(), 1);
    }

    #[test]
    fn fresh_visitor_per_unit_prevents_state_leaks() {
        let rule = SignatureDeclareThrowsException::new();
        let types = TypeIndex::new();
        let ctx = UnitContext::new(Path::new("src/Foo.java"), Path::new("."), &types);

        let mut affiliated = TreeBuilder::new();
        import(&mut affiliated, "junit.framework.TestCase");
        let (_, body) = class(&mut affiliated, "FooTest", None, &[]);
        method(&mut affiliated, body, "setUp", &["Exception"]);
        let affiliated = affiliated.build();

        let mut plain = TreeBuilder::new();
        let (_, body) = class(&mut plain, "Foo", None, &[]);
        method(&mut plain, body, "setUp", &["Exception"]);
        let plain = plain.build();

        assert!(rule.check(&ctx, &affiliated).is_empty());
        // The previous unit's affiliation must not carry over.
        assert_eq!(rule.check(&ctx, &plain).len(), 1);
        assert!(rule.check(&ctx, &affiliated).is_empty());
    }

    #[test]
    fn severity_builder_applies_to_reports() {
        let mut b = TreeBuilder::new();
        let (_, body) = class(&mut b, "Foo", None, &[]);
        method(&mut b, body, "bar", &["Exception"]);
        let tree = b.build();

        let types = TypeIndex::new();
        let ctx = UnitContext::new(Path::new("src/Foo.java"), Path::new("."), &types);
        let rule = SignatureDeclareThrowsException::new().severity(Severity::Warning);
        let violations = rule.check(&ctx, &tree);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(rule.default_severity(), Severity::Warning);
    }
}
