//! Narrow interface to an external type-resolution facility.
//!
//! A resolver, when one is available, populates a [`TypeIndex`] with the
//! classes it knows about and annotates type-reference nodes with
//! [`ClassId`]s. An index holding only the universal root models the
//! no-resolver case: every reference stays unresolved and rules fall back
//! to name matching.

use std::collections::HashMap;

/// Qualified name of the universal root type.
const ROOT_CLASS: &str = "java.lang.Object";

/// Identifies a class entry within one [`TypeIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(usize);

/// Resolution state of a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeResolution {
    /// The resolver attached a class entry.
    Resolved(ClassId),
    /// No metadata; only the raw image is known.
    Unresolved,
}

#[derive(Debug, Clone)]
struct ClassEntry {
    name: String,
    superclass: Option<ClassId>,
    interfaces: Vec<ClassId>,
}

/// Resolved class metadata for one analysis session.
///
/// Entries form a superclass graph rooted at `java.lang.Object`. A class
/// whose superclass is `None` ends hierarchy walks early, which mirrors a
/// resolver that could not see past that point.
#[derive(Debug, Clone)]
pub struct TypeIndex {
    classes: Vec<ClassEntry>,
    by_name: HashMap<String, ClassId>,
}

impl TypeIndex {
    /// Creates an index holding only `java.lang.Object`.
    #[must_use]
    pub fn new() -> Self {
        let mut index = Self {
            classes: Vec::new(),
            by_name: HashMap::new(),
        };
        index.insert(ROOT_CLASS.to_owned(), None, Vec::new());
        index
    }

    /// Id of the universal root type.
    #[must_use]
    pub fn object(&self) -> ClassId {
        ClassId(0)
    }

    /// Adds a class under its qualified name, extending the root.
    ///
    /// Defining a name twice returns the existing entry unchanged.
    pub fn define(&mut self, qualified_name: &str) -> ClassId {
        if let Some(&existing) = self.by_name.get(qualified_name) {
            return existing;
        }
        let root = self.object();
        self.insert(qualified_name.to_owned(), Some(root), Vec::new())
    }

    /// Overrides the superclass of `class`.
    ///
    /// Passing `None` marks the parent as unknown to the resolver.
    pub fn set_superclass(&mut self, class: ClassId, superclass: Option<ClassId>) {
        self.classes[class.0].superclass = superclass;
    }

    /// Records that `class` directly declares `interface`.
    pub fn add_interface(&mut self, class: ClassId, interface: ClassId) {
        self.classes[class.0].interfaces.push(interface);
    }

    /// Looks up a class by qualified name.
    #[must_use]
    pub fn lookup(&self, qualified_name: &str) -> Option<ClassId> {
        self.by_name.get(qualified_name).copied()
    }

    /// Qualified name of `class`.
    #[must_use]
    pub fn qualified_name(&self, class: ClassId) -> &str {
        &self.classes[class.0].name
    }

    /// Superclass of `class`, if the resolver saw one.
    #[must_use]
    pub fn superclass(&self, class: ClassId) -> Option<ClassId> {
        self.classes[class.0].superclass
    }

    /// Interfaces `class` declares directly. Inherited interfaces are not
    /// included.
    #[must_use]
    pub fn interfaces(&self, class: ClassId) -> &[ClassId] {
        &self.classes[class.0].interfaces
    }

    /// Whether `class` is the universal root type.
    #[must_use]
    pub fn is_root(&self, class: ClassId) -> bool {
        class == self.object()
    }

    fn insert(
        &mut self,
        name: String,
        superclass: Option<ClassId>,
        interfaces: Vec<ClassId>,
    ) -> ClassId {
        let id = ClassId(self.classes.len());
        self.by_name.insert(name.clone(), id);
        self.classes.push(ClassEntry {
            name,
            superclass,
            interfaces,
        });
        id
    }
}

impl Default for TypeIndex {
    fn default() -> Self {
        Self::new()
    }
}
