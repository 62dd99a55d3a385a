//! The global symbol table seen by the scope engine.

use fxhash::FxHashSet;

use crate::name::Name;

/// The external table of declarations and namespaces.
///
/// The scope engine reads it on every resolution and writes to it only when a
/// `namespace`/`section` header introduces a namespace.
pub trait GlobalSymbolTable {
    /// Whether a declaration with exactly this name exists.
    fn contains(&self, name: &Name) -> bool;

    /// Whether `name` is a registered namespace.
    fn is_namespace(&self, name: &Name) -> bool;

    /// Register `name` (and each of its non-root prefixes) as a namespace.
    /// Registering an existing namespace is a no-op.
    fn register_namespace(&mut self, name: &Name);
}

/// An in-memory [`GlobalSymbolTable`].
#[derive(Debug, Clone, Default)]
pub struct Environment {
    decls: FxHashSet<Name>,
    namespaces: FxHashSet<Name>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an environment holding the given declarations.
    pub fn with_decls<I, N>(decls: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
    {
        let mut env = Self::new();
        for decl in decls {
            env.add_decl(decl);
        }
        env
    }

    /// Add a declaration; its enclosing prefixes become namespaces.
    pub fn add_decl(&mut self, name: impl Into<Name>) {
        let name = name.into();
        self.register_namespace(&name.prefix());
        self.decls.insert(name);
    }

}

impl GlobalSymbolTable for Environment {
    fn contains(&self, name: &Name) -> bool {
        self.decls.contains(name)
    }

    fn is_namespace(&self, name: &Name) -> bool {
        self.namespaces.contains(name)
    }

    fn register_namespace(&mut self, name: &Name) {
        for prefix in name.prefixes().filter(|p| !p.is_anonymous()) {
            if !self.namespaces.insert(prefix) {
                // Prefixes of a registered namespace are registered already.
                break;
            }
        }
    }
}
