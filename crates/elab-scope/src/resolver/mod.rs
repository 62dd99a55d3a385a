//! Name resolution against the scope stack.
//!
//! A [`Resolver`] borrows the global symbol table, the scope stack and the
//! alias table, and never mutates any of them. Commands create one per
//! resolution step and drop it before they touch the scope stack.

mod ambiguity;

pub use ambiguity::{resolve_in_namespaces, NamespaceRef};

use crate::alias::AliasTable;
use crate::ast::Ident;
use crate::env::GlobalSymbolTable;
use crate::error::ScopeError;
use crate::name::Name;
use crate::scope::{OpenDecl, ScopeStack};
use crate::Result;

/// Read-only resolution primitives over one elaboration session's state.
pub struct Resolver<'a, T: GlobalSymbolTable + ?Sized> {
    env: &'a T,
    scopes: &'a ScopeStack,
    aliases: &'a AliasTable,
}

impl<'a, T: GlobalSymbolTable + ?Sized> Resolver<'a, T> {
    pub fn new(env: &'a T, scopes: &'a ScopeStack, aliases: &'a AliasTable) -> Self {
        Self { env, scopes, aliases }
    }

    /// The global name `name` denotes, if a declaration or alias has exactly that name.
    fn lookup(&self, name: &Name) -> Option<Name> {
        if self.env.contains(name) {
            Some(name.clone())
        } else {
            self.aliases.get(name).cloned()
        }
    }

    /// Resolve `namespace ++ id` exactly, with no fallback.
    pub fn resolve_qualified(&self, namespace: &Name, id: &Ident) -> Result<Name> {
        let candidate = namespace.append(&id.name);
        self.lookup(&candidate)
            .ok_or(ScopeError::UnknownIdentifier {
                name: candidate,
                span: id.span,
            })
    }

    /// Resolve `id` relative to `namespace`.
    ///
    /// An exact `namespace ++ id` always wins. Otherwise `id` is resolved
    /// against the ambient open context, as [`resolve`](Self::resolve) does.
    pub fn resolve_id(&self, namespace: &Name, id: &Ident) -> Result<Name> {
        if let Some(found) = self.lookup(&namespace.append(&id.name)) {
            log::trace!("`{}` found directly in `{}`", id.name, namespace);
            return Ok(found);
        }
        self.resolve(id)
    }

    /// Resolve a bare identifier from the current scope.
    ///
    /// Enclosing namespaces are tried innermost first, then explicit opens,
    /// then every simple open namespace and the root together through
    /// [`resolve_in_namespaces`].
    pub fn resolve(&self, id: &Ident) -> Result<Name> {
        let current = self.scopes.current_namespace();
        for prefix in current.prefixes().filter(|p| !p.is_anonymous()) {
            if let Some(found) = self.lookup(&prefix.append(&id.name)) {
                log::trace!("`{}` resolved through enclosing namespace `{}`", id.name, prefix);
                return Ok(found);
            }
        }

        if let Some(target) = self.explicit_target(&id.name) {
            log::trace!("`{}` resolved through explicit open to `{}`", id.name, target);
            return Ok(target);
        }

        let candidates = self.open_namespaces(id);
        resolve_in_namespaces(&id.name, id.span, &candidates, |ns| {
            self.resolve_qualified(&ns.name, id)
        })
    }

    fn explicit_target(&self, id: &Name) -> Option<Name> {
        self.scopes.open_decls().find_map(|decl| match decl {
            OpenDecl::Explicit { alias, target } if alias == id => Some(target.clone()),
            _ => None,
        })
    }

    /// Simple open namespaces not hiding `id`, innermost first, then the root.
    ///
    /// Each namespace carries the span of the `open` that brought it in. The
    /// root was never opened and carries the span of `id`.
    fn open_namespaces(&self, id: &Ident) -> Vec<NamespaceRef> {
        let mut namespaces: Vec<NamespaceRef> = Vec::new();
        let opened = self.scopes.open_decls().filter_map(|decl| match decl {
            OpenDecl::Simple { namespace, except, span } if !except.contains(&id.name) => {
                Some((namespace.clone(), *span))
            }
            _ => None,
        });
        for (namespace, span) in opened.chain(std::iter::once((Name::anonymous(), id.span))) {
            if namespaces.iter().all(|ns| ns.name != namespace) {
                namespaces.push(NamespaceRef::new(namespace, span));
            }
        }
        namespaces
    }

    /// Every namespace `name` can denote from the current scope.
    ///
    /// If `name` is a namespace under an enclosing namespace (innermost first,
    /// root last), that one alone is returned. Otherwise every match under a
    /// simple open namespace is, innermost first.
    pub fn resolve_namespace(&self, name: &Ident) -> Vec<Name> {
        let exact = self
            .scopes
            .current_namespace()
            .prefixes()
            .map(|prefix| prefix.append(&name.name))
            .find(|candidate| self.env.is_namespace(candidate));
        if let Some(exact) = exact {
            log::trace!("namespace `{}` found as `{}`", name.name, exact);
            return vec![exact];
        }

        let mut found: Vec<Name> = Vec::new();
        for decl in self.scopes.open_decls() {
            if let OpenDecl::Simple { namespace, except, .. } = decl {
                if except.contains(&name.name) {
                    continue;
                }
                let candidate = namespace.append(&name.name);
                if self.env.is_namespace(&candidate) && !found.contains(&candidate) {
                    found.push(candidate);
                }
            }
        }
        found
    }

    /// Resolve `name` to exactly one namespace.
    pub fn resolve_unique_namespace(&self, name: &Ident) -> Result<Name> {
        let mut found = self.resolve_namespace(name);
        match found.len() {
            0 => Err(ScopeError::UnknownNamespace {
                name: name.name.clone(),
                span: name.span,
            }),
            1 => Ok(found.remove(0)),
            _ => Err(ScopeError::AmbiguousNamespace {
                name: name.name.clone(),
                span: name.span,
                candidates: found,
            }),
        }
    }
}
