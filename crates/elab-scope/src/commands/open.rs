//! The `open` command.
//!
//! Every shape appends its open decls left to right as each one is resolved.
//! A failure stops the command but keeps the decls appended before it.

use super::Session;
use crate::ast::{Ident, OpenSyntax, RenamePair};
use crate::env::GlobalSymbolTable;
use crate::error::ScopeError;
use crate::resolver::{resolve_in_namespaces, NamespaceRef};
use crate::scope::OpenDecl;
use crate::Result;

impl<T: GlobalSymbolTable> Session<T> {
    pub fn elab_open(&mut self, decl: &OpenSyntax) -> Result<()> {
        match decl {
            OpenSyntax::Simple(namespaces) => self.open_simple(namespaces),
            OpenSyntax::Only { namespace, ids } => self.open_only(namespace, ids),
            OpenSyntax::Hiding { namespace, ids } => self.open_hiding(namespace, ids),
            OpenSyntax::Renaming { namespace, pairs } => self.open_renaming(namespace, pairs),
            OpenSyntax::Scoped(namespaces) => self.open_scoped(namespaces),
        }
    }

    /// `open A B C`
    pub(crate) fn open_simple(&mut self, namespaces: &[Ident]) -> Result<()> {
        for name in namespaces {
            let namespace = self.resolver().resolve_unique_namespace(name)?;
            self.push_open_decl(OpenDecl::simple(namespace, name.span));
        }
        Ok(())
    }

    /// `open A (x y)`: each listed name becomes an explicit open, so nothing
    /// else from `A` becomes visible.
    fn open_only(&mut self, namespace: &Ident, ids: &[Ident]) -> Result<()> {
        let candidates: Vec<NamespaceRef> = self
            .resolver()
            .resolve_namespace(namespace)
            .into_iter()
            .map(|ns| NamespaceRef::new(ns, namespace.span))
            .collect();
        if candidates.is_empty() {
            return Err(ScopeError::UnknownNamespace {
                name: namespace.name.clone(),
                span: namespace.span,
            });
        }

        for id in ids {
            let target = {
                let resolver = self.resolver();
                resolve_in_namespaces(&id.name, id.span, &candidates, |ns| {
                    resolver.resolve_id(&ns.name, id)
                })?
            };
            self.push_open_decl(OpenDecl::Explicit {
                alias: id.name.clone(),
                target,
            });
        }
        Ok(())
    }

    /// `open A hiding x y`
    fn open_hiding(&mut self, namespace: &Ident, ids: &[Ident]) -> Result<()> {
        let resolved = self.resolver().resolve_unique_namespace(namespace)?;
        {
            let resolver = self.resolver();
            for id in ids {
                resolver.resolve_id(&resolved, id)?;
            }
        }
        self.push_open_decl(OpenDecl::Simple {
            namespace: resolved,
            except: ids.iter().map(|id| id.name.clone()).collect(),
            span: namespace.span,
        });
        Ok(())
    }

    /// `open A renaming x → y`
    fn open_renaming(&mut self, namespace: &Ident, pairs: &[RenamePair]) -> Result<()> {
        let resolved = self.resolver().resolve_unique_namespace(namespace)?;
        for pair in pairs {
            let target = self.resolver().resolve_id(&resolved, &pair.from)?;
            self.push_open_decl(OpenDecl::Explicit {
                alias: pair.to.name.clone(),
                target,
            });
        }
        Ok(())
    }

    /// `open scoped A`: like a simple open, and the scoped extensions activate
    /// what they tagged with `A`.
    fn open_scoped(&mut self, namespaces: &[Ident]) -> Result<()> {
        for name in namespaces {
            let namespace = self.resolver().resolve_unique_namespace(name)?;
            self.push_open_decl(OpenDecl::simple(namespace.clone(), name.span));
            self.scopes.activate_scoped(&namespace);
        }
        Ok(())
    }
}
