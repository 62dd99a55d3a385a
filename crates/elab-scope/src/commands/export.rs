use super::Session;
use crate::ast::Ident;
use crate::env::GlobalSymbolTable;
use crate::error::ScopeError;
use crate::name::Name;
use crate::Result;

impl<T: GlobalSymbolTable> Session<T> {
    /// `export NS (x y)`: make `x` and `y` visible from the current namespace
    /// as aliases of `NS.x` and `NS.y`.
    ///
    /// Nothing is recorded unless every identifier resolves.
    pub fn elab_export(&mut self, namespace: &Ident, ids: &[Ident]) -> Result<()> {
        let resolved = self.resolver().resolve_unique_namespace(namespace)?;
        let current = self.current_namespace().clone();
        if resolved == current {
            return Err(ScopeError::SelfExport {
                namespace: resolved,
                span: namespace.span,
            });
        }

        let resolver = self.resolver();
        let entries = ids
            .iter()
            .map(|id| {
                resolver
                    .resolve_id(&resolved, id)
                    .map(|target| (current.append(&id.name), target))
            })
            .collect::<Result<Vec<(Name, Name)>>>()?;

        for (alias, target) in entries {
            self.aliases.insert(alias, target);
        }
        Ok(())
    }
}
