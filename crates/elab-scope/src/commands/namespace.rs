//! `namespace`, `section` and `end`.

use miette::SourceSpan;

use super::Session;
use crate::ast::Ident;
use crate::env::GlobalSymbolTable;
use crate::error::ScopeError;
use crate::name::Name;
use crate::scope::{Scope, ScopeKind};
use crate::Result;

const ROOT_COMPONENT: &str = "_root_";

impl<T: GlobalSymbolTable> Session<T> {
    /// `namespace A.B.C`: one namespace scope per component.
    pub fn elab_namespace(&mut self, name: &Ident) -> Result<()> {
        for component in scope_components(name)? {
            self.scopes.push(component, ScopeKind::Namespace, &mut self.env);
        }
        Ok(())
    }

    /// `section` or `section A.B`.
    pub fn elab_section(&mut self, name: Option<&Ident>) -> Result<()> {
        match name {
            None => {
                self.scopes.push("", ScopeKind::AnonymousSection, &mut self.env);
            }
            Some(name) => {
                for component in scope_components(name)? {
                    self.scopes.push(component, ScopeKind::Section, &mut self.env);
                }
            }
        }
        Ok(())
    }

    /// `end` or `end A.B`.
    ///
    /// The scopes are closed before their headers are checked, so a mismatch
    /// still leaves them closed.
    pub fn elab_end(&mut self, name: Option<&Ident>, span: SourceSpan) -> Result<()> {
        let pop_count = name.map_or(1, |n| n.name.num_components().max(1));
        if pop_count >= self.scopes.depth() {
            return Err(ScopeError::InsufficientScopes {
                requested: pop_count,
                available: self.scopes.depth() - 1,
                span: Some(name.map_or(span, |n| n.span)),
            });
        }

        let popped = self.scopes.pop(pop_count)?;
        match name {
            None => {
                if popped.len() == 1 && popped[0].header().is_empty() {
                    Ok(())
                } else {
                    Err(ScopeError::EndNameMissing {
                        expected: closed_headers(&popped),
                        span,
                    })
                }
            }
            Some(name) => {
                let components = name.name.components();
                let matches = components.len() == popped.len()
                    && popped
                        .iter()
                        .rev()
                        .zip(components)
                        .all(|(scope, component)| scope.header() == component);
                if matches {
                    Ok(())
                } else {
                    Err(ScopeError::EndNameMismatch {
                        given: name.name.clone(),
                        expected: closed_headers(&popped),
                        span: name.span,
                    })
                }
            }
        }
    }
}

/// The components of a scope header, all checked before any is pushed.
fn scope_components(name: &Ident) -> Result<&[String]> {
    if name.name.is_anonymous() {
        return Err(ScopeError::InvalidScopeComponent {
            component: String::new(),
            span: name.span,
        });
    }
    let components = name.name.components();
    if let Some(bad) = components
        .iter()
        .find(|c| c.is_empty() || c.as_str() == ROOT_COMPONENT)
    {
        return Err(ScopeError::InvalidScopeComponent {
            component: bad.clone(),
            span: name.span,
        });
    }
    Ok(components)
}

/// Headers of `popped` (innermost first) as a name read outermost first.
fn closed_headers(popped: &[Scope]) -> Name {
    Name::from_components(popped.iter().rev().map(|scope| scope.header().to_string()))
}
