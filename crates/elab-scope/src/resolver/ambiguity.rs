//! Fan-out of one identifier over several open namespaces.
//!
//! Every candidate namespace is tried; none short-circuits. The outcomes
//! are then classified:
//!
//! | successes | candidates | result                                   |
//! |-----------|------------|------------------------------------------|
//! | 1         | any        | that success, failures discarded         |
//! | 0         | 1          | the single failure, unchanged            |
//! | 0         | > 1        | `ResolutionAggregateFailure` with all    |
//! | > 1       | any        | `AmbiguousIdentifier` listing all        |
//!
//! Successes that resolve to the same global name count once.

use miette::SourceSpan;

use crate::error::{NamespaceFailure, ScopeError};
use crate::name::Name;
use crate::Result;

/// A candidate namespace and where it was referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRef {
    pub name: Name,
    pub span: SourceSpan,
}

impl NamespaceRef {
    pub fn new(name: Name, span: SourceSpan) -> Self {
        Self { name, span }
    }
}

/// Resolve `id` in each of `namespaces` with `lookup` and classify the results.
pub fn resolve_in_namespaces<F>(
    id: &Name,
    span: SourceSpan,
    namespaces: &[NamespaceRef],
    mut lookup: F,
) -> Result<Name>
where
    F: FnMut(&NamespaceRef) -> Result<Name>,
{
    let (mut successes, mut failures) = namespaces.iter().fold(
        (Vec::<Name>::new(), Vec::<NamespaceFailure>::new()),
        |(mut successes, mut failures), namespace| {
            match lookup(namespace) {
                Ok(resolved) => {
                    log::trace!("`{}` in `{}` resolved to `{}`", id, namespace.name, resolved);
                    if !successes.contains(&resolved) {
                        successes.push(resolved);
                    }
                }
                Err(cause) => {
                    log::trace!("`{}` in `{}` failed: {}", id, namespace.name, cause);
                    failures.push(NamespaceFailure {
                        namespace: namespace.name.clone(),
                        span: namespace.span,
                        cause: Box::new(cause),
                    });
                }
            }
            (successes, failures)
        },
    );

    match successes.len() {
        1 => Ok(successes.remove(0)),
        0 => match failures.len() {
            0 => Err(ScopeError::UnknownIdentifier {
                name: id.clone(),
                span,
            }),
            1 => Err(*failures.remove(0).cause),
            _ => Err(ScopeError::ResolutionAggregateFailure {
                name: id.clone(),
                span,
                failures,
            }),
        },
        _ => Err(ScopeError::AmbiguousIdentifier {
            name: id.clone(),
            span,
            candidates: successes,
        }),
    }
}
