use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::name::Name;

/// Errors raised while elaborating scope commands or resolving names.
///
/// Every error is terminal for the command that raised it. Mutations the
/// command already performed are kept.
#[derive(Debug, Error, Diagnostic, Clone, Hash, PartialEq, Eq)]
pub enum ScopeError {
    /// No registered namespace matches the written name.
    #[error("unknown namespace `{name}`")]
    #[diagnostic(code(elab_scope::unknown_namespace))]
    UnknownNamespace {
        name: Name,
        #[label("referenced here")]
        span: SourceSpan,
    },

    /// The written name matches several namespaces.
    #[error("ambiguous namespace `{name}`, possible interpretations: {}", render_names(.candidates))]
    #[diagnostic(code(elab_scope::ambiguous_namespace))]
    AmbiguousNamespace {
        name: Name,
        #[label("referenced here")]
        span: SourceSpan,
        candidates: Vec<Name>,
    },

    /// No declaration matches the identifier.
    #[error("unknown identifier `{name}`")]
    #[diagnostic(code(elab_scope::unknown_identifier))]
    UnknownIdentifier {
        name: Name,
        #[label("referenced here")]
        span: SourceSpan,
    },

    /// The identifier resolves to more than one declaration.
    #[error("ambiguous identifier `{name}`, possible interpretations: {}", render_names(.candidates))]
    #[diagnostic(code(elab_scope::ambiguous_identifier))]
    AmbiguousIdentifier {
        name: Name,
        #[label("referenced here")]
        span: SourceSpan,
        candidates: Vec<Name>,
    },

    /// Resolution failed in every candidate namespace; one entry per namespace.
    #[error("failed to resolve `{name}` in any open namespace")]
    #[diagnostic(code(elab_scope::resolution_failed))]
    ResolutionAggregateFailure {
        name: Name,
        #[label("referenced here")]
        span: SourceSpan,
        #[related]
        failures: Vec<NamespaceFailure>,
    },

    #[error("invalid 'export', self export of `{namespace}`")]
    #[diagnostic(code(elab_scope::self_export))]
    SelfExport {
        namespace: Name,
        #[label("this is the current namespace")]
        span: SourceSpan,
    },

    #[error("invalid 'end', name is missing (expected `{expected}`)")]
    #[diagnostic(code(elab_scope::end_name_missing))]
    EndNameMissing {
        /// Headers of the closed scopes, outermost first.
        expected: Name,
        #[label("closes `{expected}`")]
        span: SourceSpan,
    },

    #[error("invalid 'end', name mismatch (expected `{expected}`, found `{given}`)")]
    #[diagnostic(code(elab_scope::end_name_mismatch))]
    EndNameMismatch {
        given: Name,
        /// Headers of the closed scopes, outermost first.
        expected: Name,
        #[label("does not match the closed scopes")]
        span: SourceSpan,
    },

    #[error("invalid 'end', insufficient scopes (requested {requested}, {available} open)")]
    #[diagnostic(code(elab_scope::insufficient_scopes))]
    InsufficientScopes {
        requested: usize,
        available: usize,
        #[label("nothing left to close")]
        span: Option<SourceSpan>,
    },

    #[error("invalid scope name component `{component}`")]
    #[diagnostic(
        code(elab_scope::invalid_scope_component),
        help("namespace and section names must be non-empty and may not use `_root_`")
    )]
    InvalidScopeComponent {
        component: String,
        #[label("invalid component")]
        span: SourceSpan,
    },
}

/// One namespace's share of a [`ScopeError::ResolutionAggregateFailure`].
#[derive(Debug, Error, Diagnostic, Clone, Hash, PartialEq, Eq)]
#[error("in namespace `{namespace}`: {cause}")]
#[diagnostic(code(elab_scope::namespace_failure))]
pub struct NamespaceFailure {
    pub namespace: Name,
    #[label("namespace referenced here")]
    pub span: SourceSpan,
    pub cause: Box<ScopeError>,
}

fn render_names(names: &[Name]) -> String {
    names
        .iter()
        .map(|n| format!("`{}`", n))
        .collect::<Vec<_>>()
        .join(", ")
}
