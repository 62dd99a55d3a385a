//! Pre-parsed syntax of the scope commands.
//!
//! The parser lives elsewhere; these types are what it hands to
//! [`Session::elab_command`](crate::Session::elab_command).

use miette::SourceSpan;

use crate::name::Name;
use crate::options::OptionValue;

/// A name as written in the source, with its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: Name,
    pub span: SourceSpan,
}

impl Ident {
    pub fn new(name: impl Into<Name>, span: impl Into<SourceSpan>) -> Self {
        Self {
            name: name.into(),
            span: span.into(),
        }
    }
}

/// One `x → y` pair of `open A renaming x → y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    pub from: Ident,
    pub to: Ident,
}

/// The five shapes of the `open` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenSyntax {
    /// `open A B C`
    Simple(Vec<Ident>),
    /// `open A (x y)`
    Only { namespace: Ident, ids: Vec<Ident> },
    /// `open A hiding x y`
    Hiding { namespace: Ident, ids: Vec<Ident> },
    /// `open A renaming x → y, z → w`
    Renaming { namespace: Ident, pairs: Vec<RenamePair> },
    /// `open scoped A B`
    Scoped(Vec<Ident>),
}

/// A top-level scope command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `namespace A.B.C`
    Namespace(Ident),
    /// `section` or `section A.B`
    Section(Option<Ident>),
    /// `end` or `end A.B`; `span` covers the whole command.
    End { name: Option<Ident>, span: SourceSpan },
    Open(OpenSyntax),
    /// `export NS (x y)`
    Export { namespace: Ident, ids: Vec<Ident> },
    /// `set_option pp.all true`
    SetOption { name: Ident, value: OptionValue },
}
