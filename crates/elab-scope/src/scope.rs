//! Lexical scopes and the scope stack.

use std::fmt;

use miette::SourceSpan;

use crate::env::GlobalSymbolTable;
use crate::error::ScopeError;
use crate::extension::{ExtensionId, ExtensionRegistry, ScopedExtension};
use crate::name::Name;
use crate::options::{OptionValue, Options};
use crate::Result;

/// How a scope was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Namespace,
    Section,
    AnonymousSection,
}

/// What an `open` command made visible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OpenDecl {
    /// Every declaration of `namespace` is visible unqualified, except `except`.
    /// `span` is where the `open` named it.
    Simple {
        namespace: Name,
        except: Vec<Name>,
        span: SourceSpan,
    },
    /// `alias` stands for the single declaration `target`.
    Explicit { alias: Name, target: Name },
}

impl OpenDecl {
    pub fn simple(namespace: Name, span: impl Into<SourceSpan>) -> Self {
        OpenDecl::Simple {
            namespace,
            except: Vec::new(),
            span: span.into(),
        }
    }
}

impl fmt::Display for OpenDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenDecl::Simple { namespace, except, .. } if except.is_empty() => {
                write!(f, "{}", namespace)
            }
            OpenDecl::Simple { namespace, except, .. } => {
                write!(f, "{} hiding", namespace)?;
                for name in except {
                    write!(f, " {}", name)?;
                }
                Ok(())
            }
            OpenDecl::Explicit { alias, target } => write!(f, "{} → {}", alias, target),
        }
    }
}

/// One lexical nesting level.
#[derive(Debug, Clone, PartialEq)]
pub struct Scope {
    header: String,
    full_name: Name,
    kind: ScopeKind,
    /// In the order they were opened; read back most recent first.
    open_decls: Vec<OpenDecl>,
    options: Options,
}

impl Scope {
    fn root(options: Options) -> Self {
        Self {
            header: String::new(),
            full_name: Name::anonymous(),
            kind: ScopeKind::Namespace,
            open_decls: Vec::new(),
            options,
        }
    }

    /// The name component this scope introduced; empty for an anonymous section.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The namespace in effect inside this scope.
    pub fn full_name(&self) -> &Name {
        &self.full_name
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Open declarations of this scope, most recent first.
    pub fn open_decls(&self) -> impl Iterator<Item = &OpenDecl> {
        self.open_decls.iter().rev()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    pub(crate) fn add_open_decl(&mut self, decl: OpenDecl) {
        self.open_decls.push(decl);
    }

    pub(crate) fn set_option(&mut self, name: String, value: OptionValue) {
        self.options.insert(name, value);
    }
}

/// The stack of open scopes plus the extension slots that follow it.
///
/// The root scope is never popped, so there is always a top.
#[derive(Debug)]
pub struct ScopeStack {
    root: Scope,
    /// Scopes above the root, outermost first.
    nested: Vec<Scope>,
    extensions: ExtensionRegistry,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// A stack whose root scope starts with `options`.
    pub fn with_options(options: Options) -> Self {
        Self {
            root: Scope::root(options),
            nested: Vec::new(),
            extensions: ExtensionRegistry::new(),
        }
    }

    /// Number of scopes, the root included. Always at least 1.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    pub fn top(&self) -> &Scope {
        self.nested.last().unwrap_or(&self.root)
    }

    pub(crate) fn top_mut(&mut self) -> &mut Scope {
        self.nested.last_mut().unwrap_or(&mut self.root)
    }

    pub fn current_namespace(&self) -> &Name {
        self.top().full_name()
    }

    /// Scopes innermost first, ending with the root.
    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.nested.iter().rev().chain(std::iter::once(&self.root))
    }

    /// The ambient open context: every scope's open decls, innermost scope first.
    pub fn open_decls(&self) -> impl Iterator<Item = &OpenDecl> {
        self.iter().flat_map(Scope::open_decls)
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    /// Register a scoped extension whose slot starts at the current depth.
    pub fn register_extension<E: ScopedExtension>(
        &mut self,
        extension: E,
        initial: E::State,
    ) -> ExtensionId<E> {
        let depth = self.depth();
        self.extensions.register(extension, initial, depth)
    }

    /// Enter a new scope. A non-empty `header` names a namespace, which is
    /// registered with `env`.
    pub fn push<T>(&mut self, header: &str, kind: ScopeKind, env: &mut T) -> &Scope
    where
        T: GlobalSymbolTable + ?Sized,
    {
        let parent = self.top();
        let full_name = if header.is_empty() {
            parent.full_name.clone()
        } else {
            parent.full_name.child(header)
        };
        let scope = Scope {
            header: header.to_string(),
            full_name,
            kind,
            open_decls: Vec::new(),
            options: parent.options.clone(),
        };
        if !header.is_empty() {
            env.register_namespace(&scope.full_name);
        }

        self.extensions.push_all();
        log::debug!("push {:?} scope `{}` (depth {})", kind, scope.full_name, self.depth() + 1);
        self.nested.push(scope);
        self.top()
    }

    /// Close the `n` innermost scopes and return them innermost first.
    ///
    /// The root scope can't be closed, so `n` must be less than [`depth`](Self::depth).
    pub fn pop(&mut self, n: usize) -> Result<Vec<Scope>> {
        if n >= self.depth() {
            return Err(ScopeError::InsufficientScopes {
                requested: n,
                available: self.nested.len(),
                span: None,
            });
        }
        self.extensions.pop_all(n);
        let mut popped = self.nested.split_off(self.nested.len() - n);
        popped.reverse();
        log::debug!("popped {} scope(s), now in `{}`", n, self.current_namespace());
        Ok(popped)
    }

    /// Let every extension activate the entries scoped to `namespace`.
    pub fn activate_scoped(&mut self, namespace: &Name) {
        self.extensions.activate_scoped(namespace);
    }
}
