//! The elaboration session and its scope command handlers.
//!
//! A [`Session`] owns the mutable state the commands work on: the global
//! symbol table, the scope stack with its extension slots, and the alias
//! table. Each handler resolves first and mutates after; a handler that fails
//! part-way keeps what it already did. Only `export` defers every mutation
//! until all of its checks have passed.

mod export;
mod namespace;
mod open;
mod set_option;

use crate::alias::AliasTable;
use crate::ast::{Command, Ident};
use crate::config::SessionConfig;
use crate::env::{Environment, GlobalSymbolTable};
use crate::extension::{ExtensionId, ScopedExtension};
use crate::name::Name;
use crate::resolver::Resolver;
use crate::scope::{OpenDecl, ScopeStack};
use crate::Result;

/// Per-file elaboration state for scope commands.
#[derive(Debug)]
pub struct Session<T: GlobalSymbolTable = Environment> {
    env: T,
    scopes: ScopeStack,
    aliases: AliasTable,
}

impl<T: GlobalSymbolTable> Session<T> {
    pub fn new(env: T) -> Self {
        Self {
            env,
            scopes: ScopeStack::new(),
            aliases: AliasTable::new(),
        }
    }

    /// A session whose root scope carries `config.options` and has every
    /// `config.auto_open` namespace opened.
    pub fn with_config(env: T, config: &SessionConfig) -> Result<Self> {
        let mut session = Self {
            env,
            scopes: ScopeStack::with_options(config.options.clone()),
            aliases: AliasTable::new(),
        };
        let auto_open: Vec<Ident> = config
            .auto_open
            .iter()
            .map(|ns| Ident::new(ns.as_str(), (0, 0)))
            .collect();
        session.open_simple(&auto_open)?;
        Ok(session)
    }

    pub fn env(&self) -> &T {
        &self.env
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Register a scoped extension; its slot starts at the current depth.
    pub fn register_extension<E: ScopedExtension>(
        &mut self,
        extension: E,
        initial: E::State,
    ) -> ExtensionId<E> {
        self.scopes.register_extension(extension, initial)
    }

    pub fn resolver(&self) -> Resolver<'_, T> {
        Resolver::new(&self.env, &self.scopes, &self.aliases)
    }

    pub fn current_namespace(&self) -> &Name {
        self.scopes.current_namespace()
    }

    /// The ambient open context, innermost scope first.
    pub fn current_open_decls(&self) -> impl Iterator<Item = &OpenDecl> {
        self.scopes.open_decls()
    }

    /// Turn a bare identifier into a fully-qualified name.
    pub fn resolve(&self, id: &Ident) -> Result<Name> {
        self.resolver().resolve(id)
    }

    /// Elaborate one scope command.
    pub fn elab_command(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Namespace(name) => self.elab_namespace(name),
            Command::Section(name) => self.elab_section(name.as_ref()),
            Command::End { name, span } => self.elab_end(name.as_ref(), *span),
            Command::Open(decl) => self.elab_open(decl),
            Command::Export { namespace, ids } => self.elab_export(namespace, ids),
            Command::SetOption { name, value } => {
                self.elab_set_option(name, value.clone());
                Ok(())
            }
        }
    }

    fn push_open_decl(&mut self, decl: OpenDecl) {
        log::debug!("open `{}` in `{}`", decl, self.scopes.current_namespace());
        self.scopes.top_mut().add_open_decl(decl);
    }
}
