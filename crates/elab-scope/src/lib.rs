#![doc = include_str!("../README.md")]

pub mod alias;
pub mod ast;
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod extension;
pub mod name;
pub mod options;
pub mod resolver;
pub mod scope;

pub use alias::AliasTable;
pub use ast::{Command, Ident, OpenSyntax, RenamePair};
pub use commands::Session;
pub use config::{ConfigError, SessionConfig};
pub use env::{Environment, GlobalSymbolTable};
pub use error::{NamespaceFailure, ScopeError};
pub use extension::{ExtensionId, ExtensionRegistry, ScopedExtension};
pub use name::Name;
pub use options::{OptionValue, Options};
pub use resolver::{resolve_in_namespaces, NamespaceRef, Resolver};
pub use scope::{OpenDecl, Scope, ScopeKind, ScopeStack};

/// Result of scope commands and name resolution.
pub type Result<T> = std::result::Result<T, ScopeError>;
