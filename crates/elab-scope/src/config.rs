//! Session configuration, read from TOML.
//!
//! ```toml
//! auto_open = ["Nat", "List"]
//!
//! [options]
//! "pp.all" = true
//! maxRecDepth = 512
//! ```

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::Options;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Options of the root scope.
    #[serde(default)]
    pub options: Options,

    /// Namespaces opened at the root when the session starts, in order.
    #[serde(default)]
    pub auto_open: Vec<String>,
}

impl SessionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}

/// Errors raised while loading a [`SessionConfig`].
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("could not read session configuration {path}: {message}")]
    #[diagnostic(
        code(elab_scope::config_read),
        help("check that the file exists and is readable")
    )]
    Read { path: PathBuf, message: String },

    #[error("invalid session configuration: {0}")]
    #[diagnostic(
        code(elab_scope::config_parse),
        help("expected an `auto_open` list and an `[options]` table")
    )]
    Parse(String),
}
