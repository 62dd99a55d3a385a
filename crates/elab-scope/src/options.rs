//! Option values carried by each scope.

use std::fmt;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The value of a `set_option` setting.
///
/// Option declarations and their expected types live outside this crate, so
/// values are stored as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Nat(u64),
    Str(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Nat(n) => write!(f, "{}", n),
            OptionValue::Str(s) => write!(f, "{:?}", s),
        }
    }
}

/// Option map of a scope, keyed by the option's dotted name.
pub type Options = FxHashMap<String, OptionValue>;
