//! Hierarchical dotted names.
//!
//! Every namespace, declaration and alias is addressed by a `Name`: a list of
//! components read outermost to innermost, so `A.B.c` is `["A", "B", "c"]`.
//! The anonymous name (no components) denotes the root namespace.

use std::fmt;

/// A dotted, hierarchical name such as `Nat.add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    components: Vec<String>,
}

impl Name {
    /// The root name, with no components.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Parse `A.B.c` into its components. The empty string is the anonymous name.
    pub fn from_dotted(text: &str) -> Self {
        if text.is_empty() {
            return Self::anonymous();
        }
        Self {
            components: text.split('.').map(str::to_string).collect(),
        }
    }

    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    pub fn is_anonymous(&self) -> bool {
        self.components.is_empty()
    }

    /// The innermost component, if any.
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// A new name with one more component appended.
    pub fn child(&self, component: impl Into<String>) -> Name {
        let mut components = self.components.clone();
        components.push(component.into());
        Name { components }
    }

    /// Concatenate two names: `A.B` ++ `c.d` = `A.B.c.d`.
    pub fn append(&self, other: &Name) -> Name {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Name { components }
    }

    /// The name with its innermost component dropped. The prefix of the
    /// anonymous name is the anonymous name.
    pub fn prefix(&self) -> Name {
        let keep = self.components.len().saturating_sub(1);
        Name {
            components: self.components[..keep].to_vec(),
        }
    }

    /// `self`, then each shorter prefix, ending with the anonymous name.
    pub fn prefixes(&self) -> impl Iterator<Item = Name> {
        std::iter::successors(Some(self.clone()), |name| {
            if name.is_anonymous() {
                None
            } else {
                Some(name.prefix())
            }
        })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_anonymous() {
            return f.write_str("[anonymous]");
        }
        f.write_str(&self.components.join("."))
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::from_dotted(text)
    }
}

impl From<String> for Name {
    fn from(text: String) -> Self {
        Name::from_dotted(&text)
    }
}
