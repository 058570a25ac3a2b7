//! Formal parameter descriptors consumed by the classifier.

use serde::{Deserialize, Serialize};

/// One formal parameter of a callable, in declaration order.
///
/// The taxonomy is closed: every parameter a well-formed callable can
/// declare falls into exactly one of these five kinds. The name is carried
/// only on the kinds where a caller can actually use it (positional-only
/// and variadic-positional parameters have no externally usable name), and
/// default-presence only on the kinds where a default is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Param {
    /// Accepted only by position, never by name (`def f(x, /)` in Python).
    PositionalOnly { has_default: bool },
    /// Accepted by position or by name (the ordinary kind).
    PositionalOrNamed { name: String, has_default: bool },
    /// Accepted only by name (`def f(*, x)` in Python).
    NamedOnly { name: String, has_default: bool },
    /// Collects extra positional values (`*args`).
    VarPositional,
    /// Collects extra named values (`**kwargs`); accepts arbitrary names.
    VarNamed,
}

impl Param {
    /// Create a positional-only parameter.
    pub fn positional_only(has_default: bool) -> Self {
        Param::PositionalOnly { has_default }
    }

    /// Create an ordinary positional-or-named parameter.
    pub fn positional_or_named(name: impl Into<String>, has_default: bool) -> Self {
        Param::PositionalOrNamed {
            name: name.into(),
            has_default,
        }
    }

    /// Create a named-only parameter.
    pub fn named_only(name: impl Into<String>, has_default: bool) -> Self {
        Param::NamedOnly {
            name: name.into(),
            has_default,
        }
    }

    /// The externally usable name, if this kind has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Param::PositionalOrNamed { name, .. } | Param::NamedOnly { name, .. } => {
                Some(name.as_str())
            }
            Param::PositionalOnly { .. } | Param::VarPositional | Param::VarNamed => None,
        }
    }

    /// Whether the parameter declares a default value. Always false for the
    /// variadic kinds, which have no default to declare.
    pub fn has_default(&self) -> bool {
        match self {
            Param::PositionalOnly { has_default }
            | Param::PositionalOrNamed { has_default, .. }
            | Param::NamedOnly { has_default, .. } => *has_default,
            Param::VarPositional | Param::VarNamed => false,
        }
    }
}
