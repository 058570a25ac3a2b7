//! The `ArgSet` summary record and its query surface.

use im::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

/// Immutable classification summary of a callable's formal parameters.
///
/// An `ArgSet` is a pure snapshot produced by one pass of
/// [`classify`](crate::classify::classify): it has no further relationship to the
/// callable it was derived from, compares by value, and is cheap to clone
/// and share. All queries are pure functions of these fields; nothing is
/// recomputed against the original callable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSet {
    /// Positional-only parameters without defaults.
    pub required_positional_only: usize,
    /// Positional-only parameters with defaults.
    pub optional_positional_only: usize,
    /// Names of positional-or-named / named-only parameters without defaults.
    pub required_args: HashSet<String>,
    /// Names of positional-or-named / named-only parameters with defaults.
    pub optional_args: HashSet<String>,
    /// Whether a variadic-positional (`*args`) parameter is present.
    pub takes_args: bool,
    /// Whether a variadic-named (`**kwargs`) parameter is present.
    pub takes_kwargs: bool,
}

impl ArgSet {
    /// Total count of positional-only parameters.
    pub fn positional_only(&self) -> usize {
        self.required_positional_only + self.optional_positional_only
    }

    /// Every name usable as a named argument, regardless of `takes_kwargs`.
    pub fn argnames(&self) -> HashSet<String> {
        self.required_args.clone().union(self.optional_args.clone())
    }

    /// Would the callable accept a named argument called `name`?
    ///
    /// A variadic-named parameter accepts arbitrary names, so
    /// `takes_kwargs` makes this true for any string.
    pub fn contains(&self, name: &str) -> bool {
        self.takes_kwargs || self.required_args.contains(name) || self.optional_args.contains(name)
    }

    /// The sub-mapping of `candidates` whose keys satisfy [`contains`].
    ///
    /// When `takes_kwargs` is true every entry is accepted, so the result
    /// is the whole input mapping (a structural share, not a rebuild). The
    /// input is never mutated.
    ///
    /// [`contains`]: ArgSet::contains
    pub fn select<V: Clone>(&self, candidates: &HashMap<String, V>) -> HashMap<String, V> {
        if self.takes_kwargs {
            return candidates.clone();
        }
        candidates
            .iter()
            .filter(|(name, _)| self.contains(name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// The required named arguments absent from `candidates`.
    ///
    /// Only `required_args` participates: a variadic-named parameter does
    /// not satisfy a specific required name, and optional parameters are
    /// never missing.
    pub fn missing<V: Clone>(&self, candidates: &HashMap<String, V>) -> HashSet<String> {
        self.required_args
            .iter()
            .filter(|name| !candidates.contains_key(name.as_str()))
            .cloned()
            .collect()
    }
}
