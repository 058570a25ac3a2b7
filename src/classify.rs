//! Single-pass classification of a parameter list into an [`ArgSet`].

use crate::argset::ArgSet;
use crate::param::Param;

/// Classify an ordered parameter list into an [`ArgSet`].
///
/// One linear pass, one decision per parameter. Every parameter lands in
/// exactly one of the summary's buckets; none is double-counted or dropped.
/// The callable itself is never invoked.
///
/// The input must describe a well-formed callable: each variadic kind at
/// most once and no name declared twice. A correct signature source cannot
/// produce anything else, so these are guarded by internal assertions
/// rather than runtime errors.
pub fn classify<I>(params: I) -> ArgSet
where
    I: IntoIterator<Item = Param>,
{
    let mut set = ArgSet::default();
    for param in params {
        match param {
            Param::PositionalOnly { has_default: false } => set.required_positional_only += 1,
            Param::PositionalOnly { has_default: true } => set.optional_positional_only += 1,
            Param::PositionalOrNamed { name, has_default }
            | Param::NamedOnly { name, has_default } => {
                debug_assert!(
                    !set.required_args.contains(&name) && !set.optional_args.contains(&name),
                    "duplicate parameter name `{name}`"
                );
                if has_default {
                    set.optional_args.insert(name);
                } else {
                    set.required_args.insert(name);
                }
            }
            Param::VarPositional => {
                debug_assert!(!set.takes_args, "duplicate variadic-positional parameter");
                set.takes_args = true;
            }
            Param::VarNamed => {
                debug_assert!(!set.takes_kwargs, "duplicate variadic-named parameter");
                set.takes_kwargs = true;
            }
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use im::HashSet;
    use pretty_assertions::assert_eq;

    fn names(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn simple_required_parameter() {
        let set = classify([Param::positional_or_named("foo", false)]);
        assert_eq!(
            set,
            ArgSet {
                required_args: names(&["foo"]),
                ..ArgSet::default()
            }
        );
    }

    #[test]
    fn defaulting_parameter_goes_to_optional() {
        let set = classify([
            Param::positional_or_named("foo", false),
            Param::positional_or_named("bar", true),
        ]);
        assert_eq!(
            set,
            ArgSet {
                required_args: names(&["foo"]),
                optional_args: names(&["bar"]),
                ..ArgSet::default()
            }
        );
    }

    #[test]
    fn bare_kwargs() {
        let set = classify([Param::VarNamed]);
        assert_eq!(
            set,
            ArgSet {
                takes_kwargs: true,
                ..ArgSet::default()
            }
        );
    }

    #[test]
    fn bare_args() {
        let set = classify([Param::VarPositional]);
        assert_eq!(
            set,
            ArgSet {
                takes_args: true,
                ..ArgSet::default()
            }
        );
    }

    #[test]
    fn positional_only_defaults_split_the_counters() {
        let set = classify([
            Param::positional_only(false),
            Param::positional_only(true),
            Param::positional_only(true),
        ]);
        assert_eq!(set.required_positional_only, 1);
        assert_eq!(set.optional_positional_only, 2);
        assert_eq!(set.positional_only(), 3);
    }

    #[test]
    fn named_only_parameters_use_the_name_sets() {
        let set = classify([
            Param::named_only("bar", false),
            Param::named_only("baz", true),
        ]);
        assert_eq!(set.required_args, names(&["bar"]));
        assert_eq!(set.optional_args, names(&["baz"]));
    }

    #[test]
    fn empty_parameter_list() {
        assert_eq!(classify(Vec::new()), ArgSet::default());
    }

    #[test]
    fn every_kind_in_one_signature() {
        let set = classify([
            Param::positional_only(false),
            Param::positional_or_named("foo", false),
            Param::VarPositional,
            Param::named_only("bar", true),
            Param::VarNamed,
        ]);
        assert_eq!(
            set,
            ArgSet {
                required_positional_only: 1,
                optional_positional_only: 0,
                required_args: names(&["foo"]),
                optional_args: names(&["bar"]),
                takes_args: true,
                takes_kwargs: true,
            }
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let params = [
            Param::positional_or_named("foo", false),
            Param::named_only("bar", true),
            Param::VarNamed,
        ];
        assert_eq!(classify(params.clone()), classify(params));
    }
}
