//! Callable argument inspection and filtering.
//!
//! Classifies a callable's formal parameters into an immutable [`ArgSet`]
//! summary and answers name-acceptance queries against it: whether a named
//! argument would be accepted ([`ArgSet::contains`]), which entries of a
//! candidate mapping the callable would take ([`ArgSet::select`]), and
//! which required named arguments a candidate is missing
//! ([`ArgSet::missing`]).
//!
//! Parameter lists can be built by hand with [`Param`] or extracted from
//! Python source via the [`python`] module.

// Export modules for library usage
pub mod argset;
pub mod classify;
pub mod errors;
pub mod param;
pub mod python;

// Re-export commonly used types
pub use crate::argset::ArgSet;
pub use crate::classify::classify;
pub use crate::errors::SignatureError;
pub use crate::param::Param;
pub use crate::python::{argset_for_function, params_from_args};
