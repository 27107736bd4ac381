//! Evolutionary operators.
//!
//! Only point substitution is modelled: [`mutation::mutate`] changes one base,
//! [`mutation::diverge`] applies a percentage's worth of independent
//! substitutions.

pub mod mutation;

pub use mutation::{diverge, mutate, substitution_count, Substitution};
