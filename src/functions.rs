//! Top-level functions module.
//!
//! This module groups the function tables the report is generated from:
//!
//! - `buildin`: the unary and binary registries (names and implementations).
//! - `core`: domain checks deciding which inputs are undefined, and the
//!   [`DomainError`] returned for them.
//!
//! Implementations forward to the host math library through
//! [`num_traits::Float`]; nothing here computes a function itself.
pub(crate) mod buildin;
pub(crate) mod core;

pub use self::buildin::{BinaryKind, ParseFunctionError, UnaryKind};
pub use self::core::DomainError;

/// Returns `true` if `name` labels an entry of either registry.
pub fn is_known(name: &str) -> bool
{
    name.parse::<UnaryKind>().is_ok() || name.parse::<BinaryKind>().is_ok()
}
