//! # math_refs
//!
//! `math_refs` prints reference values of standard mathematical functions,
//! ready to be copied into the golden values of another project's tests.
//!
//! ## Overview
//! - A closed table of unary functions (`sin`, `acosh`, `log10`, ...) and
//!   binary functions (`atan2`, `pow`, ...) forwarding to the host math
//!   library.
//! - A fixed set of representative inputs, overridable per unary function.
//! - Inputs outside a function's domain produce `nan` rather than an error.
//! - Numbers are printed in `%g` notation: 12 significant digits for inputs
//!   and 17 for outputs, enough to round-trip an `f64`.
//!
//! The listing is stamped with the compiler version; bit patterns of
//! transcendental functions may differ between platforms and releases.
//!
//! ## Example
//! ```rust
//! use math_refs::{report::Report, values};
//!
//! let overrides = values::parse("sin=0,0.5,1.0").unwrap();
//! let mut out = Vec::new();
//! Report::new(&overrides).write_to(&mut out).unwrap();
//!
//! let listing = String::from_utf8(out).unwrap();
//! assert!(listing.contains("sin:\n  0 -> 0\n  0.5 -> "));
//! assert!(listing.contains("  (3, 4) -> 81\n"));
//! ```
//!
//! ## License
//! Licensed under either **MIT** or **Apache-2.0** at your option.

pub mod format;
pub mod functions;
pub mod report;
pub mod values;

pub use functions::{BinaryKind, DomainError, UnaryKind};
pub use report::Report;
pub use values::{Overrides, ValuesError};

/// Version of the compiler this crate was built with, or `unknown`.
pub fn runtime_version() -> &'static str
{
    env!("MATH_REFS_RUSTC_VERSION")
}
