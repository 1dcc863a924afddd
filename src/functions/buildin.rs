//! # buildin.rs
//!
//! Standard mathematical functions covered by the reference tables.
//!
//! Two closed registries are defined here: [`UnaryKind`] for functions of one
//! argument and [`BinaryKind`] for functions of two. Their names are the labels
//! printed in the report, so they must stay stable for whoever copies the
//! numbers into fixtures.

use crate::functions::core::{
    self as guard,
    DomainError,
};

use num_traits::Float;
use thiserror::Error;

/// Error type for parsing function names.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseFunctionError {
    /// The function name is not recognized, or its entry is not available.
    #[error("unknown function")]
    UnknownFunction,
}

macro_rules! unary_functions {
    ( $( $variant:ident => {
        name: $name:expr,
        available: $available:expr,
        domain: $domain:expr,
        apply: $apply:expr
    } ), + $(,)? ) => {
        /// Functions taking a single floating-point argument.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum UnaryKind {
            $( $variant ), +
        }

        impl UnaryKind {
            const ALL: &'static [Self] = &[ $( Self::$variant ), + ];

            /// Label of the function as printed in the report.
            pub fn name(&self) -> &'static str
            {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Whether the math backend exposes this function.
            pub fn is_available(&self) -> bool
            {
                match self {
                    $( Self::$variant => $available, )+
                }
            }

            /// Evaluates the function, rejecting inputs outside its domain.
            pub fn apply<T: Float>(&self, x: T) -> Result<T, DomainError>
            {
                match self {
                    $(
                        Self::$variant => {
                            if ($domain)(x) {
                                Ok(($apply)(x))
                            } else {
                                Err(DomainError::new($name))
                            }
                        },
                    )+
                }
            }
        }

        impl std::str::FromStr for UnaryKind {
            type Err = ParseFunctionError;

            fn from_str(s: &str) -> Result<Self, Self::Err>
            {
                let kind = match s {
                    $( $name => Self::$variant, )+
                    _ => return Err(ParseFunctionError::UnknownFunction),
                };
                if kind.is_available() {
                    Ok(kind)
                } else {
                    Err(ParseFunctionError::UnknownFunction)
                }
            }
        }
    };
}

macro_rules! binary_functions {
    ( $( $variant:ident => {
        name: $name:expr,
        domain: $domain:expr,
        apply: $apply:expr
    } ), + $(,)? ) => {
        /// Functions taking two floating-point arguments.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum BinaryKind {
            $( $variant ), +
        }

        impl BinaryKind {
            const ALL: &'static [Self] = &[ $( Self::$variant ), + ];

            /// Label of the function as printed in the report.
            pub fn name(&self) -> &'static str
            {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Evaluates the function, rejecting inputs outside its domain.
            pub fn apply<T: Float>(&self, a: T, b: T) -> Result<T, DomainError>
            {
                match self {
                    $(
                        Self::$variant => {
                            if ($domain)(a, b) {
                                Ok(($apply)(a, b))
                            } else {
                                Err(DomainError::new($name))
                            }
                        },
                    )+
                }
            }
        }

        impl std::str::FromStr for BinaryKind {
            type Err = ParseFunctionError;

            fn from_str(s: &str) -> Result<Self, Self::Err>
            {
                match s {
                    $( $name => Ok(Self::$variant), )+
                    _ => Err(ParseFunctionError::UnknownFunction),
                }
            }
        }
    };
}

unary_functions! {
    Sin     => { name: "sin",   available: true, domain: guard::not_infinite,   apply: |x: T| x.sin() },
    Cos     => { name: "cos",   available: true, domain: guard::not_infinite,   apply: |x: T| x.cos() },
    Tan     => { name: "tan",   available: true, domain: guard::not_infinite,   apply: |x: T| x.tan() },
    Asin    => { name: "asin",  available: true, domain: guard::unit_closed,    apply: |x: T| x.asin() },
    Acos    => { name: "acos",  available: true, domain: guard::unit_closed,    apply: |x: T| x.acos() },
    Atan    => { name: "atan",  available: true, domain: guard::everywhere,     apply: |x: T| x.atan() },
    Sinh    => { name: "sinh",  available: true, domain: guard::everywhere,     apply: |x: T| x.sinh() },
    Cosh    => { name: "cosh",  available: true, domain: guard::everywhere,     apply: |x: T| x.cosh() },
    Tanh    => { name: "tanh",  available: true, domain: guard::everywhere,     apply: |x: T| x.tanh() },
    Asinh   => { name: "asinh", available: true, domain: guard::everywhere,     apply: |x: T| x.asinh() },
    Acosh   => { name: "acosh", available: true, domain: guard::at_least_one,   apply: |x: T| x.acosh() },
    Atanh   => { name: "atanh", available: true, domain: guard::unit_open,      apply: |x: T| x.atanh() },
    Exp     => { name: "exp",   available: true, domain: guard::everywhere,     apply: |x: T| x.exp() },
    Exp2    => { name: "exp2",  available: true, domain: guard::everywhere,     apply: |x: T| x.exp2() },
    Log     => { name: "log",   available: true, domain: guard::positive,       apply: |x: T| x.ln() },
    Log2    => { name: "log2",  available: true, domain: guard::positive,       apply: |x: T| x.log2() },
    Log10   => { name: "log10", available: true, domain: guard::positive,       apply: |x: T| x.log10() },
    Sqrt    => { name: "sqrt",  available: true, domain: guard::non_negative,   apply: |x: T| x.sqrt() },
    Cbrt    => { name: "cbrt",  available: cfg!(feature = "cbrt"), domain: guard::everywhere, apply: |x: T| x.cbrt() },
}

binary_functions! {
    Atan2    => { name: "atan2",    domain: guard::everywhere2,      apply: |a: T, b: T| a.atan2(b) },
    Hypot    => { name: "hypot",    domain: guard::everywhere2,      apply: |a: T, b: T| a.hypot(b) },
    Pow      => { name: "pow",      domain: guard::pow_defined,      apply: |a: T, b: T| a.powf(b) },
    Copysign => { name: "copysign", domain: guard::everywhere2,      apply: |a: T, b: T| a.copysign(b) },
    // Two-argument form: the addend is fixed at zero, so this is `a * b` rounded once.
    Fma      => { name: "fma",      domain: guard::product_defined,  apply: |a: T, b: T| a.mul_add(b, T::zero()) },
}

impl UnaryKind {
    /// Returns the available functions in ascending order of name.
    pub fn available() -> Vec<Self>
    {
        let mut kinds: Vec<Self> = Self::ALL.iter()
            .copied()
            .filter(Self::is_available)
            .collect();
        kinds.sort_by_key(|kind| kind.name());
        kinds
    }

    /// Returns the available function names in ascending order.
    pub fn names() -> Vec<&'static str>
    {
        Self::available().iter().map(|kind| kind.name()).collect()
    }
}

impl BinaryKind {
    /// Returns every function in ascending order of name.
    pub fn available() -> Vec<Self>
    {
        let mut kinds = Self::ALL.to_vec();
        kinds.sort_by_key(|kind| kind.name());
        kinds
    }

    /// Returns the function names in ascending order.
    pub fn names() -> Vec<&'static str>
    {
        Self::available().iter().map(|kind| kind.name()).collect()
    }
}

impl std::fmt::Display for UnaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
