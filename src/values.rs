//! # values.rs
//!
//! Per-function input overrides.
//!
//! Overrides are given as one string of whitespace-separated entries
//! `name=v1,v2,...`, for example `"sin=0,0.5,1.0 cos=0,1.0"`. The listed
//! values replace the default inputs of the named unary function.

use std::collections::BTreeMap;
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

use crate::functions;

/// Error produced while parsing an override string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValuesError {
    /// An entry has no `=` between name and values.
    #[error("invalid --values entry: {0}")]
    MissingSeparator(String),
    /// Nothing follows the `=` of an entry.
    #[error("no values for {0}")]
    EmptyValues(String),
    /// A value is not a floating-point literal.
    #[error("invalid value {value:?} for {name}: {source}")]
    InvalidNumber {
        name: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Input lists keyed by function name.
///
/// Names are not checked against the registries; entries for unknown names
/// are kept and simply never looked up. Use [`Overrides::unknown_names`] to
/// report them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides
{
    map: BTreeMap<String, Vec<f64>>,
}

impl Overrides
{
    /// Creates an empty set of overrides.
    pub fn new() -> Self { Self::default() }

    /// Replaces the inputs of `name`.
    pub fn insert<S>(&mut self, name: S, values: Vec<f64>)
    where
        String: From<S>,
    {
        self.map.insert(String::from(name), values);
    }

    /// Retrieves the inputs given for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&[f64]>
    {
        self.map.get(name).map(Vec::as_slice)
    }

    /// Returns the number of overridden names.
    pub fn len(&self) -> usize { self.map.len() }

    /// Returns true if nothing is overridden.
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    /// Returns the overridden names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str>
    {
        self.map.keys().map(String::as_str)
    }

    /// Returns the overridden names that match no registry entry.
    pub fn unknown_names(&self) -> Vec<&str>
    {
        self.names()
            .filter(|name| !functions::is_known(name))
            .collect()
    }
}

impl FromStr for Overrides
{
    type Err = ValuesError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        parse(s)
    }
}

/// Parses an override string such as `"sin=0,0.5,1.0 cos=0,1.0"`.
///
/// Each entry is split at its first `=`. A later entry for the same name
/// replaces an earlier one. Values may group digits with single underscores
/// (`1_000.5`); an underscore anywhere else makes the value invalid.
///
/// # Errors
///
/// Returns [`ValuesError`] on the first malformed entry.
pub fn parse(raw: &str) -> Result<Overrides, ValuesError>
{
    let mut overrides = Overrides::new();
    for chunk in raw.split_whitespace() {
        let Some((name, values)) = chunk.split_once('=') else {
            return Err(ValuesError::MissingSeparator(chunk.to_string()));
        };
        if values.is_empty() {
            return Err(ValuesError::EmptyValues(name.to_string()));
        }
        let values = values
            .split(',')
            .map(|value| {
                parse_number(value).map_err(|source| ValuesError::InvalidNumber {
                    name: name.to_string(),
                    value: value.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        overrides.insert(name, values);
    }
    Ok(overrides)
}

/// Parses a float literal, dropping underscores that sit between two digits.
fn parse_number(value: &str) -> Result<f64, ParseFloatError>
{
    if !value.contains('_') {
        return value.parse();
    }
    let bytes = value.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if grouped {
        value.replace('_', "").parse()
    } else {
        value.parse()
    }
}
