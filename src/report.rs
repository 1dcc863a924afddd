//! # report.rs
//!
//! Evaluation of the function tables and rendering of the reference listing.
//!
//! The listing starts with two `#` comment lines, then one block per
//! function: a `name:` header, one line per input and a blank line. Unary
//! blocks come first, each group in ascending order of name.

use std::f64::consts::PI;
use std::io::{self, Write};

use log::debug;

use crate::format::{General, INPUT_DIGITS, OUTPUT_DIGITS};
use crate::functions::{BinaryKind, UnaryKind};
use crate::values::Overrides;

/// Inputs shared by every unary function without an override.
pub const DEFAULT_INPUTS: [f64; 14] = [
    0.0,
    0.5,
    1.0,
    -0.5,
    -1.0,
    PI / 6.0,
    PI / 4.0,
    PI / 2.0,
    PI,
    3.0 * PI / 2.0,
    2.0 * PI,
    10.0,
    20.0,
    100.0,
];

/// Argument pairs shared by every binary function.
pub const DEFAULT_PAIRS: [(f64, f64); 5] = [
    (0.0, 1.0),
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (3.0, 4.0),
];

/// Evaluates a unary function, yielding NaN outside its domain.
pub fn evaluate_unary(kind: UnaryKind, x: f64) -> f64
{
    kind.apply(x).unwrap_or_else(|err| {
        debug!("{err} for {}; writing nan", General::new(x, INPUT_DIGITS));
        f64::NAN
    })
}

/// Evaluates a binary function, yielding NaN outside its domain.
pub fn evaluate_binary(kind: BinaryKind, a: f64, b: f64) -> f64
{
    kind.apply(a, b).unwrap_or_else(|err| {
        debug!(
            "{err} for ({}, {}); writing nan",
            General::new(a, INPUT_DIGITS),
            General::new(b, INPUT_DIGITS)
        );
        f64::NAN
    })
}

/// Reference listing over the built-in tables.
pub struct Report<'a>
{
    overrides: &'a Overrides,
    runtime: &'a str,
}

impl<'a> Report<'a>
{
    /// Creates a report using `overrides` for the unary inputs, stamped with
    /// the version of the compiler this binary was built with.
    pub fn new(overrides: &'a Overrides) -> Self
    {
        Self {
            overrides,
            runtime: crate::runtime_version(),
        }
    }

    /// Replaces the version printed in the header.
    pub fn with_runtime(mut self, runtime: &'a str) -> Self
    {
        self.runtime = runtime;
        self
    }

    /// Inputs used for `kind`: its override if present, else the defaults.
    pub fn inputs(&self, kind: UnaryKind) -> &[f64]
    {
        self.overrides.get(kind.name()).unwrap_or(&DEFAULT_INPUTS)
    }

    /// Writes the whole listing to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()>
    {
        writeln!(out, "# Rust {}", self.runtime)?;
        writeln!(out, "# std math reference values")?;

        for kind in UnaryKind::available() {
            self.write_unary(out, kind)?;
        }
        for kind in BinaryKind::available() {
            self.write_binary(out, kind)?;
        }
        Ok(())
    }

    fn write_unary<W: Write>(&self, out: &mut W, kind: UnaryKind) -> io::Result<()>
    {
        writeln!(out, "{kind}:")?;
        for &x in self.inputs(kind) {
            writeln!(
                out,
                "  {} -> {}",
                General::new(x, INPUT_DIGITS),
                General::new(evaluate_unary(kind, x), OUTPUT_DIGITS)
            )?;
        }
        writeln!(out)
    }

    fn write_binary<W: Write>(&self, out: &mut W, kind: BinaryKind) -> io::Result<()>
    {
        writeln!(out, "{kind}:")?;
        for &(a, b) in DEFAULT_PAIRS.iter() {
            writeln!(
                out,
                "  ({}, {}) -> {}",
                General::new(a, INPUT_DIGITS),
                General::new(b, INPUT_DIGITS),
                General::new(evaluate_binary(kind, a, b), OUTPUT_DIGITS)
            )?;
        }
        writeln!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    fn render(overrides: &Overrides) -> String {
        let mut out = Vec::new();
        Report::new(overrides)
            .with_runtime("1.0.0")
            .write_to(&mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Splits the listing into `(name, lines)` blocks.
    fn blocks(listing: &str) -> Vec<(String, Vec<String>)> {
        let mut blocks = Vec::new();
        let mut current: Option<(String, Vec<String>)> = None;
        for line in listing.lines().filter(|line| !line.starts_with('#')) {
            if let Some(name) = line.strip_suffix(':') {
                current = Some((name.to_string(), Vec::new()));
            } else if line.is_empty() {
                blocks.extend(current.take());
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line.to_string());
            }
        }
        blocks
    }

    fn block<'b>(blocks: &'b [(String, Vec<String>)], name: &str) -> &'b [String] {
        &blocks.iter().find(|(n, _)| n == name).unwrap().1
    }

    #[test]
    fn test_header() {
        let listing = render(&Overrides::new());
        let mut lines = listing.lines();
        assert_eq!(lines.next(), Some("# Rust 1.0.0"));
        assert_eq!(lines.next(), Some("# std math reference values"));
        assert_eq!(lines.next(), Some("acos:"));
    }

    #[test]
    fn test_default_block_sizes() {
        let listing = render(&Overrides::new());
        let blocks = blocks(&listing);
        let unary = UnaryKind::names();
        let binary = BinaryKind::names();
        assert_eq!(blocks.len(), unary.len() + binary.len());
        for (name, lines) in &blocks {
            if unary.contains(&name.as_str()) {
                assert_eq!(lines.len(), DEFAULT_INPUTS.len(), "{name}");
            } else {
                assert_eq!(lines.len(), DEFAULT_PAIRS.len(), "{name}");
            }
        }
    }

    #[test]
    fn test_block_order() {
        let listing = render(&Overrides::new());
        let names: Vec<String> = blocks(&listing).into_iter().map(|(name, _)| name).collect();
        let expected: Vec<String> = UnaryKind::names()
            .into_iter()
            .chain(BinaryKind::names())
            .map(str::to_string)
            .collect();
        assert_eq!(names, expected);
        assert_eq!(names.last().map(String::as_str), Some("pow"));
    }

    #[test]
    fn test_override_replaces_inputs() {
        let overrides = values::parse("sin=0,0.5,1.0").unwrap();
        let listing = render(&overrides);
        let blocks = blocks(&listing);

        let sin = block(&blocks, "sin");
        assert_eq!(sin.len(), 3);
        assert_eq!(sin[0], "  0 -> 0");
        assert!(sin[1].starts_with("  0.5 -> 0.4794255386"));
        assert!(sin[2].starts_with("  1 -> 0.841470984807896"));

        // other functions keep the defaults
        assert_eq!(block(&blocks, "cos").len(), DEFAULT_INPUTS.len());
    }

    #[test]
    fn test_override_does_not_touch_binary() {
        let overrides = values::parse("pow=2,3").unwrap();
        let listing = render(&overrides);
        assert_eq!(block(&blocks(&listing), "pow").len(), DEFAULT_PAIRS.len());
    }

    #[test]
    fn test_unknown_override_is_ignored() {
        let overrides = values::parse("sine=1,2").unwrap();
        assert_eq!(render(&overrides), render(&Overrides::new()));
    }

    #[test]
    fn test_domain_error_prints_nan() {
        let listing = render(&Overrides::new());
        let blocks = blocks(&listing);
        let sqrt = block(&blocks, "sqrt");
        assert!(sqrt.contains(&"  -1 -> nan".to_string()));
        assert!(sqrt.contains(&"  100 -> 10".to_string()));
        assert!(block(&blocks, "log").contains(&"  0 -> nan".to_string()));
        assert!(block(&blocks, "atanh").contains(&"  1 -> nan".to_string()));
    }

    #[test]
    fn test_overflow_prints_inf() {
        let overrides = values::parse("exp=1000,710 cosh=-1000").unwrap();
        let listing = render(&overrides);
        let blocks = blocks(&listing);
        assert_eq!(block(&blocks, "exp"), ["  1000 -> inf", "  710 -> inf"]);
        assert_eq!(block(&blocks, "cosh"), ["  -1000 -> inf"]);
    }

    #[test]
    fn test_infinite_input_inside_domain() {
        let overrides = values::parse("log=inf sqrt=inf atan=-inf exp=-inf").unwrap();
        let listing = render(&overrides);
        let blocks = blocks(&listing);
        assert_eq!(block(&blocks, "log"), ["  inf -> inf"]);
        assert_eq!(block(&blocks, "sqrt"), ["  inf -> inf"]);
        assert_eq!(block(&blocks, "exp"), ["  -inf -> 0"]);
        assert!(block(&blocks, "atan")[0].starts_with("  -inf -> -1.570796326794896"));
    }

    #[test]
    fn test_binary_lines() {
        let listing = render(&Overrides::new());
        let blocks = blocks(&listing);
        let pow = block(&blocks, "pow");
        assert_eq!(pow[4], "  (3, 4) -> 81");
        assert_eq!(pow[0], "  (0, 1) -> 0");
        assert_eq!(block(&blocks, "hypot")[4], "  (3, 4) -> 5");
        assert_eq!(block(&blocks, "copysign")[3], "  (1, -1) -> -1");
        assert_eq!(block(&blocks, "fma")[4], "  (3, 4) -> 12");
    }

    #[test]
    fn test_default_inputs_rendering() {
        let listing = render(&Overrides::new());
        let inputs: Vec<String> = block(&blocks(&listing), "exp")
            .iter()
            .map(|line| line.trim_start().split(" -> ").next().unwrap().to_string())
            .collect();
        assert_eq!(inputs[..5], ["0", "0.5", "1", "-0.5", "-1"]);
        assert_eq!(inputs[5], "0.523598775598");
        assert_eq!(inputs[8], "3.14159265359");
        assert_eq!(inputs[13], "100");
    }

    #[test]
    fn test_evaluate() {
        assert!(evaluate_unary(UnaryKind::Acos, 2.0).is_nan());
        assert_eq!(evaluate_unary(UnaryKind::Sqrt, 4.0), 2.0);
        assert!(evaluate_binary(BinaryKind::Pow, 0.0, -1.0).is_nan());
        assert_eq!(evaluate_binary(BinaryKind::Pow, 2.0, 10.0), 1024.0);
    }
}
