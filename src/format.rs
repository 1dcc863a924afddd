//! # format.rs
//!
//! General-notation rendering of floating-point numbers.
//!
//! `std::fmt` offers fixed (`{:.N}`) and scientific (`{:.Ne}`) notation but no
//! equivalent of C's `%g`, which picks between the two based on the decimal
//! exponent and strips insignificant zeros. Reference values are printed with
//! `%g` semantics so they can be pasted next to numbers produced by other
//! toolchains.

/// Significant digits used for function inputs.
pub const INPUT_DIGITS: usize = 12;

/// Significant digits used for function outputs; enough to round-trip an `f64`.
pub const OUTPUT_DIGITS: usize = 17;

/// Display adapter rendering a value in general notation.
///
/// # Example
/// ```rust
/// use math_refs::format::General;
///
/// assert_eq!(General::new(81.0, 17).to_string(), "81");
/// assert_eq!(General::new(1.0e-5, 12).to_string(), "1e-05");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct General
{
    value: f64,
    precision: usize,
}

impl General
{
    /// Creates an adapter printing `value` with `precision` significant digits.
    pub fn new(value: f64, precision: usize) -> Self
    {
        Self { value, precision }
    }
}

impl std::fmt::Display for General
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&general(self.value, self.precision))
    }
}

/// Formats `value` like `printf("%.*g", precision, value)`.
///
/// A precision of zero is treated as one. NaN prints as `nan` and infinities
/// as `inf` / `-inf`.
pub fn general(value: f64, precision: usize) -> String
{
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let precision = precision.max(1);
    // Rounding to `precision` digits first gives the exponent after any carry.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Removes trailing zeros of the fractional part, and the point if nothing is left.
fn trim_fraction(digits: &str) -> &str
{
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
