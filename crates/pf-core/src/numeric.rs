use crate::PfError;

/// Floating point type used for every mass-flow value.
pub type Real = f64;

/// Absolute/relative tolerance pair used for mass-balance checks.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// Format `v` like C's `%g` with `digits` significant digits.
///
/// Fixed notation when the decimal exponent `x` satisfies `-4 <= x < digits`,
/// exponent notation (`1e+20`, `1e-07`) otherwise. Trailing zeros and a
/// trailing decimal point are removed in both forms.
pub fn format_general(v: Real, digits: usize) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let digits = digits.max(1);
    // Rounding to `digits` first fixes the exponent, e.g. 9.9999995 -> 1.00000e1.
    let sci = format!("{:.*e}", digits - 1, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp >= -4 && exp < digits as i32 {
        let decimals = (digits as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{v:.decimals$}")).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
