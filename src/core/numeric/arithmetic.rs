use crate::core::error::{MathError, MathResult};

/// Largest `n` whose factorial fits in a `u64` (`20! = 2_432_902_008_176_640_000`).
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Computes `n!` iteratively.
///
/// `0!` and `1!` are both 1. Negative `n` is a domain error and anything above
/// [`MAX_FACTORIAL_INPUT`] is reported as overflow instead of wrapping.
pub fn factorial(n: i64) -> MathResult<u64> {
    if n < 0 {
        return Err(MathError::domain(
            "factorial",
            format!("n must be non-negative, got {n}"),
        ));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(MathError::overflow(
            "factorial",
            format!("{n}! exceeds u64 (max n is {MAX_FACTORIAL_INPUT})"),
        ));
    }
    Ok((2..=n as u64).product())
}

fn pow_unsigned(base: f64, mut exp: u32) -> f64 {
    let mut square = base;
    let mut result = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= square;
        }
        exp >>= 1;
        if exp > 0 {
            square *= square;
        }
    }
    result
}

/// Raises `base` to an integer `exponent` by repeated squaring.
///
/// A negative exponent yields the reciprocal of the positive power, so
/// `power(0.0, -1)` follows IEEE division and returns infinity. Any base to the
/// zeroth power is 1.
pub fn power(base: f64, exponent: i32) -> f64 {
    let magnitude = exponent.unsigned_abs();
    let positive = pow_unsigned(base, magnitude);
    if exponent >= 0 {
        return positive;
    }
    // positive power overflowed but the reciprocal may still be subnormal
    if positive.is_infinite() && base.is_finite() && base != 0.0 {
        pow_unsigned(1.0 / base, magnitude)
    } else {
        1.0 / positive
    }
}

/// Non-negative square root. Negative and NaN inputs are domain errors.
pub fn sqrt(value: f64) -> MathResult<f64> {
    if value.is_nan() || value < 0.0 {
        return Err(MathError::domain(
            "sqrt",
            format!("value must be non-negative, got {value}"),
        ));
    }
    Ok(value.sqrt())
}
