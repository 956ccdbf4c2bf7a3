use crate::core::error::{MathError, MathResult};

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INPUT: i64 = 93;

/// Greatest common divisor by the Euclidean algorithm.
///
/// Works on absolute values, so the result is never negative. `gcd(0, 0)` is 0.
/// Returned as `u64` because `gcd(i64::MIN, 0)` is `2^63`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let mut x = a.unsigned_abs();
    let mut y = b.unsigned_abs();
    while y != 0 {
        let temp = y;
        y = x % y;
        x = temp;
    }
    x
}

/// Least common multiple, `|a| / gcd(a, b) * |b|`.
///
/// If either argument is zero the result is 0 (this also covers the `gcd == 0`
/// case). Fails with overflow when the multiple does not fit a `u64`.
pub fn lcm(a: i64, b: i64) -> MathResult<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a.unsigned_abs() / gcd(a, b))
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| MathError::overflow("lcm", format!("lcm({a}, {b}) exceeds u64")))
}

/// n-th Fibonacci number with `F(0) = 0` and `F(1) = 1`, using a rolling pair.
pub fn fibonacci(n: i64) -> MathResult<u64> {
    if n < 0 {
        return Err(MathError::domain(
            "fibonacci",
            format!("n must be non-negative, got {n}"),
        ));
    }
    if n > MAX_FIBONACCI_INPUT {
        return Err(MathError::overflow(
            "fibonacci",
            format!("F({n}) exceeds u64 (max n is {MAX_FIBONACCI_INPUT})"),
        ));
    }
    if n == 0 {
        return Ok(0);
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        let next = a
            .checked_add(b)
            .ok_or_else(|| MathError::overflow("fibonacci", format!("F({n}) exceeds u64")))?;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Trial division by every integer from 2 up to `floor(sqrt(n))`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    // i <= n / i is i * i <= n without the overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

fn check_selection(op: &'static str, n: i64, r: i64) -> MathResult<(u64, u64)> {
    if n < 0 {
        return Err(MathError::domain(op, format!("n must be non-negative, got {n}")));
    }
    if r < 0 || r > n {
        return Err(MathError::domain(op, format!("r must lie in [0, {n}], got {r}")));
    }
    Ok((n as u64, r as u64))
}

/// Number of ways to choose `r` of `n` items, `n! / (r! (n - r)!)`.
///
/// Built up one factor at a time as `C(n, i + 1) = C(n, i) * (n - i) / (i + 1)`
/// over the smaller of `r` and `n - r`. Every step divides exactly and the running
/// value never exceeds the final one, so this stays valid well past `n = 20`.
pub fn combination(n: i64, r: i64) -> MathResult<u64> {
    let (n, r) = check_selection("combination", n, r)?;
    let k = r.min(n - r);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return Err(MathError::overflow(
                "combination",
                format!("C({n}, {r}) exceeds u64"),
            ));
        }
    }
    Ok(acc as u64)
}

/// Number of ordered arrangements of `r` out of `n` items, `n! / (n - r)!`.
pub fn permutation(n: i64, r: i64) -> MathResult<u64> {
    let (n, r) = check_selection("permutation", n, r)?;
    ((n - r + 1)..=n).try_fold(1u64, |acc, factor| {
        acc.checked_mul(factor)
            .ok_or_else(|| MathError::overflow("permutation", format!("P({n}, {r}) exceeds u64")))
    })
}
