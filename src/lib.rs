//! mathzy: elementary numeric functions (factorial, integer power, gcd/lcm,
//! square root, Fibonacci, primality, combinations and permutations).
//!
//! Every fallible operation returns [`MathResult`]; domain and range violations
//! come back as [`MathError`] rather than sentinels or panics.
//!
//! ```
//! assert_eq!(mathzy::gcd(48, 18), 6);
//! assert_eq!(mathzy::combination(5, 2), Ok(10));
//! assert!(mathzy::sqrt(-1.0).is_err());
//! ```
pub mod core;

pub use crate::core::error::{ErrorKind, MathError, MathResult};
pub use crate::core::numeric::{
    combination, factorial, fibonacci, gcd, is_prime, lcm, permutation, power, sqrt,
    MAX_FACTORIAL_INPUT, MAX_FIBONACCI_INPUT,
};
