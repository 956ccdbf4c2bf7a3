//! Elementary numeric functions. Everything here is pure: no shared state, safe
//! to call from any number of threads.

pub mod arithmetic;
pub mod discrete_math;

pub use arithmetic::{factorial, power, sqrt, MAX_FACTORIAL_INPUT};
pub use discrete_math::{
    combination, fibonacci, gcd, is_prime, lcm, permutation, MAX_FIBONACCI_INPUT,
};
