//! tests/numeric_snapshots.rs
//! Inline snapshots of small value tables.

use mathzy::{combination, factorial, fibonacci, is_prime, permutation, power};

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[test]
fn factorial_table() {
    let out = join((0..=12).map(|n| factorial(n).unwrap()));
    insta::assert_snapshot!(out, @"1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800, 39916800, 479001600");
}

#[test]
fn fibonacci_table() {
    let out = join((0..=20).map(|n| fibonacci(n).unwrap()));
    insta::assert_snapshot!(out, @"0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181, 6765");
}

#[test]
fn pascal_row_ten() {
    let out = join((0..=10).map(|r| combination(10, r).unwrap()));
    insta::assert_snapshot!(out, @"1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1");
}

#[test]
fn arrangements_of_six() {
    let out = join((0..=6).map(|r| permutation(6, r).unwrap()));
    insta::assert_snapshot!(out, @"1, 6, 30, 120, 360, 720, 720");
}

#[test]
fn primes_below_fifty() {
    let out = join((0..50).filter(|&n| is_prime(n)));
    insta::assert_snapshot!(out, @"2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47");
}

#[test]
fn powers_of_two() {
    let out = join((-3..=4).map(|e| power(2.0, e)));
    insta::assert_snapshot!(out, @"0.125, 0.25, 0.5, 1, 2, 4, 8, 16");
}
