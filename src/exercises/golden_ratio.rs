//! Golden ratio approximation from consecutive Fibonacci numbers.
//!
//! `fib` is deliberately recursive. With the `planted-bugs` feature it uses
//! the broken base cases (`n <= 0` and `n == 2`), which make `fib(1) == 0`
//! and turn the first approximation into a division by zero.

use crate::error::ExerciseError;
use tracing::debug;

/// Largest order the recursive `fib` is expected to handle in reasonable time.
pub const MAX_ORDER: u32 = 40;

/// n-th Fibonacci number, `fib(0) = 0`, `fib(1) = 1`.
#[cfg(not(feature = "planted-bugs"))]
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fib(n - 1) + fib(n - 2)
}

/// n-th Fibonacci number.
#[cfg(feature = "planted-bugs")]
pub fn fib(n: u32) -> u64 {
    fn go(n: i64) -> u64 {
        if n <= 0 {
            return 0;
        }
        if n == 2 {
            return 1;
        }
        go(n - 1) + go(n - 2)
    }
    go(i64::from(n))
}

/// Approximates phi as `fib(n) / fib(n - 1)`.
///
/// # Errors
///
/// [`ExerciseError::OrderTooSmall`] for `n < 2`, and
/// [`ExerciseError::DivisionByZero`] when `fib(n - 1)` is 0.
pub fn approx_phi(n: u32) -> Result<f64, ExerciseError> {
    if n < 2 {
        return Err(ExerciseError::OrderTooSmall { n });
    }

    let numerator = fib(n);
    let denominator = fib(n - 1);
    debug!(n, numerator, denominator, "approximating phi");

    if denominator == 0 {
        return Err(ExerciseError::DivisionByZero { n: n - 1 });
    }
    Ok(numerator as f64 / denominator as f64)
}

/// Approximations for every order in `2..=max_n`, stopping at the first error.
pub fn phi_table(max_n: u32) -> Result<Vec<(u32, f64)>, ExerciseError> {
    (2..=max_n).map(|n| approx_phi(n).map(|phi| (n, phi))).collect()
}
