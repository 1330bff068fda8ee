//! Error types for the cart and the exercise functions.

use thiserror::Error;

/// Invalid input rejected by [`Cart`](crate::cart::Cart) mutators.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CartError {
    #[error("price cannot be negative (got {price})")]
    InvalidPrice { price: f64 },
    #[error("quantity must be at least 1 (got {quantity})")]
    InvalidQuantity { quantity: u32 },
    #[error("discount must be between 0 and 100 (got {percent})")]
    InvalidDiscount { percent: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error("cannot average an empty list")]
    EmptyInput,
    #[error("n must be >= 2 (got {n})")]
    OrderTooSmall { n: u32 },
    #[error("division by zero: fib({n}) is 0")]
    DivisionByZero { n: u32 },
}
