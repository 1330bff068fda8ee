//! Shopping Cart Debugging Exercise
//!
//! This library provides a small in-memory shopping cart plus two standalone
//! exercises. Building with the `planted-bugs` feature swaps in deliberately
//! broken arithmetic for debugger practice.

// Domain modules
pub mod cart;
pub mod exercises;

// Infrastructure
pub mod error;

pub use cart::Cart;
pub use error::{CartError, ExerciseError};
