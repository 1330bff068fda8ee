//! Shopping Cart Domain Module
//!
//! This module contains the shopping cart business logic:
//! - Domain models (LineItem, CartSummary)
//! - The Cart aggregate and its validating mutators
//! - Formatting helpers

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use helpers::{format_currency, format_item_summary};
pub use models::{CartSummary, LineItem};
pub use state::Cart;
