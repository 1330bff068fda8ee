//! Shopping Cart State
//!
//! The [`Cart`] aggregate: an ordered list of line items plus a discount
//! rate. All mutators validate before touching state, so a failed call leaves
//! the cart exactly as it was.

use super::models::{default_quantity, CartSummary, LineItem};
use crate::error::CartError;

/// In-memory shopping cart.
///
/// Invariants: `discount_rate` is always in `[0, 1]` and every item satisfies
/// the [`LineItem`] checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    /// Line items in insertion order. Same-name entries are kept separate.
    items: Vec<LineItem>,

    /// Fraction taken off the subtotal, derived from a percentage.
    discount_rate: f64,
}

impl Cart {
    /// Creates an empty cart with no discount
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line item.
    ///
    /// # Errors
    ///
    /// [`CartError::InvalidPrice`] when `unit_price` is negative or not finite,
    /// [`CartError::InvalidQuantity`] when `quantity` is 0.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Result<(), CartError> {
        let item = LineItem::new(name, unit_price, quantity)?;
        self.items.push(item);
        Ok(())
    }

    /// Appends a single unit of a product.
    pub fn add_one(&mut self, name: impl Into<String>, unit_price: f64) -> Result<(), CartError> {
        self.add_item(name, unit_price, default_quantity())
    }

    /// Sets the discount from a percentage in `[0, 100]`.
    ///
    /// # Errors
    ///
    /// [`CartError::InvalidDiscount`] when `percent` is outside the range or NaN.
    pub fn set_discount(&mut self, percent: f64) -> Result<(), CartError> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(CartError::InvalidDiscount { percent });
        }
        self.discount_rate = percent / 100.0;
        Ok(())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `unit_price * quantity` over all items; 0 when empty.
    pub fn calculate_subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Amount taken off the subtotal by the current discount.
    pub fn discount_amount(&self) -> f64 {
        self.calculate_subtotal() * self.discount_rate
    }

    /// Final price after the discount: `subtotal * (1 - discount_rate)`.
    #[cfg(not(feature = "planted-bugs"))]
    pub fn calculate_total(&self) -> f64 {
        self.calculate_subtotal() * (1.0 - self.discount_rate)
    }

    /// Final price after the discount.
    #[cfg(feature = "planted-bugs")]
    pub fn calculate_total(&self) -> f64 {
        let subtotal = self.calculate_subtotal();
        let discount_amount = subtotal * self.discount_rate;
        subtotal * discount_amount
    }

    /// Total number of units across all line items.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }

    /// Removes every item and resets the discount.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount_rate = 0.0;
    }

    /// Snapshot of the cart and its computed figures
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            item_count: self.item_count(),
            subtotal: self.calculate_subtotal(),
            discount_rate: self.discount_rate,
            discount_amount: self.discount_amount(),
            total: self.calculate_total(),
        }
    }
}
