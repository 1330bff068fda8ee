//! Shopping Cart Domain Models
//!
//! This module contains the line item type and the serializable cart
//! snapshot used for reporting.

use crate::error::CartError;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Returns the default quantity (1) for line items
pub fn default_quantity() -> u32 {
    1
}

/// One product entry in the cart.
///
/// Fields are private: a `LineItem` can only be built through
/// [`LineItem::new`] (or deserialized through the same checks), so every
/// instance holds a non-negative price and a quantity of at least 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "RawLineItem")]
pub struct LineItem {
    /// Name of the product
    name: String,

    /// Price of a single unit
    unit_price: f64,

    /// Number of units
    quantity: u32,
}

impl LineItem {
    /// Validates the inputs and builds a line item.
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: u32) -> Result<Self, CartError> {
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(CartError::InvalidPrice { price: unit_price });
        }
        if quantity == 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        Ok(Self {
            name: name.into(),
            unit_price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Unchecked wire form of a [`LineItem`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLineItem {
    name: String,
    unit_price: f64,
    #[serde(default = "default_quantity")]
    quantity: u32,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = CartError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        LineItem::new(raw.name, raw.unit_price, raw.quantity)
    }
}

/// Point-in-time view of a cart, for display or JSON output
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub items: Vec<LineItem>,
    pub item_count: u64,
    pub subtotal: f64,
    pub discount_rate: f64,
    pub discount_amount: f64,
    pub total: f64,
}
