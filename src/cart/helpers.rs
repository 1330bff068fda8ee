//! Shopping Cart Formatting Helpers
//!
//! This module contains helper functions for presenting cart contents.

use super::models::LineItem;

/// Produces a human-readable one-line summary for a list of line items.
///
/// Example output: `"1x Laptop, 2x Mouse"`.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity(), i.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats an amount as dollars with two decimals and thousands separators.
///
/// Example output: `"$1,139.96"`, `"-$4.50"`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_quantities_in_insertion_order() {
        let items = vec![
            LineItem::new("Laptop", 999.99, 1).unwrap(),
            LineItem::new("Mouse", 29.99, 2).unwrap(),
        ];
        assert_eq!(format_item_summary(&items), "1x Laptop, 2x Mouse");
        assert_eq!(format_item_summary(&[]), "");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(1139.96), "$1,139.96");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-4.5), "-$4.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }
}
