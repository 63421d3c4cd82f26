//! Derived totals: subtotal, tax, and total.
//!
//! Pure over `(items, tax_rate)`; nothing is cached or stored, and no
//! rounding happens here. Rounding is a display concern (see
//! [`crate::currency`]).

use serde::Serialize;

use crate::model::{InvoiceItem, InvoiceRecord};

fn item_price(item: &InvoiceItem) -> f64 {
    // A price that never parsed (NaN from the form) counts as 0.
    if item.price.is_finite() {
        item.price
    } else {
        0.0
    }
}

/// Sum of item prices. `subtotal(&[]) == 0.0`.
pub fn subtotal(items: &[InvoiceItem]) -> f64 {
    items.iter().map(item_price).sum()
}

/// Tax amount for a rate given in percent.
pub fn tax(items: &[InvoiceItem], tax_rate: f64) -> f64 {
    subtotal(items) * (tax_rate / 100.0)
}

/// Subtotal plus tax.
pub fn total(items: &[InvoiceItem], tax_rate: f64) -> f64 {
    subtotal(items) + tax(items, tax_rate)
}

/// A snapshot of the three derived values for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl Totals {
    pub fn of(record: &InvoiceRecord) -> Self {
        Self {
            subtotal: subtotal(&record.items),
            tax: tax(&record.items, record.tax_rate),
            total: total(&record.items, record.tax_rate),
        }
    }
}
