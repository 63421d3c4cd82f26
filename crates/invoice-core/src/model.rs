//! The invoice record and its mutation surface.
//!
//! The record stores inputs only; subtotal, tax, and total are derived on
//! read (see [`crate::totals`]). All mutations flow through two total
//! operations: [`InvoiceRecord::apply`] shallow-merges top-level fields
//! and [`InvoiceRecord::replace_items`] swaps the line-item list
//! wholesale. The single-field item helpers are conveniences the form
//! uses on top of the same list.

use serde::{Deserialize, Serialize};

/// One billable entry within an invoice.
///
/// Identity is positional: removing or reordering items shifts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    /// Monetary amount in the display currency. Not validated at entry.
    #[serde(default)]
    pub price: f64,
}

impl InvoiceItem {
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            price: 0.0,
        }
    }
}

/// The canonical mutable invoice record.
///
/// Dates are ISO-8601 `YYYY-MM-DD` strings. `company_email` is free text
/// and in practice holds either an email address or a phone number,
/// depending on the deployment. Field names serialize camelCase to match
/// the form's wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub invoice_number: String,
    pub date: String,
    pub due_date: String,
    pub client_name: String,
    pub client_email: String,
    pub company_name: String,
    pub company_email: String,
    pub items: Vec<InvoiceItem>,
    pub notes: String,
    pub terms: String,
    /// Percentage, 0-100 by form convention.
    pub tax_rate: f64,
}

impl Default for InvoiceRecord {
    fn default() -> Self {
        Self {
            invoice_number: String::new(),
            date: String::new(),
            due_date: String::new(),
            client_name: String::new(),
            client_email: String::new(),
            company_name: String::new(),
            company_email: String::new(),
            items: vec![InvoiceItem::blank()],
            notes: String::new(),
            terms: String::new(),
            tax_rate: 0.0,
        }
    }
}

/// Shallow patch of the record's top-level scalar fields.
///
/// Absent fields leave the record untouched. Line items are replaced
/// wholesale through [`InvoiceRecord::replace_items`] instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePatch {
    pub invoice_number: Option<String>,
    pub date: Option<String>,
    pub due_date: Option<String>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub company_name: Option<String>,
    pub company_email: Option<String>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub tax_rate: Option<f64>,
}

impl InvoiceRecord {
    /// Shallow-merge a patch. Total: never fails, unknown state is
    /// impossible because the patch carries only known fields.
    pub fn apply(&mut self, patch: InvoicePatch) {
        let InvoicePatch {
            invoice_number,
            date,
            due_date,
            client_name,
            client_email,
            company_name,
            company_email,
            notes,
            terms,
            tax_rate,
        } = patch;

        if let Some(value) = invoice_number {
            self.invoice_number = value;
        }
        if let Some(value) = date {
            self.date = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        if let Some(value) = client_name {
            self.client_name = value;
        }
        if let Some(value) = client_email {
            self.client_email = value;
        }
        if let Some(value) = company_name {
            self.company_name = value;
        }
        if let Some(value) = company_email {
            self.company_email = value;
        }
        if let Some(value) = notes {
            self.notes = value;
        }
        if let Some(value) = terms {
            self.terms = value;
        }
        if let Some(value) = tax_rate {
            self.tax_rate = value;
        }
    }

    /// Replace the whole line-item list.
    pub fn replace_items(&mut self, items: Vec<InvoiceItem>) {
        self.items = items;
    }

    /// Append a blank line item.
    pub fn add_item(&mut self) {
        self.items.push(InvoiceItem::blank());
    }

    /// Remove the item at `index`.
    ///
    /// The last remaining item cannot be removed; that call (and any
    /// out-of-bounds index) is a no-op. The invariant that `items` never
    /// empties during a session lives here, not in the record itself.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Edit one item's description. Out-of-bounds indices are ignored.
    pub fn set_item_description(&mut self, index: usize, description: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.description = description.to_string();
        }
    }

    /// Edit one item's price. Out-of-bounds indices are ignored.
    pub fn set_item_price(&mut self, index: usize, price: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record_with_items(prices: &[f64]) -> InvoiceRecord {
        let mut record = InvoiceRecord::default();
        record.replace_items(
            prices
                .iter()
                .enumerate()
                .map(|(i, &price)| InvoiceItem {
                    description: format!("Item {}", i + 1),
                    price,
                })
                .collect(),
        );
        record
    }

    #[test]
    fn default_record_has_one_blank_item() {
        let record = InvoiceRecord::default();
        assert_eq!(record.items, vec![InvoiceItem::blank()]);
        assert_eq!(record.tax_rate, 0.0);
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut record = InvoiceRecord::default();
        record.client_name = "Acme Ltd".to_string();

        record.apply(InvoicePatch {
            invoice_number: Some("INV-7".to_string()),
            tax_rate: Some(12.5),
            ..InvoicePatch::default()
        });

        assert_eq!(record.invoice_number, "INV-7");
        assert_eq!(record.tax_rate, 12.5);
        assert_eq!(record.client_name, "Acme Ltd"); // untouched
    }

    #[test]
    fn patch_deserializes_from_camel_case_json() {
        let patch: InvoicePatch =
            serde_json::from_str(r#"{"clientEmail":"billing@acme.test","dueDate":"2026-09-01"}"#)
                .unwrap();
        assert_eq!(patch.client_email.as_deref(), Some("billing@acme.test"));
        assert_eq!(patch.due_date.as_deref(), Some("2026-09-01"));
        assert_eq!(patch.invoice_number, None);
    }

    #[test]
    fn add_item_appends_blank() {
        let mut record = record_with_items(&[100.0]);
        record.add_item();
        assert_eq!(record.items.len(), 2);
        assert_eq!(record.items[1], InvoiceItem::blank());
    }

    #[test]
    fn remove_item_keeps_the_last_remaining_item() {
        let mut record = record_with_items(&[100.0]);
        record.remove_item(0);
        assert_eq!(record.items.len(), 1);
    }

    #[test]
    fn remove_first_of_two_leaves_the_second() {
        let mut record = record_with_items(&[100.0, 20.0]);
        record.remove_item(0);
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].price, 20.0);
        assert_eq!(record.items[0].description, "Item 2");
    }

    #[test]
    fn remove_item_out_of_bounds_is_a_noop() {
        let mut record = record_with_items(&[100.0, 20.0]);
        record.remove_item(5);
        assert_eq!(record.items.len(), 2);
    }

    #[test]
    fn single_field_item_edits() {
        let mut record = record_with_items(&[0.0]);
        record.set_item_description(0, "Design work");
        record.set_item_price(0, 150.0);
        record.set_item_price(3, 999.0); // ignored

        assert_eq!(record.items[0].description, "Design work");
        assert_eq!(record.items[0].price, 150.0);
    }

    #[test]
    fn item_price_defaults_to_zero_when_absent() {
        let item: InvoiceItem = serde_json::from_str(r#"{"description":"Hosting"}"#).unwrap();
        assert_eq!(item.price, 0.0);
    }
}
