//! Deployment branding and new-invoice defaults.
//!
//! One parameterized entry point replaces per-deployment page copies: the
//! session takes a `Branding` and derives its starting record from it.

use serde::{Deserialize, Serialize};

use crate::model::InvoiceRecord;

/// Per-deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branding {
    pub company_name: String,
    /// Free text; some deployments put a phone number here.
    pub company_email: String,
    /// ISO 4217 code used by the display formatter.
    pub currency_code: String,
    /// Prefix pre-typed into the invoice-number field, e.g. `INV-`.
    pub invoice_number_prefix: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            company_email: String::new(),
            currency_code: "USD".to_string(),
            invoice_number_prefix: "INV-".to_string(),
        }
    }
}

impl Branding {
    /// Starting record for a new session: branded company fields, the
    /// number prefix, today's date, and one blank line item.
    pub fn new_invoice(&self, today: &str) -> InvoiceRecord {
        InvoiceRecord {
            invoice_number: self.invoice_number_prefix.clone(),
            date: today.to_string(),
            company_name: self.company_name.clone(),
            company_email: self.company_email.clone(),
            ..InvoiceRecord::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InvoiceItem;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_invoice_carries_branding_and_today() {
        let branding = Branding {
            company_name: "Lightspeed Labs".to_string(),
            company_email: "lightspeedlabs.io@gmail.com".to_string(),
            currency_code: "LKR".to_string(),
            invoice_number_prefix: "INV-".to_string(),
        };

        let record = branding.new_invoice("2026-08-06");

        assert_eq!(record.invoice_number, "INV-");
        assert_eq!(record.date, "2026-08-06");
        assert_eq!(record.due_date, "");
        assert_eq!(record.company_name, "Lightspeed Labs");
        assert_eq!(record.company_email, "lightspeedlabs.io@gmail.com");
        assert_eq!(record.items, vec![InvoiceItem::blank()]);
    }

    #[test]
    fn branding_deserializes_partially() {
        let branding: Branding =
            serde_json::from_str(r#"{"companyName":"Acme","currencyCode":"EUR"}"#).unwrap();
        assert_eq!(branding.company_name, "Acme");
        assert_eq!(branding.currency_code, "EUR");
        assert_eq!(branding.invoice_number_prefix, "INV-"); // default kept
    }
}
