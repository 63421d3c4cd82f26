//! Email draft derivation and the mail-compose handoff URL.

use serde::{Deserialize, Serialize};

use crate::model::InvoiceRecord;

/// An editable mail-compose draft.
///
/// Defaults derive from the invoice once, when the compose step is
/// entered; afterwards the user owns the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Seed default recipient, subject, and body from the invoice and its
    /// formatted total.
    pub fn from_invoice(invoice: &InvoiceRecord, formatted_total: &str) -> Self {
        Self {
            recipient: invoice.client_email.clone(),
            subject: default_subject(&invoice.invoice_number, &invoice.company_name),
            body: default_body(invoice, formatted_total),
        }
    }

    /// `mailto:` URL with percent-encoded subject and body. The platform
    /// opens the user's mail client from this; there is no way to attach
    /// a file here, which is why composition is gated on a download.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body),
        )
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// `Invoice #<number> from <company>`, with `New` / `Your Company`
/// standing in for empty fields.
pub fn default_subject(invoice_number: &str, company_name: &str) -> String {
    format!(
        "Invoice #{} from {}",
        or_fallback(invoice_number, "New"),
        or_fallback(company_name, "Your Company"),
    )
}

fn default_body(invoice: &InvoiceRecord, formatted_total: &str) -> String {
    format!(
        "Dear {},\n\n\
         Please find attached the invoice #{}.\n\n\
         Total Amount: {}\n\n\
         If you have any questions, please don't hesitate to contact us.\n\n\
         Best regards,\n\
         {}",
        or_fallback(&invoice.client_name, "Client"),
        or_fallback(&invoice.invoice_number, "New"),
        formatted_total,
        or_fallback(&invoice.company_name, "Your Company"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn invoice() -> InvoiceRecord {
        InvoiceRecord {
            invoice_number: "INV-7".to_string(),
            client_name: "Jane Perera".to_string(),
            client_email: "jane@client.test".to_string(),
            company_name: "Acme".to_string(),
            ..InvoiceRecord::default()
        }
    }

    #[test]
    fn subject_names_invoice_and_company() {
        assert_eq!(default_subject("INV-7", "Acme"), "Invoice #INV-7 from Acme");
    }

    #[test]
    fn subject_falls_back_for_missing_fields() {
        assert_eq!(default_subject("", "Acme"), "Invoice #New from Acme");
        assert_eq!(
            default_subject("", ""),
            "Invoice #New from Your Company"
        );
    }

    #[test]
    fn draft_seeds_from_invoice() {
        let draft = EmailDraft::from_invoice(&invoice(), "LKR 132.00");

        assert_eq!(draft.recipient, "jane@client.test");
        assert_eq!(draft.subject, "Invoice #INV-7 from Acme");
        assert!(draft.body.starts_with("Dear Jane Perera,"));
        assert!(draft.body.contains("the invoice #INV-7."));
        assert!(draft.body.contains("Total Amount: LKR 132.00"));
        assert!(draft.body.ends_with("Best regards,\nAcme"));
    }

    #[test]
    fn mailto_url_encodes_subject_and_body() {
        let draft = EmailDraft {
            recipient: "jane@client.test".to_string(),
            subject: "Invoice #INV-7 from Acme".to_string(),
            body: "Line one\nLine two & three".to_string(),
        };

        assert_eq!(
            draft.mailto_url(),
            "mailto:jane@client.test\
             ?subject=Invoice%20%23INV-7%20from%20Acme\
             &body=Line%20one%0ALine%20two%20%26%20three"
        );
    }
}
