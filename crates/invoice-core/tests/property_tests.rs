//! Property-based tests for the invoice domain.
//!
//! Covers the totals algebra, filename derivation, mailto encoding, and
//! the email workflow's session invariants.

use invoice_core::{
    pdf_filename, totals, EmailDraft, EmailStep, EmailWorkflow, InvoiceItem, InvoiceRecord,
};
use proptest::collection::vec;
use proptest::prelude::*;

fn arb_item() -> impl Strategy<Value = InvoiceItem> {
    ("[ -~]{0,40}", 0.0f64..100_000.0).prop_map(|(description, price)| InvoiceItem {
        description,
        price,
    })
}

fn arb_items() -> impl Strategy<Value = Vec<InvoiceItem>> {
    vec(arb_item(), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Derived totals
    // ============================================================

    #[test]
    fn subtotal_is_the_sum_of_prices(items in arb_items()) {
        let expected: f64 = items.iter().map(|item| item.price).sum();
        prop_assert!((totals::subtotal(&items) - expected).abs() < 1e-6);
    }

    #[test]
    fn zero_rate_collects_no_tax(items in arb_items()) {
        prop_assert_eq!(totals::tax(&items, 0.0), 0.0);
        prop_assert_eq!(totals::total(&items, 0.0), totals::subtotal(&items));
    }

    #[test]
    fn total_is_subtotal_plus_tax(items in arb_items(), rate in 0.0f64..100.0) {
        let subtotal = totals::subtotal(&items);
        let tax = totals::tax(&items, rate);
        prop_assert_eq!(totals::total(&items, rate), subtotal + tax);
        prop_assert!(tax >= 0.0);
    }

    #[test]
    fn tax_scales_linearly_with_rate(items in arb_items(), rate in 0.0f64..100.0) {
        let expected = totals::subtotal(&items) * rate / 100.0;
        prop_assert!((totals::tax(&items, rate) - expected).abs() < 1e-6);
    }

    // ============================================================
    // Item-list policy
    // ============================================================

    #[test]
    fn items_never_empty_under_removal(
        items in vec(arb_item(), 1..10),
        removals in vec(0usize..12, 0..20),
    ) {
        let mut record = InvoiceRecord::default();
        record.replace_items(items);
        for index in removals {
            record.remove_item(index);
        }
        prop_assert!(!record.items.is_empty());
    }

    // ============================================================
    // Filename derivation
    // ============================================================

    #[test]
    fn filename_embeds_nonempty_invoice_numbers(number in "[A-Za-z0-9-]{1,16}") {
        prop_assert_eq!(pdf_filename(&number), format!("Invoice_{}.pdf", number));
    }

    // ============================================================
    // Mailto encoding
    // ============================================================

    #[test]
    fn mailto_query_never_contains_raw_separators(
        subject in "[ -~]{0,60}",
        body in "[ -~]{0,200}",
    ) {
        let draft = EmailDraft {
            recipient: "client@example.com".to_string(),
            subject,
            body,
        };
        let url = draft.mailto_url();
        prop_assert!(url.starts_with("mailto:client@example.com?subject="));

        let query = url.split_once('?').unwrap().1;
        let params: Vec<&str> = query.split('&').collect();
        // Exactly subject and body survive: every '&' in the text was encoded.
        prop_assert_eq!(params.len(), 2);
        prop_assert!(params[0].starts_with("subject="));
        prop_assert!(params[1].starts_with("body="));
        prop_assert!(!query.contains(' '));
        prop_assert!(!query.contains('\n'));
    }

    // ============================================================
    // Email workflow sessions
    // ============================================================

    #[test]
    fn reset_always_returns_to_download(complete_first in any::<bool>()) {
        let mut workflow = EmailWorkflow::new();
        if complete_first {
            workflow.complete_download(EmailDraft::default());
        }
        workflow.reset();

        prop_assert_eq!(workflow.step(), EmailStep::Download);
        prop_assert!(!workflow.downloaded());
        prop_assert!(workflow.draft().is_none());
    }

    #[test]
    fn compose_edits_survive_repeat_downloads(edit in "[ -~]{1,40}") {
        let mut workflow = EmailWorkflow::new();
        workflow.complete_download(EmailDraft::default());
        workflow.draft_mut().unwrap().subject = edit.clone();

        workflow.complete_download(EmailDraft::default());

        prop_assert_eq!(workflow.step(), EmailStep::Compose);
        prop_assert_eq!(&workflow.draft().unwrap().subject, &edit);
    }
}
