//! Stateful invoice session.
//!
//! Holds the invoice record, the export pipeline, and the guided email
//! workflow in Rust; JavaScript handles DOM events and passes the preview
//! element in when an export is requested.

use invoice_core::{
    dates, Branding, CurrencyFormat, EmailDraft, EmailStep, EmailWorkflow, ExportError,
    InvoiceItem, InvoicePatch, InvoiceRecord, Totals,
};
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::exporter::{trigger_download, ExportArtifact, PdfExporter};
use crate::platform;

/// How long the clipboard acknowledgment stays visible.
const COPY_ACK_MS: f64 = 2000.0;

/// Session state for one invoice being edited, previewed, and exported.
#[wasm_bindgen]
pub struct InvoiceSession {
    invoice: InvoiceRecord,
    currency: CurrencyFormat,
    workflow: EmailWorkflow,
    exporter: PdfExporter,
    artifact: Option<ExportArtifact>,
    exporting: bool,
    copied_at: Option<f64>,
    preview_activator: Option<Function>,
}

impl InvoiceSession {
    /// Internal constructor, testable without a JS environment.
    fn new_internal(branding: Branding, today: &str) -> Self {
        let invoice = branding.new_invoice(today);
        let currency = CurrencyFormat::new(branding.currency_code);
        Self {
            invoice,
            currency,
            workflow: EmailWorkflow::new(),
            exporter: PdfExporter::new(),
            artifact: None,
            exporting: false,
            copied_at: None,
            preview_activator: None,
        }
    }

    /// Draft defaults for the compose step, derived from the current
    /// record and its formatted total.
    fn seeded_draft(&self) -> EmailDraft {
        let totals = Totals::of(&self.invoice);
        EmailDraft::from_invoice(&self.invoice, &self.currency.format(totals.total))
    }

    /// Replace the stored artifact, revoking the superseded object URL.
    fn store_artifact(&mut self, artifact: ExportArtifact) {
        if let Some(previous) = self.artifact.take() {
            previous.revoke();
        }
        self.artifact = Some(artifact);
    }

    fn activate_preview(&self) {
        if let Some(ref activator) = self.preview_activator {
            let _ = activator.call0(&JsValue::NULL);
        }
    }

    /// Full export-and-save sequence: activate the preview, let it paint,
    /// rasterize it, save to disk. Errors are logged here, at the
    /// pipeline boundary, and surfaced as one notice.
    async fn export_and_save(&mut self, preview: &Element) -> Result<(), ExportError> {
        if self.exporting {
            return Err(ExportError::RenderFailure(
                "an export is already in flight".to_string(),
            ));
        }

        self.exporting = true;
        let result = self.export_and_save_inner(preview).await;
        self.exporting = false;

        if let Err(ref error) = result {
            web_sys::console::error_1(&JsValue::from_str(&error.to_string()));
        }
        result
    }

    async fn export_and_save_inner(&mut self, preview: &Element) -> Result<(), ExportError> {
        // The preview may be hidden behind the form tab; it must be
        // visible and painted before capture or the PDF comes out blank.
        self.activate_preview();
        let _ = platform::next_frame().await;

        let filename = invoice_core::pdf_filename(&self.invoice.invoice_number);
        let artifact = self.exporter.export_to_pdf(preview, &filename).await?;
        self.store_artifact(artifact);

        if let Some(artifact) = self.artifact.as_ref() {
            trigger_download(artifact)?;
        }
        Ok(())
    }
}

#[wasm_bindgen]
impl InvoiceSession {
    /// Create a session for the given deployment branding
    /// (e.g. `{ companyName, companyEmail, currencyCode, invoiceNumberPrefix }`).
    /// Pass `undefined` for neutral defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(branding: JsValue) -> Result<InvoiceSession, JsValue> {
        let branding: Branding = if branding.is_undefined() || branding.is_null() {
            Branding::default()
        } else {
            serde_wasm_bindgen::from_value(branding)
                .map_err(|e| JsValue::from_str(&format!("Invalid branding: {e}")))?
        };
        Ok(Self::new_internal(branding, &today_iso()))
    }

    /// Load the PDF rasterizer. Call once at startup, before any export.
    #[wasm_bindgen(js_name = initRenderer)]
    pub async fn init_renderer(&mut self) -> Result<(), JsValue> {
        self.exporter.init().await.map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = rendererReady)]
    pub fn renderer_ready(&self) -> bool {
        self.exporter.is_ready()
    }

    // --- invoice record ---

    /// Current invoice record as a plain JS object.
    pub fn invoice(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.invoice)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Shallow-merge top-level fields, e.g. `{ clientName: "Acme" }`.
    /// Line items go through `replaceItems` and the item setters instead.
    #[wasm_bindgen(js_name = patchInvoice)]
    pub fn patch_invoice(&mut self, patch: JsValue) -> Result<(), JsValue> {
        let patch: InvoicePatch = serde_wasm_bindgen::from_value(patch)
            .map_err(|e| JsValue::from_str(&format!("Invalid patch: {e}")))?;
        self.invoice.apply(patch);
        Ok(())
    }

    /// Replace the whole line-item list.
    #[wasm_bindgen(js_name = replaceItems)]
    pub fn replace_items(&mut self, items: JsValue) -> Result<(), JsValue> {
        let items: Vec<InvoiceItem> = serde_wasm_bindgen::from_value(items)
            .map_err(|e| JsValue::from_str(&format!("Invalid items: {e}")))?;
        self.invoice.replace_items(items);
        Ok(())
    }

    /// Append a blank line item.
    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(&mut self) {
        self.invoice.add_item();
    }

    /// Remove a line item. Removing the last remaining item is a no-op;
    /// the form disables that button, and the session enforces it too.
    #[wasm_bindgen(js_name = removeItem)]
    pub fn remove_item(&mut self, index: usize) {
        self.invoice.remove_item(index);
    }

    #[wasm_bindgen(js_name = setItemDescription)]
    pub fn set_item_description(&mut self, index: usize, description: &str) {
        self.invoice.set_item_description(index, description);
    }

    /// Set a line item's price from raw form input, coerced to numeric.
    #[wasm_bindgen(js_name = setItemPrice)]
    pub fn set_item_price(&mut self, index: usize, raw: &str) {
        self.invoice.set_item_price(index, coerce_price(raw));
    }

    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.invoice.items.len()
    }

    // --- derived totals ---

    pub fn subtotal(&self) -> f64 {
        Totals::of(&self.invoice).subtotal
    }

    pub fn tax(&self) -> f64 {
        Totals::of(&self.invoice).tax
    }

    pub fn total(&self) -> f64 {
        Totals::of(&self.invoice).total
    }

    /// Format an amount in the session currency, e.g. `LKR 1,234.56`.
    #[wasm_bindgen(js_name = formatCurrency)]
    pub fn format_currency(&self, amount: f64) -> String {
        self.currency.format(amount)
    }

    /// Preview-style rendering for an ISO date.
    #[wasm_bindgen(js_name = formatDate)]
    pub fn format_date(&self, iso: &str) -> String {
        dates::display_date(iso)
    }

    /// Suggested filename for the next export.
    #[wasm_bindgen(js_name = pdfFilename)]
    pub fn pdf_filename(&self) -> String {
        invoice_core::pdf_filename(&self.invoice.invoice_number)
    }

    // --- export pipeline ---

    /// True while an export is in flight; the UI disables the triggers.
    pub fn exporting(&self) -> bool {
        self.exporting
    }

    /// Tell the session how to force the preview surface visible before
    /// capture (e.g. switch the page to the preview tab).
    #[wasm_bindgen(js_name = setPreviewActivator)]
    pub fn set_preview_activator(&mut self, activator: Function) {
        self.preview_activator = Some(activator);
    }

    /// Activate the preview, rasterize it, and save the PDF to disk.
    #[wasm_bindgen(js_name = downloadPdf)]
    pub async fn download_pdf(&mut self, preview: Element) -> Result<(), JsValue> {
        self.export_and_save(&preview).await.map_err(to_js_error)
    }

    /// Filename of the last successful export, if any.
    #[wasm_bindgen(js_name = artifactFilename)]
    pub fn artifact_filename(&self) -> Option<String> {
        self.artifact
            .as_ref()
            .map(|artifact| artifact.filename().to_string())
    }

    /// Info about the last export (`{filename, url, sizeBytes}`), or
    /// `null` if nothing has been exported yet.
    #[wasm_bindgen(js_name = artifactInfo)]
    pub fn artifact_info(&self) -> Result<JsValue, JsValue> {
        let Some(artifact) = self.artifact.as_ref() else {
            return Ok(JsValue::NULL);
        };
        let info = ArtifactInfoJs {
            filename: artifact.filename(),
            url: artifact.url(),
            size_bytes: artifact.size_bytes(),
        };
        serde_wasm_bindgen::to_value(&info)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Save the last artifact again without re-rendering. Repeat
    /// downloads simply re-save the same bytes.
    #[wasm_bindgen(js_name = redownloadArtifact)]
    pub fn redownload_artifact(&self) -> Result<(), JsValue> {
        match self.artifact.as_ref() {
            Some(artifact) => trigger_download(artifact).map_err(to_js_error),
            None => Err(JsValue::from_str("No PDF has been generated yet")),
        }
    }

    /// Drop the current artifact and release its object URL.
    #[wasm_bindgen(js_name = clearArtifact)]
    pub fn clear_artifact(&mut self) {
        if let Some(artifact) = self.artifact.take() {
            artifact.revoke();
        }
    }

    // --- guided email workflow ---

    /// `"download"` or `"compose"`.
    #[wasm_bindgen(js_name = emailStep)]
    pub fn email_step(&self) -> String {
        match self.workflow.step() {
            EmailStep::Download => "download",
            EmailStep::Compose => "compose",
        }
        .to_string()
    }

    #[wasm_bindgen(js_name = pdfDownloaded)]
    pub fn pdf_downloaded(&self) -> bool {
        self.workflow.downloaded()
    }

    /// Start a fresh composition session; the dialog always opens on the
    /// download step.
    #[wasm_bindgen(js_name = openEmailDialog)]
    pub fn open_email_dialog(&mut self) {
        self.workflow.reset();
    }

    /// Close the dialog, resetting the composition session.
    #[wasm_bindgen(js_name = closeEmailDialog)]
    pub fn close_email_dialog(&mut self) {
        self.workflow.reset();
    }

    /// Step one of the guided flow: export, save, and on success enter
    /// the compose step with freshly seeded defaults. On failure the
    /// workflow stays on the download step and the user simply retries.
    #[wasm_bindgen(js_name = completeEmailDownload)]
    pub async fn complete_email_download(&mut self, preview: Element) -> Result<(), JsValue> {
        self.export_and_save(&preview).await.map_err(to_js_error)?;
        let draft = self.seeded_draft();
        self.workflow.complete_download(draft);
        Ok(())
    }

    #[wasm_bindgen(js_name = emailRecipient)]
    pub fn email_recipient(&self) -> String {
        self.workflow
            .draft()
            .map(|draft| draft.recipient.clone())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = emailSubject)]
    pub fn email_subject(&self) -> String {
        self.workflow
            .draft()
            .map(|draft| draft.subject.clone())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = emailBody)]
    pub fn email_body(&self) -> String {
        self.workflow
            .draft()
            .map(|draft| draft.body.clone())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = setEmailRecipient)]
    pub fn set_email_recipient(&mut self, value: &str) {
        if let Some(draft) = self.workflow.draft_mut() {
            draft.recipient = value.to_string();
        }
    }

    #[wasm_bindgen(js_name = setEmailSubject)]
    pub fn set_email_subject(&mut self, value: &str) {
        if let Some(draft) = self.workflow.draft_mut() {
            draft.subject = value.to_string();
        }
    }

    #[wasm_bindgen(js_name = setEmailBody)]
    pub fn set_email_body(&mut self, value: &str) {
        if let Some(draft) = self.workflow.draft_mut() {
            draft.body = value.to_string();
        }
    }

    /// Re-copy the recipient from the invoice's client contact field.
    #[wasm_bindgen(js_name = useClientRecipient)]
    pub fn use_client_recipient(&mut self) {
        let client = self.invoice.client_email.clone();
        if let Some(draft) = self.workflow.draft_mut() {
            draft.recipient = client;
        }
    }

    /// Terminal action: hand the draft to the platform mail client and
    /// reset the session. Fire-and-forget; the dialog closes immediately,
    /// and the user attaches the downloaded PDF by hand.
    #[wasm_bindgen(js_name = openEmailClient)]
    pub fn open_email_client(&mut self) -> Result<(), JsValue> {
        let Some(draft) = self.workflow.draft() else {
            return Err(JsValue::from_str("Complete the PDF download first"));
        };
        platform::open_mail_client(&draft.mailto_url())?;
        self.workflow.reset();
        Ok(())
    }

    // --- clipboard and print ---

    /// Copy the draft subject to the clipboard.
    #[wasm_bindgen(js_name = copySubject)]
    pub async fn copy_subject(&mut self) -> Result<(), JsValue> {
        let text = self.email_subject();
        platform::copy_text(&text).await?;
        self.copied_at = Some(js_sys::Date::now());
        Ok(())
    }

    /// Copy the draft body to the clipboard.
    #[wasm_bindgen(js_name = copyBody)]
    pub async fn copy_body(&mut self) -> Result<(), JsValue> {
        let text = self.email_body();
        platform::copy_text(&text).await?;
        self.copied_at = Some(js_sys::Date::now());
        Ok(())
    }

    /// Transient acknowledgment that a copy just happened.
    pub fn copied(&self) -> bool {
        self.copied_at
            .is_some_and(|at| js_sys::Date::now() - at < COPY_ACK_MS)
    }

    /// Activate the preview and open the native print dialog. Independent
    /// of the export pipeline; produces no artifact.
    #[wasm_bindgen(js_name = printInvoice)]
    pub async fn print_invoice(&self) -> Result<(), JsValue> {
        self.activate_preview();
        platform::next_frame().await?;
        platform::print_page()
    }

    /// End the session: revoke the artifact URL and reset workflow state.
    pub fn close(&mut self) {
        self.clear_artifact();
        self.workflow.reset();
    }
}

/// Artifact info for JS serialization
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactInfoJs<'a> {
    filename: &'a str,
    url: &'a str,
    size_bytes: f64,
}

/// Coerce raw form input to a numeric price; unparsable input counts as
/// zero, matching how the totals treat absent prices.
fn coerce_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}

/// Today's calendar date as `YYYY-MM-DD`, from the host clock.
fn today_iso() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.split('T').next().unwrap_or_default().to_string()
}

fn to_js_error(error: ExportError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
