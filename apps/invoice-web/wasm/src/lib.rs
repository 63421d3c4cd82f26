//! WASM bindings for the client-side invoice studio.
//!
//! All invoice state is held in Rust via [`InvoiceSession`]; JavaScript
//! handles DOM events, renders the form and preview from the session's
//! getters, and passes the preview element in when an export is
//! requested.
//!
//! ## Architecture
//!
//! - Invoice record, derived totals, and the guided email workflow live
//!   in `invoice-core` (pure, natively tested)
//! - The export pipeline (`exporter`) snapshots the preview and drives
//!   the html2pdf bridge
//! - Platform handoffs (`platform`) cover mailto, clipboard, print, and
//!   the print-style lifecycle
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { InvoiceSession, PrintStyles } from './pkg/invoice_wasm.js';
//!
//! await init();
//!
//! const styles = PrintStyles.mount();
//! const session = new InvoiceSession({
//!   companyName: "Lightspeed Labs",
//!   companyEmail: "lightspeedlabs.io@gmail.com",
//!   currencyCode: "LKR",
//! });
//! await session.initRenderer();
//!
//! session.setPreviewActivator(() => showPreviewTab());
//! session.patchInvoice({ clientName: "Jane Perera" });
//! session.setItemPrice(0, "15000");
//!
//! await session.downloadPdf(document.getElementById("invoice-preview"));
//!
//! // Guided email flow
//! session.openEmailDialog();
//! await session.completeEmailDownload(previewElement);
//! session.openEmailClient();
//! ```

pub mod exporter;
pub mod platform;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use exporter::{ExportArtifact, PdfExporter};
pub use platform::PrintStyles;
pub use session::InvoiceSession;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
