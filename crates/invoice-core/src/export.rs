//! Export configuration and artifact naming.
//!
//! [`RenderOptions`] is fixed configuration for the HTML-to-PDF
//! rasterizer, not a user-facing surface. It serializes with the exact
//! option keys the rasterizer expects, so the wasm side can pass it
//! across the bridge unchanged.

use serde::Serialize;

/// Rasterizer options: page margin, image fidelity, canvas oversampling,
/// and paper setup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    /// Page margin in millimetres.
    pub margin: f64,
    pub image: ImageFidelity,
    pub html2canvas: CanvasOversampling,
    #[serde(rename = "jsPDF")]
    pub page: PageSetup,
}

/// Output image encoding for the rasterized preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageFidelity {
    #[serde(rename = "type")]
    pub kind: String,
    pub quality: f64,
}

/// Canvas capture settings. The oversampling scale keeps text and
/// line-art crisp in the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasOversampling {
    pub scale: u32,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
}

/// Paper size and orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSetup {
    pub unit: String,
    pub format: String,
    pub orientation: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            image: ImageFidelity {
                kind: "jpeg".to_string(),
                quality: 0.98,
            },
            html2canvas: CanvasOversampling {
                scale: 2,
                use_cors: true,
            },
            page: PageSetup {
                unit: "mm".to_string(),
                format: "a4".to_string(),
                orientation: "portrait".to_string(),
            },
        }
    }
}

/// Suggested filename for the export artifact, derived from the invoice
/// number. An empty number falls back to `Invoice.pdf`.
pub fn pdf_filename(invoice_number: &str) -> String {
    if invoice_number.is_empty() {
        "Invoice.pdf".to_string()
    } else {
        format!("Invoice_{invoice_number}.pdf")
    }
}
