//! PDF export pipeline.
//!
//! Snapshots the rendered preview, rasterizes it through the html2pdf
//! bridge, and hands back a downloadable artifact. The rasterizer is an
//! external capability loaded asynchronously at startup; until that load
//! finishes every export fails fast with `RendererNotReady` and performs
//! no partial work.

use invoice_core::{ExportError, RenderOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, Document, Element, HtmlAnchorElement, HtmlElement, Url};

// External JavaScript functions from html2pdf-bridge.js
#[wasm_bindgen(module = "/www/js/html2pdf-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = initHtml2Pdf, catch)]
    async fn init_html2pdf_internal() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = renderElementToPdf, catch)]
    async fn render_element_to_pdf_internal(
        element: &Element,
        options: JsValue,
    ) -> Result<JsValue, JsValue>;
}

/// A generated PDF: the binary blob, its object URL, and the suggested
/// filename.
///
/// Object URLs hold browser memory until revoked; the owner must call
/// [`ExportArtifact::revoke`] when the artifact is superseded or the
/// session ends.
pub struct ExportArtifact {
    blob: Blob,
    url: String,
    filename: String,
}

impl ExportArtifact {
    fn new(blob: Blob, filename: String) -> Result<Self, ExportError> {
        let url = Url::create_object_url_with_blob(&blob).map_err(render_err)?;
        Ok(Self {
            blob,
            url,
            filename,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn size_bytes(&self) -> f64 {
        self.blob.size()
    }

    /// Release the object URL.
    pub fn revoke(self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

/// Async-initialized wrapper around the HTML-to-PDF rasterizer.
pub struct PdfExporter {
    ready: bool,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self { ready: false }
    }

    /// Load the rasterizer script. Awaited once at startup; repeat calls
    /// are cheap.
    pub async fn init(&mut self) -> Result<(), ExportError> {
        init_html2pdf_internal().await.map_err(render_err)?;
        self.ready = true;
        Ok(())
    }

    /// Readiness is a queried flag, set only by a completed [`init`].
    ///
    /// [`init`]: PdfExporter::init
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Rasterize a snapshot of `preview` into a PDF artifact.
    ///
    /// The element is deep-cloned and restyled for export, so the
    /// on-screen preview is never touched. Produces no download side
    /// effect; the call is safely retriable.
    pub async fn export_to_pdf(
        &self,
        preview: &Element,
        filename: &str,
    ) -> Result<ExportArtifact, ExportError> {
        if !self.is_ready() {
            return Err(ExportError::RendererNotReady);
        }

        let container = snapshot_for_export(preview)?;
        let options =
            serde_wasm_bindgen::to_value(&RenderOptions::default())
                .map_err(|e| ExportError::RenderFailure(e.to_string()))?;

        let rendered = render_element_to_pdf_internal(&container, options)
            .await
            .map_err(render_err)?;
        let blob: Blob = rendered
            .dyn_into()
            .map_err(|_| ExportError::RenderFailure("renderer did not return a blob".to_string()))?;

        ExportArtifact::new(blob, filename.to_string())
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep-clone the preview into a detached container carrying export-only
/// styling (white background, fixed padding).
fn snapshot_for_export(preview: &Element) -> Result<Element, ExportError> {
    let document = current_document().map_err(render_err)?;

    let clone = preview.clone_node_with_deep(true).map_err(render_err)?;

    let container: HtmlElement = document
        .create_element("div")
        .map_err(render_err)?
        .dyn_into()
        .map_err(|_| ExportError::RenderFailure("container element expected".to_string()))?;
    let style = container.style();
    let _ = style.set_property("background-color", "white");
    let _ = style.set_property("padding", "20px");
    container.append_child(&clone).map_err(render_err)?;

    Ok(container.into())
}

/// Programmatically save an artifact to disk through a transient anchor
/// element. Safe to call repeatedly; each call re-saves the same bytes.
pub fn trigger_download(artifact: &ExportArtifact) -> Result<(), ExportError> {
    let document = current_document().map_err(save_err)?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::SaveFailure("no document body".to_string()))?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(save_err)?
        .dyn_into()
        .map_err(|_| ExportError::SaveFailure("anchor element expected".to_string()))?;
    link.set_href(artifact.url());
    link.set_download(artifact.filename());

    body.append_child(&link).map_err(save_err)?;
    link.click();
    link.remove();

    Ok(())
}

fn current_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document"))
}

fn render_err(value: JsValue) -> ExportError {
    ExportError::RenderFailure(js_error_message(&value))
}

fn save_err(value: JsValue) -> ExportError {
    ExportError::SaveFailure(js_error_message(&value))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exporter_starts_not_ready() {
        // Exports before init must fail fast with RendererNotReady.
        let exporter = PdfExporter::new();
        assert!(!exporter.is_ready());
    }
}

