use thiserror::Error;

/// Failures surfaced by the export pipeline.
///
/// Every variant is retriable: the pipeline performs no partial work on
/// failure, so the caller surfaces one notice and leaves state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The rendering capability has not finished its async load.
    #[error("PDF generation is not ready yet. Please try again in a moment.")]
    RendererNotReady,

    /// The rasterizer threw while converting the preview.
    #[error("Failed to generate PDF: {0}")]
    RenderFailure(String),

    /// The platform save primitive was unavailable or denied.
    #[error("Failed to save PDF: {0}")]
    SaveFailure(String),
}
