//! Invoice domain for a client-side invoice generator.
//!
//! This crate holds everything that does not need a browser: the invoice
//! record and its mutation surface, the derived totals, display
//! formatting, email draft derivation, and the guided two-step email
//! workflow. The browser frontend (`invoice-wasm`) layers DOM capture,
//! PDF rasterization, and platform handoffs on top.
//!
//! Derived values (subtotal, tax, total) are never stored; they are
//! recomputed from the record on every read.

pub mod branding;
pub mod currency;
pub mod dates;
pub mod email;
pub mod error;
pub mod export;
pub mod model;
pub mod totals;
pub mod workflow;

pub use branding::Branding;
pub use currency::CurrencyFormat;
pub use email::EmailDraft;
pub use error::ExportError;
pub use export::{pdf_filename, RenderOptions};
pub use model::{InvoiceItem, InvoicePatch, InvoiceRecord};
pub use totals::Totals;
pub use workflow::{EmailStep, EmailWorkflow};
