//! Browser platform handoffs: mail compose, clipboard, print, and the
//! print-style lifecycle.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Window};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// Hand a `mailto:` URL to the platform, opening the user's mail client.
/// Fire-and-forget: there is no delivery confirmation.
pub fn open_mail_client(mailto_url: &str) -> Result<(), JsValue> {
    window()?.location().set_href(mailto_url)
}

/// Copy text to the system clipboard.
pub async fn copy_text(text: &str) -> Result<(), JsValue> {
    let clipboard = window()?.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// Resolve after the browser has painted one frame.
///
/// Exports and printing capture the preview only after it has real
/// painted layout; a hidden or zero-size surface would come out blank.
pub async fn next_frame() -> Result<(), JsValue> {
    let window = window()?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if window.request_animation_frame(&resolve).is_err() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise).await?;
    Ok(())
}

/// Open the platform's native print dialog over the live page.
pub fn print_page() -> Result<(), JsValue> {
    window()?.print()
}

const PRINT_CSS: &str = "\
@media print {
  @page {
    margin: 1cm;
    size: auto;
  }
  html {
    height: 100%;
  }
  body {
    height: 100%;
    margin: 0 !important;
    padding: 0 !important;
    overflow: hidden;
  }
  head, header, footer {
    display: none !important;
  }
}
";

/// Print-specific stylesheet held for the lifetime of the page.
///
/// Mount on page setup and unmount on teardown; the pair is symmetric so
/// the injected element never outlives its owner.
#[wasm_bindgen]
pub struct PrintStyles {
    element: Element,
}

#[wasm_bindgen]
impl PrintStyles {
    /// Inject the stylesheet into `<head>` and return the owning handle.
    pub fn mount() -> Result<PrintStyles, JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let element = document.create_element("style")?;
        element.set_text_content(Some(PRINT_CSS));
        document
            .head()
            .ok_or_else(|| JsValue::from_str("No document head"))?
            .append_child(&element)?;

        Ok(PrintStyles { element })
    }

    /// Remove the stylesheet from the document.
    pub fn unmount(self) {
        self.element.remove();
    }
}
