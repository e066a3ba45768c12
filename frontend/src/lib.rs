//! Browser side of the example site.
//!
//! Once the document is ready, the record list served by the backend is
//! rendered right after the `#heading` element of whichever page loaded the
//! bundle. Failures are reported on the console only; the page keeps its
//! heading and nothing else.

pub mod api;
pub mod dom;
pub mod populator;
pub mod ready;

use api::HttpRecordSource;
use dom::HeadingTarget;
use gloo_console::error;
use populator::{populate_heading, HEADING_ID, RECORDS_ENDPOINT};
use ready::{BrowserDocument, ReadyHook};

/// Registers the page population with the current document.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        error!("no document to populate");
        return;
    };

    let hook = BrowserDocument::new(document.clone());
    hook.on_ready(Box::new(move || {
        wasm_bindgen_futures::spawn_local(async move {
            let source = HttpRecordSource::new(RECORDS_ENDPOINT);
            let heading = HeadingTarget::find(&document, HEADING_ID);
            if let Err(e) = populate_heading(&source, heading).await {
                error!(format!("page population failed: {}", e));
            }
        });
    }));
}
