//! Readiness of the host document.
//!
//! The populator must not look up the heading before the document has been
//! parsed. [`ReadyHook`] is the capability the entry point registers its work
//! with; the host decides whether that runs right away or later.

use gloo_console::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub trait ReadyHook {
    /// Runs `callback` at most once, as soon as the document can be queried.
    fn on_ready(&self, callback: Box<dyn FnOnce()>);
}

/// Whether work can run right away for a document in `ready_state`
/// (`document.readyState`). Only `loading` has to wait.
pub fn runs_now(ready_state: &str) -> bool {
    ready_state != "loading"
}

pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        BrowserDocument { document }
    }
}

impl ReadyHook for BrowserDocument {
    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        if runs_now(&self.document.ready_state()) {
            callback();
            return;
        }

        // `DOMContentLoaded` fires once per document.
        let listener = Closure::once_into_js(move || callback());
        if let Err(e) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        {
            error!("could not wait for DOMContentLoaded:", e);
        }
    }
}
