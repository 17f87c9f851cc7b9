//! Tauron Dashboard
//!
//! Livestock-health dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The view-routing state machine lives in the `tauron` crate;
//! this crate mounts it and supplies the presentational panels.

use wasm_bindgen::JsCast;

mod app;
mod components;
mod icons;
mod pages;
mod state;

/// Id of the element the dashboard attaches to
const ROOT_ID: &str = "app";

fn main() {
    let document = web_sys::window().and_then(|w| w.document());

    // Mount onto #app, or the body when the host page has no such element
    let root = document.and_then(|doc| {
        doc.get_element_by_id(ROOT_ID)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .or_else(|| doc.body())
    });

    match root {
        Some(root) => app::start(root),
        None => web_sys::console::error_1(&"Tauron: no document to mount into".into()),
    }
}
