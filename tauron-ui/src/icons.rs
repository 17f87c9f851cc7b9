//! Lucide icon bridge
//!
//! Panels mark icons with `<i data-lucide="name">` placeholders. The lucide
//! script, when the host page loads it, swaps them for SVGs.

use tauron::IconRenderer;
use wasm_bindgen::{JsCast, JsValue};

/// Calls `window.lucide.createIcons()` if the library is present
#[derive(Debug, Clone, Copy, Default)]
pub struct LucideIcons;

impl LucideIcons {
    fn create_icons() -> Option<Result<JsValue, JsValue>> {
        let window = web_sys::window()?;
        let lucide = js_sys::Reflect::get(&window, &JsValue::from_str("lucide")).ok()?;
        if lucide.is_undefined() || lucide.is_null() {
            return None;
        }

        let create = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;

        Some(create.call0(&lucide))
    }
}

impl IconRenderer for LucideIcons {
    fn render_icons(&self) {
        match Self::create_icons() {
            Some(Ok(_)) => {}
            Some(Err(e)) => tracing::warn!("lucide.createIcons failed: {:?}", e),
            None => tracing::trace!("lucide not loaded, skipping icon scan"),
        }
    }
}
