//! ContactBook WASM Frontend
//!
//! Binds the contact-list widget from `cb-core` to the page: element lookup,
//! click wiring and a DOM-backed `Surface`.

pub mod contact_list;
pub mod dom;
pub mod events;
pub mod state;

use cb_core::WidgetConfig;
use wasm_bindgen::prelude::*;

/// Attribute on the list container holding an optional JSON widget config.
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;
    let config = load_config(&els);

    let app = state::App::new(els, config);
    app.start();
    events::bind_events(&app);

    gloo_console::log!("contact widget ready");
    Ok(())
}

fn load_config(els: &dom::Elements) -> WidgetConfig {
    let raw = els.contact_container.get_attribute(CONFIG_ATTRIBUTE);
    let loaded = WidgetConfig::from_attribute(raw.as_deref());
    if let Some(e) = loaded.rejected {
        gloo_console::warn!(format!("{e}; using default widget config"));
    }
    loaded.config
}
