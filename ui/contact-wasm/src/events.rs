//! Event binding.
//!
//! Both listeners are bound once at startup: the add button, and one click
//! listener on the list container that resolves the clicked `.contact-info`
//! block and deletes the contact at its `data-index`.

use crate::state::App;
use cb_core::render::{self, CONTACT_BLOCK_CLASS, CONTACT_INDEX_ATTRIBUTE};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget};

/// Helper: attach a sync click handler, logging instead of panicking on failure.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        let target: &EventTarget = $el.as_ref();
        if let Err(e) = target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
            gloo_console::error!("failed to bind click listener", e);
        }
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(app: &App) {
    let app2 = app.clone();
    on_click!(app.els.add_btn, move |e: web_sys::MouseEvent| {
        e.prevent_default();
        app2.on_add();
    });

    let app3 = app.clone();
    on_click!(app.els.contact_container, move |e: web_sys::MouseEvent| {
        if let Some(index) = clicked_block_index(&e) {
            app3.on_delete(index);
        }
    });
}

/// Store index of the contact block containing the click target, if any.
fn clicked_block_index(e: &web_sys::MouseEvent) -> Option<usize> {
    let target: Element = e.target()?.dyn_into().ok()?;
    let block = target.closest(&format!(".{CONTACT_BLOCK_CLASS}")).ok()??;
    let raw = block.get_attribute(CONTACT_INDEX_ATTRIBUTE)?;
    render::parse_block_index(&raw)
}
