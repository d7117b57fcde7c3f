//! DOM element bindings.
//!
//! All fields are resolved once at startup by CSS selector.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

// ── Helpers ──

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

pub fn query(selector: &str) -> Option<Element> {
    document().ok()?.query_selector(selector).ok()?
}

pub fn query_typed<T: JsCast>(selector: &str) -> Option<T> {
    query(selector).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn clear_children(el: &Element) {
    el.set_inner_html("");
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value()
}

pub fn set_input_value(el: &HtmlInputElement, val: &str) {
    el.set_value(val);
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()?.create_element(tag)
}

// ── Elements struct ──

/// Every node the widget reads or writes.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub input: HtmlInputElement,
    pub add_btn: HtmlElement,
    pub contact_container: Element,
    pub saved_contacts: Element,
    pub error_message: Element,
    pub storage_alert_message: Element,
}

macro_rules! get_el {
    ($sel:expr) => {
        query($sel).ok_or_else(|| JsValue::from_str(&format!("missing element {}", $sel)))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $sel:expr) => {
        query_typed::<$ty>($sel)
            .ok_or_else(|| JsValue::from_str(&format!("missing {} {}", stringify!($ty), $sel)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after the document is parsed.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            input: get_typed!(HtmlInputElement, "input"),
            add_btn: get_typed!(HtmlElement, ".btn-add"),
            contact_container: get_el!(".contact-container"),
            saved_contacts: get_el!(".saved-contacts"),
            error_message: get_el!(".error-message"),
            storage_alert_message: get_el!(".storage-alert-message"),
        })
    }
}
