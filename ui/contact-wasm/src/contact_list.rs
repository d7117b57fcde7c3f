//! Contact list rendering.
//!
//! `DomSurface` applies the widget's render output to the real nodes:
//! message text, the summary line, and one `.contact-info` block per contact.
//! Blocks carry their store index in `data-index`; clicks are handled by a
//! single listener on the container (see `events::bind_events`).

use crate::dom;
use crate::state::App;
use cb_core::render::{CONTACT_BLOCK_CLASS, CONTACT_INDEX_ATTRIBUTE};
use cb_core::{ContactBlock, Surface};
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub struct DomSurface {
    app: App,
}

impl DomSurface {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    fn build_block(&self, block: &ContactBlock) -> Result<Element, JsValue> {
        let card = dom::create_element("div")?;
        dom::add_class(&card, CONTACT_BLOCK_CLASS);
        card.set_attribute(CONTACT_INDEX_ATTRIBUTE, &block.index.to_string())?;

        for line in block.lines() {
            let para = dom::create_element("p")?;
            dom::set_text(&para, line);
            card.append_child(&para)?;
        }
        Ok(card)
    }
}

impl Surface for DomSurface {
    fn set_error(&mut self, message: &str) {
        dom::set_text(&self.app.els.error_message, message);
    }

    fn clear_error(&mut self) {
        dom::set_text(&self.app.els.error_message, "");
    }

    fn set_storage_alert(&mut self, message: &str) {
        dom::set_text(&self.app.els.storage_alert_message, message);
    }

    fn clear_storage_alert(&mut self) {
        dom::set_text(&self.app.els.storage_alert_message, "");
    }

    fn clear_list(&mut self) {
        dom::clear_children(&self.app.els.contact_container);
    }

    fn append_block(&mut self, block: &ContactBlock) {
        let card = match self.build_block(block) {
            Ok(card) => card,
            Err(e) => {
                gloo_console::error!("failed to build contact block", e);
                return;
            }
        };
        if let Err(e) = self.app.els.contact_container.append_child(&card) {
            gloo_console::error!("failed to attach contact block", e);
        }
    }

    fn set_summary(&mut self, text: &str) {
        dom::set_text(&self.app.els.saved_contacts, text);
    }

    fn clear_input(&mut self) {
        dom::set_input_value(&self.app.els.input, "");
    }
}
