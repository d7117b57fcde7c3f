//! Application controller handle.
//!
//! The widget (store + config) lives behind one `Rc<RefCell<_>>` shared by
//! every event closure. WASM is single-threaded and each handler borrows the
//! widget only for its own duration.

use crate::contact_list::DomSurface;
use crate::dom::{self, Elements};
use cb_core::{ContactWidget, WidgetConfig};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct App {
    pub els: Elements,
    widget: Rc<RefCell<ContactWidget>>,
}

impl App {
    pub fn new(els: Elements, config: WidgetConfig) -> Self {
        Self {
            els,
            widget: Rc::new(RefCell::new(ContactWidget::new(config))),
        }
    }

    /// Run a closure with shared read access to the widget.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ContactWidget) -> R,
    {
        f(&self.widget.borrow())
    }

    /// Run a closure with mutable access to the widget.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ContactWidget) -> R,
    {
        f(&mut self.widget.borrow_mut())
    }

    fn surface(&self) -> DomSurface {
        DomSurface::new(self.clone())
    }

    pub fn start(&self) {
        let mut surface = self.surface();
        self.with(|w| w.start(&mut surface));
    }

    /// Add-button handler.
    pub fn on_add(&self) {
        let raw = dom::get_input_value(&self.els.input);
        let mut surface = self.surface();
        // Rejections are already shown in the error node.
        let _ = self.with_mut(|w| w.submit(&raw, &mut surface));
    }

    /// Contact-block handler.
    pub fn on_delete(&self, index: usize) {
        let mut surface = self.surface();
        self.with_mut(|w| w.delete(index, &mut surface));
    }
}
