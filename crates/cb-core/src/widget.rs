//! Widget controller.
//!
//! Owns the contact store and configuration and drives a [`Surface`] in
//! response to the two user actions: submitting the input field and
//! clicking a rendered contact.

use crate::config::WidgetConfig;
use crate::contact::Contact;
use crate::render::{self, RenderPlan, STORAGE_FULL_MESSAGE};
use crate::store::ContactStore;
use crate::surface::Surface;
use crate::validate::{self, ValidationError};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct ContactWidget {
    store: ContactStore,
    config: WidgetConfig,
}

impl ContactWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            store: ContactStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Initial paint: only the summary, before any contact exists.
    pub fn start<S: Surface>(&self, surface: &mut S) {
        surface.set_summary(&render::summary_text(self.store.count()));
    }

    /// Handle the add trigger with the raw text of the input field.
    ///
    /// On rejection the error node gets the message; store and input are untouched.
    pub fn submit<S: Surface>(&mut self, raw: &str, surface: &mut S) -> Result<(), ValidationError> {
        let contact = match validate::parse_contact(raw) {
            Ok(contact) => contact,
            Err(err) => {
                debug!(error = %err, "input rejected");
                surface.set_error(&err.to_string());
                return Err(err);
            }
        };

        self.store.add(contact);
        self.render(surface);
        surface.clear_input();
        surface.clear_error();
        Ok(())
    }

    /// Handle a click on the rendered block at `index`.
    pub fn delete<S: Surface>(&mut self, index: usize, surface: &mut S) -> Option<Contact> {
        let removed = self.store.remove_at(index);
        self.render(surface);
        surface.clear_storage_alert();
        removed
    }

    /// Rebuild the list container and summary from the store.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.clear_storage_alert();
        surface.clear_list();

        match render::plan(&self.store, &self.config) {
            RenderPlan::StorageFull => {
                warn!(
                    count = self.store.count(),
                    max = self.config.max_contacts,
                    "contact store past capacity"
                );
                surface.set_storage_alert(STORAGE_FULL_MESSAGE);
            }
            RenderPlan::List { blocks, summary } => {
                for block in &blocks {
                    surface.append_block(block);
                }
                surface.set_summary(&summary);
                debug!(count = blocks.len(), "contact list rendered");
            }
        }
    }
}
