use crate::contact::Contact;
use tracing::{debug, warn};

/// In-memory contact list, newest first.
///
/// `add` never refuses a contact. Capacity is enforced by the renderer,
/// which compares [`ContactStore::count`] against the configured maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a contact.
    pub fn add(&mut self, contact: Contact) {
        self.contacts.insert(0, contact);
        debug!(count = self.contacts.len(), "contact stored");
    }

    /// Remove the contact at `index`, returning it. Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<Contact> {
        if index >= self.contacts.len() {
            warn!(index, count = self.contacts.len(), "delete index out of range");
            return None;
        }
        let removed = self.contacts.remove(index);
        debug!(index, count = self.contacts.len(), "contact removed");
        Some(removed)
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }
}
