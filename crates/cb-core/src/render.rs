//! Render planning.
//!
//! Turns the store into the text the list container and summary node should
//! show. The plan is pure data; a [`Surface`](crate::surface::Surface)
//! applies it.

use crate::config::WidgetConfig;
use crate::contact::Contact;
use crate::store::ContactStore;

pub const STORAGE_FULL_MESSAGE: &str = "Storage is full! Cannot add more contacts :(";

/// CSS class carried by each rendered contact block.
pub const CONTACT_BLOCK_CLASS: &str = "contact-info";

/// Attribute carrying a block's store position, read back by the click handler.
pub const CONTACT_INDEX_ATTRIBUTE: &str = "data-index";

pub fn parse_block_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

pub fn summary_text(count: usize) -> String {
    format!("Saved contacts: {count}")
}

/// One rendered contact. `index` is the store position a click deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactBlock {
    pub index: usize,
    pub name_line: String,
    pub city_line: String,
    pub email_line: String,
}

impl ContactBlock {
    pub fn from_contact(index: usize, contact: &Contact) -> Self {
        Self {
            index,
            name_line: format!("Name: {}", contact.display_name()),
            city_line: format!("City: {}", contact.display_city()),
            email_line: format!("Email: {}", contact.display_email()),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [
            self.name_line.as_str(),
            self.city_line.as_str(),
            self.email_line.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    /// Store is past capacity: show the alert, leave the list empty and the summary as it was.
    StorageFull,
    List {
        blocks: Vec<ContactBlock>,
        summary: String,
    },
}

pub fn plan(store: &ContactStore, config: &WidgetConfig) -> RenderPlan {
    if config.is_over_capacity(store.count()) {
        return RenderPlan::StorageFull;
    }

    let blocks = store
        .iter()
        .enumerate()
        .map(|(index, contact)| ContactBlock::from_contact(index, contact))
        .collect();

    RenderPlan::List {
        blocks,
        summary: summary_text(store.count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_plan_follows_store_order() {
        let mut store = ContactStore::new();
        store.add(Contact::new("Alice", "Paris", "alice.one@example.com"));
        store.add(Contact::new("Bob", "Oslo", "Bob@Example.NO"));

        let RenderPlan::List { blocks, summary } = plan(&store, &WidgetConfig::default()) else {
            panic!("expected list plan");
        };

        assert_eq!(summary, "Saved contacts: 2");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].index, 0);
        assert_eq!(
            blocks[0].lines(),
            ["Name: Bob", "City: Oslo", "Email: bob@example.no"]
        );
        assert_eq!(blocks[1].index, 1);
        assert_eq!(blocks[1].name_line, "Name: Alice");
    }

    #[test]
    fn block_index_roundtrips_through_attribute_text() {
        assert_eq!(parse_block_index(&7usize.to_string()), Some(7));
        assert_eq!(parse_block_index(" 0 "), Some(0));
        assert_eq!(parse_block_index(""), None);
        assert_eq!(parse_block_index("-1"), None);
        assert_eq!(parse_block_index("two"), None);
    }

    #[test]
    fn empty_store_plans_empty_list() {
        assert_eq!(
            plan(&ContactStore::new(), &WidgetConfig::default()),
            RenderPlan::List {
                blocks: Vec::new(),
                summary: "Saved contacts: 0".to_string(),
            }
        );
    }

    #[test]
    fn over_capacity_plans_storage_full() {
        let config = WidgetConfig { max_contacts: 2 };
        let mut store = ContactStore::new();
        for n in 0..3 {
            store.add(Contact::new("Ann", "Rome", format!("ann{n}@example.com")));
        }
        assert_eq!(plan(&store, &config), RenderPlan::StorageFull);
    }
}
