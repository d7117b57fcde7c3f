//! The seam between the widget controller and whatever displays it.
//!
//! The browser frontend implements [`Surface`] over real DOM nodes;
//! [`RecordingSurface`] keeps the same state in memory for tests and
//! headless hosts.

use crate::render::ContactBlock;

pub trait Surface {
    fn set_error(&mut self, message: &str);
    fn clear_error(&mut self);

    fn set_storage_alert(&mut self, message: &str);
    fn clear_storage_alert(&mut self);

    /// Drop every rendered contact block.
    fn clear_list(&mut self);
    /// Append one block; clicking it must delete the contact at `block.index`.
    fn append_block(&mut self, block: &ContactBlock);

    fn set_summary(&mut self, text: &str);

    fn clear_input(&mut self);
}

/// In-memory surface mirroring the text content of each UI node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub input: String,
    pub error: String,
    pub storage_alert: String,
    pub summary: String,
    pub blocks: Vec<ContactBlock>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible list text, one line per paragraph, in display order.
    pub fn list_lines(&self) -> Vec<String> {
        self.blocks
            .iter()
            .flat_map(|b| b.lines().map(str::to_string))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_error(&mut self, message: &str) {
        self.error = message.to_string();
    }

    fn clear_error(&mut self) {
        self.error.clear();
    }

    fn set_storage_alert(&mut self, message: &str) {
        self.storage_alert = message.to_string();
    }

    fn clear_storage_alert(&mut self) {
        self.storage_alert.clear();
    }

    fn clear_list(&mut self) {
        self.blocks.clear();
    }

    fn append_block(&mut self, block: &ContactBlock) {
        self.blocks.push(block.clone());
    }

    fn set_summary(&mut self, text: &str) {
        self.summary = text.to_string();
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}
