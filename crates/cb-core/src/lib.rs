//! ContactBook core: validation, storage and render planning for the
//! contact-list widget. Nothing here touches the DOM.

pub mod config;
pub mod contact;
pub mod render;
pub mod store;
pub mod surface;
pub mod validate;
pub mod widget;

#[cfg(test)]
mod strategies;

pub use config::{ConfigError, WidgetConfig};
pub use contact::Contact;
pub use render::{ContactBlock, RenderPlan};
pub use store::ContactStore;
pub use surface::{RecordingSurface, Surface};
pub use validate::{ValidationError, parse_contact};
pub use widget::ContactWidget;
