//! Immutable record store: entities, localization overlays, pages, files
//! and attachments.

mod attachment;
mod record;
mod record_store;
pub(crate) mod validation;

pub use attachment::{Attachment, File};
pub use record::{Entity, Localization, StoragePage};
pub use record_store::{RecordStore, RecordStoreBuilder};
