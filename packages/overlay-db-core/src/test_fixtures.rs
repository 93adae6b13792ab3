//! Blog dataset shared by unit tests.
//!
//! ```text
//! Post1 (uid 1)  -> EN: uid 2 "B EN:Post1", GR: uid 3 "GR:Post1"
//! Post2 (uid 4)  -> EN: uid 5 "A EN:Post2"
//! Post3 (uid 6)
//! ```
//!
//! Post1 has one image, its English overlay has two (the second untitled).

use crate::store::{Attachment, Entity, File, Localization, RecordStore, RecordStoreBuilder, StoragePage};
use crate::types::LanguageId;

pub const ENGLISH: LanguageId = LanguageId(1);
pub const GREEK: LanguageId = LanguageId(2);

pub fn blog_builder() -> RecordStoreBuilder {
    RecordStore::builder()
        .page(StoragePage::new(1, "Blog"))
        .page(StoragePage::new(2, "Archive"))
        .entity(Entity::new(1, 1, "Post1").with_content("Content of post 1"))
        .localization(Localization::new(2, 1, ENGLISH, "B EN:Post1"))
        .localization(Localization::new(3, 1, GREEK, "GR:Post1").with_content("GR content"))
        .entity(Entity::new(4, 1, "Post2"))
        .localization(Localization::new(5, 4, ENGLISH, "A EN:Post2"))
        .entity(Entity::new(6, 1, "Post3"))
        .file(File::new(1, "/user_upload/team-t3board10.jpg", Some("my test image")))
        .file(File::new(2, "/user_upload/en-team-t3board10.jpg", Some("EN my test image")))
        .file(File::new(3, "/user_upload/untitled.jpg", None))
        .attachment(Attachment::new(1, 1, 1, 1))
        .attachment(Attachment::new(3, 2, 3, 2))
        .attachment(Attachment::new(2, 2, 2, 1))
}

pub fn blog_store() -> RecordStore {
    blog_builder().build().unwrap()
}
