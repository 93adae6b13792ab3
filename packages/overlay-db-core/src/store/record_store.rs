//! Read-only record store and its validating builder.
//!
//! A store is built once from a complete set of records and never mutated
//! afterwards. Lookups that miss return `None` or an empty slice.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::error::DbError;
use crate::types::{FileId, LanguageId, PageId, RecordUid};

use super::attachment::{Attachment, File};
use super::record::{Entity, Localization, StoragePage};
use super::validation;

/// Immutable store of entities, overlays and attachments.
#[derive(Debug, Default)]
pub struct RecordStore {
    pages: BTreeMap<PageId, StoragePage>,
    /// Entities in insertion order
    entities: Vec<Entity>,
    entity_index: HashMap<RecordUid, usize>,
    localizations: Vec<Localization>,
    /// `(parent, language)` -> position in `localizations`
    localization_index: HashMap<(RecordUid, LanguageId), usize>,
    /// overlay uid -> position in `localizations`
    overlay_index: HashMap<RecordUid, usize>,
    files: HashMap<FileId, File>,
    /// owner uid -> attachments ordered by position
    attachments: HashMap<RecordUid, Vec<Attachment>>,
    /// CRC32 of the dataset the store was imported from
    checksum: Option<u32>,
}

impl RecordStore {
    /// Starts an empty builder.
    pub fn builder() -> RecordStoreBuilder {
        RecordStoreBuilder::default()
    }

    /// Returns the in-scope entities in insertion order.
    ///
    /// An empty page set yields no entities.
    pub fn entities_in_pages(&self, page_ids: &BTreeSet<PageId>) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|entity| page_ids.contains(&entity.pid))
            .collect()
    }

    /// All entities in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, uid: RecordUid) -> Option<&Entity> {
        self.entity_index.get(&uid).map(|&idx| &self.entities[idx])
    }

    /// Returns the overlay of `entity` in `language`, if one was imported.
    pub fn localization_of(&self, entity: RecordUid, language: LanguageId) -> Option<&Localization> {
        self.localization_index
            .get(&(entity, language))
            .map(|&idx| &self.localizations[idx])
    }

    /// Looks an overlay up by its own uid.
    pub fn localization_by_uid(&self, uid: RecordUid) -> Option<&Localization> {
        self.overlay_index.get(&uid).map(|&idx| &self.localizations[idx])
    }

    /// Attachments of `entity` as seen in `language`.
    ///
    /// The default language, and any language for an "all languages"
    /// entity, returns the entity's own attachments. A translation language
    /// returns the overlay's attachments, or nothing when the entity has no
    /// overlay in that language.
    pub fn attachments_of(&self, entity: RecordUid, language: LanguageId) -> &[Attachment] {
        let shown_everywhere = self
            .entity(entity)
            .is_some_and(|e| e.language == LanguageId::ALL);
        if language.is_default() || shown_everywhere {
            return self.attachments_owned_by(entity);
        }
        match self.localization_of(entity, language) {
            Some(overlay) => self.attachments_owned_by(overlay.uid),
            None => &[],
        }
    }

    /// Attachments whose owner is exactly `owner`, ordered by position.
    pub fn attachments_owned_by(&self, owner: RecordUid) -> &[Attachment] {
        self.attachments
            .get(&owner)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn file(&self, uid: FileId) -> Option<&File> {
        self.files.get(&uid)
    }

    pub fn page(&self, uid: PageId) -> Option<&StoragePage> {
        self.pages.get(&uid)
    }

    /// Pages ordered by uid.
    pub fn pages(&self) -> impl Iterator<Item = &StoragePage> {
        self.pages.values()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn localization_count(&self) -> usize {
        self.localizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Checksum of the source dataset, if the store was imported.
    pub fn checksum(&self) -> Option<u32> {
        self.checksum
    }
}

/// Collects records and validates them into a [`RecordStore`].
#[derive(Debug, Default, Clone)]
pub struct RecordStoreBuilder {
    pages: Vec<StoragePage>,
    entities: Vec<Entity>,
    localizations: Vec<Localization>,
    files: Vec<File>,
    attachments: Vec<Attachment>,
    checksum: Option<u32>,
}

impl RecordStoreBuilder {
    pub fn page(mut self, page: StoragePage) -> Self {
        self.pages.push(page);
        self
    }

    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn localization(mut self, localization: Localization) -> Self {
        self.localizations.push(localization);
        self
    }

    pub fn file(mut self, file: File) -> Self {
        self.files.push(file);
        self
    }

    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn pages(mut self, pages: impl IntoIterator<Item = StoragePage>) -> Self {
        self.pages.extend(pages);
        self
    }

    pub fn entities(mut self, entities: impl IntoIterator<Item = Entity>) -> Self {
        self.entities.extend(entities);
        self
    }

    pub fn localizations(mut self, localizations: impl IntoIterator<Item = Localization>) -> Self {
        self.localizations.extend(localizations);
        self
    }

    pub fn files(mut self, files: impl IntoIterator<Item = File>) -> Self {
        self.files.extend(files);
        self
    }

    pub fn attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }

    /// Records the checksum of the dataset these records came from.
    pub fn checksum(mut self, checksum: u32) -> Self {
        self.checksum = Some(checksum);
        self
    }

    /// Validates the collected records and builds the store.
    ///
    /// # Returns
    /// `Result<RecordStore, DbError>` with the first integrity violation
    /// found, checked in the order pages, entities, overlays, files,
    /// attachments.
    pub fn build(self) -> Result<RecordStore, DbError> {
        let pages = validation::index_pages(self.pages)?;

        let mut claimed = HashSet::with_capacity(self.entities.len() + self.localizations.len());
        let entity_index = validation::index_entities(&self.entities, &pages, &mut claimed)?;
        let (localization_index, overlay_index) = validation::index_localizations(
            &self.localizations,
            &self.entities,
            &entity_index,
            &mut claimed,
        )?;

        let files = validation::index_files(self.files)?;
        let attachment_count = self.attachments.len();
        let attachments = validation::group_attachments(self.attachments, &claimed, &files)?;

        tracing::debug!(
            "Built record store: {} pages, {} entities, {} localizations, {} files, {} attachments",
            pages.len(),
            self.entities.len(),
            self.localizations.len(),
            files.len(),
            attachment_count
        );

        Ok(RecordStore {
            pages,
            entities: self.entities,
            entity_index,
            localizations: self.localizations,
            localization_index,
            overlay_index,
            files,
            attachments,
            checksum: self.checksum,
        })
    }
}
