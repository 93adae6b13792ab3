//! Attachment resolution per effective language variant.

use serde::Serialize;

use crate::language::{EffectiveRecord, LanguagePolicy, LanguageResolver};
use crate::store::RecordStore;
use crate::types::{FileId, LanguageId, RecordUid};

/// Attachment joined with its file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAttachment {
    /// Attachment uid
    pub uid: RecordUid,
    pub file: FileId,
    pub identifier: String,
    pub sorting: u32,
    /// File title, `None` when the file has none
    pub title: Option<String>,
}

/// Resolves the ordered attachments of effective records.
#[derive(Debug, Clone, Copy)]
pub struct RelationResolver<'a> {
    store: &'a RecordStore,
}

impl<'a> RelationResolver<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Attachments of `entity` in `language`, with default-language fallback.
    ///
    /// An unknown entity yields no attachments.
    pub fn resolve_attachments(&self, entity: RecordUid, language: LanguageId) -> Vec<ResolvedAttachment> {
        let Some(entity) = self.store.entity(entity) else {
            return Vec::new();
        };
        let resolver = LanguageResolver::new(self.store, LanguagePolicy::fallback(language));
        match resolver.resolve(entity) {
            Some(effective) => self.attachments_for(&effective),
            None => Vec::new(),
        }
    }

    /// Attachments owned by the selected variant, in position order.
    pub fn attachments_for(&self, record: &EffectiveRecord<'_>) -> Vec<ResolvedAttachment> {
        self.attachments_owned_by(record.uid())
    }

    pub(crate) fn attachments_owned_by(&self, owner: RecordUid) -> Vec<ResolvedAttachment> {
        self.store
            .attachments_owned_by(owner)
            .iter()
            .filter_map(|attachment| {
                // Files are checked when the store is built
                let file = self.store.file(attachment.file)?;
                Some(ResolvedAttachment {
                    uid: attachment.uid,
                    file: file.uid,
                    identifier: file.identifier.clone(),
                    sorting: attachment.sorting,
                    title: file.title.clone(),
                })
            })
            .collect()
    }
}
