//! Materialized query results.

use serde::Serialize;

use crate::language::EffectiveRecord;
use crate::relation::{RelationResolver, ResolvedAttachment};
use crate::types::{LanguageId, PageId, RecordUid};

/// Effective record of one entity, detached from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRecord {
    /// Uid of the selected variant (overlay uid when localized)
    pub uid: RecordUid,
    /// Uid of the logical entity
    pub entity_uid: RecordUid,
    pub pid: PageId,
    pub language: LanguageId,
    pub title: String,
    pub content: Option<String>,
    /// True when an overlay was selected
    pub localized: bool,
    /// Attachments of the selected variant, in position order
    pub attachments: Vec<ResolvedAttachment>,
}

impl ResolvedRecord {
    pub(crate) fn from_effective(record: &EffectiveRecord<'_>, relations: &RelationResolver<'_>) -> Self {
        Self {
            uid: record.uid(),
            entity_uid: record.entity_uid(),
            pid: record.pid(),
            language: record.language(),
            title: record.title().to_string(),
            content: record.content().map(str::to_string),
            localized: record.is_overlay(),
            attachments: relations.attachments_for(record),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Attached images of this variant.
    pub fn images(&self) -> &[ResolvedAttachment] {
        &self.attachments
    }
}

/// Ordered result of an executed query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<ResolvedRecord>,
}

impl ResultSet {
    pub fn new(records: Vec<ResolvedRecord>) -> Self {
        Self { records }
    }

    /// Number of resolved records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&ResolvedRecord> {
        self.records.first()
    }

    pub fn get(&self, index: usize) -> Option<&ResolvedRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ResolvedRecord] {
        &self.records
    }

    /// Copies the records out in result order.
    pub fn to_array(&self) -> Vec<ResolvedRecord> {
        self.records.clone()
    }

    /// Effective titles in result order.
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(ResolvedRecord::title).collect()
    }

    /// Keeps the window `[offset, offset + limit)`.
    pub fn paginate(mut self, offset: Option<usize>, limit: Option<usize>) -> Self {
        let offset = offset.unwrap_or(0).min(self.records.len());
        self.records.drain(..offset);
        if let Some(limit) = limit {
            self.records.truncate(limit);
        }
        self
    }
}

impl IntoIterator for ResultSet {
    type Item = ResolvedRecord;
    type IntoIter = std::vec::IntoIter<ResolvedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResolvedRecord;
    type IntoIter = std::slice::Iter<'a, ResolvedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
