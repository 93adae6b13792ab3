//! Integrity checks and index construction for store builds.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::DbError;
use crate::types::{FileId, LanguageId, PageId, RecordUid};

use super::attachment::{Attachment, File};
use super::record::{Entity, Localization, StoragePage};

/// Indexes pages by uid, rejecting duplicates.
pub(crate) fn index_pages(pages: Vec<StoragePage>) -> Result<BTreeMap<PageId, StoragePage>, DbError> {
    let mut index = BTreeMap::new();
    for page in pages {
        let uid = page.uid;
        if index.insert(uid, page).is_some() {
            return Err(DbError::DuplicatePage { uid });
        }
    }
    Ok(index)
}

/// Indexes entities by uid and claims their uids.
///
/// Entities must live on a known page and use the default or the
/// "all languages" marker.
pub(crate) fn index_entities(
    entities: &[Entity],
    pages: &BTreeMap<PageId, StoragePage>,
    claimed: &mut HashSet<RecordUid>,
) -> Result<HashMap<RecordUid, usize>, DbError> {
    let mut index = HashMap::with_capacity(entities.len());
    for (position, entity) in entities.iter().enumerate() {
        if !claimed.insert(entity.uid) {
            return Err(DbError::DuplicateRecord { uid: entity.uid });
        }
        if entity.language != LanguageId::DEFAULT && entity.language != LanguageId::ALL {
            return Err(DbError::InvalidLanguage {
                uid: entity.uid,
                language: entity.language,
                reason: "entities must use the default language or -1",
            });
        }
        if !pages.contains_key(&entity.pid) {
            return Err(DbError::PageNotFound {
                uid: entity.uid,
                pid: entity.pid,
            });
        }
        index.insert(entity.uid, position);
    }
    Ok(index)
}

/// Indexes overlays by `(parent, language)` and by their own uid.
pub(crate) fn index_localizations(
    localizations: &[Localization],
    entities: &[Entity],
    entity_index: &HashMap<RecordUid, usize>,
    claimed: &mut HashSet<RecordUid>,
) -> Result<(HashMap<(RecordUid, LanguageId), usize>, HashMap<RecordUid, usize>), DbError> {
    let mut by_parent = HashMap::with_capacity(localizations.len());
    let mut by_uid = HashMap::with_capacity(localizations.len());

    for (position, overlay) in localizations.iter().enumerate() {
        if !claimed.insert(overlay.uid) {
            return Err(DbError::DuplicateRecord { uid: overlay.uid });
        }
        if !overlay.language.is_translation() {
            return Err(DbError::InvalidLanguage {
                uid: overlay.uid,
                language: overlay.language,
                reason: "localizations need a positive language id",
            });
        }
        let parent = entity_index
            .get(&overlay.parent)
            .map(|&idx| &entities[idx])
            .ok_or(DbError::RecordNotFound {
                uid: overlay.parent,
            })?;
        if parent.language != LanguageId::DEFAULT {
            return Err(DbError::InvalidLanguage {
                uid: overlay.uid,
                language: overlay.language,
                reason: "only default-language records can be localized",
            });
        }
        if by_parent
            .insert((overlay.parent, overlay.language), position)
            .is_some()
        {
            return Err(DbError::DuplicateLocalization {
                parent: overlay.parent,
                language: overlay.language,
            });
        }
        by_uid.insert(overlay.uid, position);
    }

    Ok((by_parent, by_uid))
}

/// Indexes files by uid, rejecting duplicates.
pub(crate) fn index_files(files: Vec<File>) -> Result<HashMap<FileId, File>, DbError> {
    let mut index = HashMap::with_capacity(files.len());
    for file in files {
        let uid = file.uid;
        if index.insert(uid, file).is_some() {
            return Err(DbError::DuplicateFile { uid });
        }
    }
    Ok(index)
}

/// Groups attachments by owner, each group ordered by `sorting`.
///
/// The sort is stable, so equal positions keep their import order.
pub(crate) fn group_attachments(
    attachments: Vec<Attachment>,
    records: &HashSet<RecordUid>,
    files: &HashMap<FileId, File>,
) -> Result<HashMap<RecordUid, Vec<Attachment>>, DbError> {
    let mut seen = HashSet::with_capacity(attachments.len());
    let mut groups: HashMap<RecordUid, Vec<Attachment>> = HashMap::new();

    for attachment in attachments {
        if !seen.insert(attachment.uid) {
            return Err(DbError::DuplicateAttachment {
                uid: attachment.uid,
            });
        }
        if !records.contains(&attachment.owner) {
            return Err(DbError::RecordNotFound {
                uid: attachment.owner,
            });
        }
        if !files.contains_key(&attachment.file) {
            return Err(DbError::FileNotFound {
                uid: attachment.uid,
                file: attachment.file,
            });
        }
        groups.entry(attachment.owner).or_default().push(attachment);
    }

    for group in groups.values_mut() {
        group.sort_by_key(|a| a.sorting);
    }
    Ok(groups)
}
