//! File resources and the ordered attachments pointing at them.

use serde::{Deserialize, Serialize};

use crate::types::{FileId, RecordUid};

/// Stored file resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub uid: FileId,
    /// Storage identifier, e.g. `/user_upload/image.jpg`
    pub identifier: String,
    /// Title metadata, unset for untitled files
    #[serde(default)]
    pub title: Option<String>,
}

impl File {
    pub fn new(uid: FileId, identifier: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            uid,
            identifier: identifier.into(),
            title: title.map(str::to_string),
        }
    }
}

/// Ordered link from an entity or overlay to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub uid: RecordUid,
    /// Entity or overlay uid owning this attachment
    pub owner: RecordUid,
    /// Referenced file
    pub file: FileId,
    /// Position within the owner's attachment list
    #[serde(default)]
    pub sorting: u32,
}

impl Attachment {
    pub fn new(uid: RecordUid, owner: RecordUid, file: FileId, sorting: u32) -> Self {
        Self {
            uid,
            owner,
            file,
            sorting,
        }
    }
}
