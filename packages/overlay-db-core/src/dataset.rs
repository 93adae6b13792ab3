//! Bulk dataset import.
//!
//! A dataset is a JSON document listing pages, records, localization
//! overlays, files and attachments:
//!
//! ```json
//! {
//!   "pages": [{ "uid": 1, "title": "Blog" }],
//!   "records": [{ "uid": 1, "pid": 1, "title": "Post1" }],
//!   "localizations": [{ "uid": 2, "parent": 1, "language": 1, "title": "EN:Post1" }],
//!   "files": [{ "uid": 1, "identifier": "/user_upload/a.jpg", "title": "an image" }],
//!   "attachments": [{ "uid": 1, "owner": 1, "file": 1, "sorting": 1 }]
//! }
//! ```
//!
//! Every section is optional.

use std::io::ErrorKind;
use std::path::Path;

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::error::DbError;
use crate::store::{Attachment, Entity, File, Localization, RecordStore, StoragePage};

/// Records of one import, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    #[serde(default)]
    pub pages: Vec<StoragePage>,
    #[serde(default)]
    pub records: Vec<Entity>,
    #[serde(default)]
    pub localizations: Vec<Localization>,
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Dataset {
    /// Parses a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DbError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a dataset file.
    ///
    /// # Arguments
    /// * `path` - JSON dataset file
    /// * `max_size` - Largest accepted file size in bytes
    ///
    /// # Returns
    /// `Result<Dataset, DbError>`; oversized files are rejected before
    /// they are read.
    pub fn from_path(path: &Path, max_size: u64) -> Result<Self, DbError> {
        let context = path.display().to_string();
        let size = std::fs::metadata(path)
            .map_err(|e| classify_io_error(e, &context))?
            .len();
        if size > max_size {
            return Err(DbError::DatasetTooLarge {
                size,
                limit: max_size,
            });
        }

        let json = std::fs::read_to_string(path).map_err(|e| classify_io_error(e, &context))?;
        let dataset = Self::from_json_str(&json)?;
        tracing::info!(
            "Read dataset {}: {} records, {} localizations",
            context,
            dataset.records.len(),
            dataset.localizations.len()
        );
        Ok(dataset)
    }

    /// Appends all records of `other`, keeping this dataset's records first.
    pub fn merge(mut self, other: Dataset) -> Self {
        self.pages.extend(other.pages);
        self.records.extend(other.records);
        self.localizations.extend(other.localizations);
        self.files.extend(other.files);
        self.attachments.extend(other.attachments);
        self
    }

    /// CRC32 of the canonical JSON encoding.
    ///
    /// Identical datasets have identical checksums regardless of the
    /// whitespace or key order of their source files.
    pub fn checksum(&self) -> Result<u32, DbError> {
        let bytes = serde_json::to_vec(self)?;
        let mut hasher = Hasher::new();
        hasher.update(&bytes);
        Ok(hasher.finalize())
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
            && self.records.is_empty()
            && self.localizations.is_empty()
            && self.files.is_empty()
            && self.attachments.is_empty()
    }

    /// Validates the dataset and builds a store tagged with its checksum.
    pub fn into_store(self) -> Result<RecordStore, DbError> {
        let checksum = self.checksum()?;
        self.into_store_with_checksum(checksum)
    }

    pub(crate) fn into_store_with_checksum(self, checksum: u32) -> Result<RecordStore, DbError> {
        RecordStore::builder()
            .pages(self.pages)
            .entities(self.records)
            .localizations(self.localizations)
            .files(self.files)
            .attachments(self.attachments)
            .checksum(checksum)
            .build()
    }
}

/// Maps an I/O error to a `DbError` carrying the file context.
fn classify_io_error(error: std::io::Error, context: &str) -> DbError {
    match error.kind() {
        ErrorKind::InvalidData => DbError::SerializationError(format!("{}: {}", context, error)),
        _ => DbError::IoError(format!("{}: {}", context, error)),
    }
}
