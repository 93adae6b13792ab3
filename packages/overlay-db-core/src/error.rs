//! Database error types.

use thiserror::Error;

use crate::types::{FileId, LanguageId, PageId, RecordUid};

/// Errors raised while building a store, importing a dataset or parsing
/// query input. Query execution itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// Uid used by more than one entity or overlay
    #[error("Record uid {uid} is already in use")]
    DuplicateRecord { uid: RecordUid },

    /// Second overlay for the same entity and language
    #[error("Record {parent} already has a localization in language {language}")]
    DuplicateLocalization {
        parent: RecordUid,
        language: LanguageId,
    },

    /// Page uid declared twice
    #[error("Page {uid} is already defined")]
    DuplicatePage { uid: PageId },

    /// File uid declared twice
    #[error("File {uid} is already defined")]
    DuplicateFile { uid: FileId },

    /// Attachment uid declared twice
    #[error("Attachment {uid} is already defined")]
    DuplicateAttachment { uid: RecordUid },

    /// Referenced record does not exist
    #[error("Record {uid} not found")]
    RecordNotFound { uid: RecordUid },

    /// Referenced page does not exist
    #[error("Page {pid} referenced by record {uid} not found")]
    PageNotFound { uid: RecordUid, pid: PageId },

    /// Referenced file does not exist
    #[error("File {file} referenced by attachment {uid} not found")]
    FileNotFound { uid: RecordUid, file: FileId },

    /// Record language not allowed in its role
    #[error("Record {uid} cannot use language {language}: {reason}")]
    InvalidLanguage {
        uid: RecordUid,
        language: LanguageId,
        reason: &'static str,
    },

    /// Unknown ordering field
    #[error("Field '{field}' cannot be used for ordering")]
    FieldNotFound { field: String },

    /// Malformed ordering expression
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(String),

    /// Dataset file larger than the configured limit
    #[error("Dataset of {size} bytes exceeds limit of {limit} bytes")]
    DatasetTooLarge { size: u64, limit: u64 },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error while reading a dataset
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::SerializationError(err.to_string())
    }
}
