//! Entity, localization overlay and storage page records.

use serde::{Deserialize, Serialize};

use crate::types::{LanguageId, PageId, RecordUid};

/// Language-independent logical content record (a post).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Record uid, stable across languages
    pub uid: RecordUid,
    /// Storage page holding the record
    pub pid: PageId,
    /// Default language, or `-1` for records shown in every language
    #[serde(default)]
    pub language: LanguageId,
    /// Title in the default language
    pub title: String,
    /// Body text in the default language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Entity {
    pub fn new(uid: RecordUid, pid: PageId, title: impl Into<String>) -> Self {
        Self {
            uid,
            pid,
            language: LanguageId::DEFAULT,
            title: title.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_language(mut self, language: LanguageId) -> Self {
        self.language = language;
        self
    }
}

/// Language-specific overlay of an entity.
///
/// Overlay fields are self-contained: an unset field stays unset and is
/// never filled from the parent entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localization {
    /// Overlay uid, shares the namespace of entity uids
    pub uid: RecordUid,
    /// Uid of the default-language entity being translated
    pub parent: RecordUid,
    /// Translation language, always positive
    pub language: LanguageId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Localization {
    pub fn new(
        uid: RecordUid,
        parent: RecordUid,
        language: impl Into<LanguageId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            uid,
            parent,
            language: language.into(),
            title: title.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Scoping container for records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePage {
    pub uid: PageId,
    #[serde(default)]
    pub title: String,
}

impl StoragePage {
    pub fn new(uid: PageId, title: impl Into<String>) -> Self {
        Self {
            uid,
            title: title.into(),
        }
    }
}
