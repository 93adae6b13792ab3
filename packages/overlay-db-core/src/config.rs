//! Database and query configuration.

use std::collections::BTreeSet;

use crate::language::LanguageMode;
use crate::types::{LanguageId, PageId};

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Storage pages new queries are scoped to
    pub storage_page_ids: BTreeSet<PageId>,
    /// Whether new queries resolve language overlays
    pub respect_sys_language: bool,
    /// Whether new queries filter by storage page
    pub respect_storage_page: bool,
    /// Overlay handling for records missing a translation
    pub language_mode: LanguageMode,
    /// Maximum dataset file size in bytes accepted by `import_path`
    pub max_dataset_size: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            storage_page_ids: BTreeSet::new(),
            respect_sys_language: true,
            respect_storage_page: true,
            language_mode: LanguageMode::ContentFallback,
            max_dataset_size: 64 * 1024 * 1024, // 64 MiB
        }
    }
}

impl DbConfig {
    /// Query settings seeded from this configuration in the default language.
    pub fn query_settings(&self) -> QuerySettings {
        QuerySettings {
            storage_page_ids: self.storage_page_ids.clone(),
            respect_storage_page: self.respect_storage_page,
            respect_sys_language: self.respect_sys_language,
            language_uid: LanguageId::DEFAULT,
            language_mode: self.language_mode,
        }
    }
}

/// Settings of a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    /// Pages whose records are candidates
    pub storage_page_ids: BTreeSet<PageId>,
    /// When false every record is a candidate regardless of its page
    pub respect_storage_page: bool,
    /// When false overlays are ignored and default records returned
    pub respect_sys_language: bool,
    /// Requested language
    pub language_uid: LanguageId,
    /// Handling of records without an overlay in the requested language
    pub language_mode: LanguageMode,
}

impl Default for QuerySettings {
    fn default() -> Self {
        DbConfig::default().query_settings()
    }
}

impl QuerySettings {
    pub fn set_storage_page_ids<I>(&mut self, page_ids: I) -> &mut Self
    where
        I: IntoIterator<Item = PageId>,
    {
        self.storage_page_ids = page_ids.into_iter().collect();
        self
    }

    pub fn set_respect_storage_page(&mut self, respect: bool) -> &mut Self {
        self.respect_storage_page = respect;
        self
    }

    pub fn set_respect_sys_language(&mut self, respect: bool) -> &mut Self {
        self.respect_sys_language = respect;
        self
    }

    pub fn set_language_uid(&mut self, language: impl Into<LanguageId>) -> &mut Self {
        self.language_uid = language.into();
        self
    }

    pub fn set_language_mode(&mut self, mode: LanguageMode) -> &mut Self {
        self.language_mode = mode;
        self
    }
}
