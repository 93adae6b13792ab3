//! Repository facade over one store snapshot.

use std::sync::Arc;

use crate::config::QuerySettings;
use crate::language::{EffectiveRecord, LanguagePolicy, LanguageResolver};
use crate::query::{Query, ResolvedRecord, ResultSet};
use crate::relation::RelationResolver;
use crate::store::RecordStore;
use crate::types::{LanguageId, RecordUid};

/// Entry point for reading records in a language.
///
/// A repository pins the snapshot it was created from; later imports are
/// not visible through it.
#[derive(Debug, Clone)]
pub struct Repository {
    store: Arc<RecordStore>,
    defaults: QuerySettings,
}

impl Repository {
    pub fn new(store: Arc<RecordStore>, defaults: QuerySettings) -> Self {
        Self { store, defaults }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// New query seeded with the default settings.
    pub fn create_query(&self) -> Query {
        Query::new(Arc::clone(&self.store), self.defaults.clone())
    }

    /// All in-scope records in `language`, in entity order.
    pub fn find_all(&self, language: LanguageId) -> ResultSet {
        self.language_query(language).execute()
    }

    pub fn count_all(&self, language: LanguageId) -> usize {
        self.language_query(language).count()
    }

    /// Looks a record up by uid in `language`.
    ///
    /// The storage page scope does not apply. An entity uid resolves like a
    /// query would; an overlay uid returns that overlay with its own
    /// attachments, whatever the requested language.
    pub fn find_by_uid(&self, uid: RecordUid, language: LanguageId) -> Option<ResolvedRecord> {
        let relations = RelationResolver::new(&self.store);

        if let Some(entity) = self.store.entity(uid) {
            let policy = LanguagePolicy {
                language,
                ..LanguagePolicy::from(&self.defaults)
            };
            let resolver = LanguageResolver::new(&self.store, policy);
            return resolver
                .resolve(entity)
                .map(|record| ResolvedRecord::from_effective(&record, &relations));
        }

        let overlay = self.store.localization_by_uid(uid)?;
        let entity = self.store.entity(overlay.parent)?;
        let record = EffectiveRecord::Overlay { entity, overlay };
        Some(ResolvedRecord::from_effective(&record, &relations))
    }

    fn language_query(&self, language: LanguageId) -> Query {
        let mut query = self.create_query();
        query.settings_mut().set_language_uid(language);
        query
    }
}
