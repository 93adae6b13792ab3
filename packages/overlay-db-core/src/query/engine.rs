//! Query execution over a record store.

use crate::config::QuerySettings;
use crate::language::{LanguagePolicy, LanguageResolver};
use crate::relation::RelationResolver;
use crate::store::{Entity, RecordStore};

use super::ordering::Ordering;
use super::result_set::{ResolvedRecord, ResultSet};

/// Executes queries against one store snapshot.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Executes a query.
    ///
    /// # Arguments
    /// * `settings` - Storage scope and language policy
    /// * `orderings` - Orderings applied after language resolution
    ///
    /// # Returns
    /// `ResultSet` of effective records. Without orderings the records keep
    /// the insertion order of their entities; with orderings the sort is
    /// stable, so ties keep that order too.
    pub fn execute(&self, settings: &QuerySettings, orderings: &[Ordering]) -> ResultSet {
        let candidates = self.candidates(settings);
        let resolver = LanguageResolver::new(self.store, LanguagePolicy::from(settings));
        let mut resolved = resolver.resolve_all(candidates);

        if !orderings.is_empty() {
            resolved.sort_by(|a, b| Ordering::compare_all(orderings, a, b));
        }

        let relations = RelationResolver::new(self.store);
        let records = resolved
            .iter()
            .map(|record| ResolvedRecord::from_effective(record, &relations))
            .collect();
        ResultSet::new(records)
    }

    /// Number of records `execute` would return.
    pub fn count(&self, settings: &QuerySettings) -> usize {
        let resolver = LanguageResolver::new(self.store, LanguagePolicy::from(settings));
        self.candidates(settings)
            .into_iter()
            .filter(|&entity| resolver.resolve(entity).is_some())
            .count()
    }

    fn candidates(&self, settings: &QuerySettings) -> Vec<&'a Entity> {
        if !settings.respect_storage_page {
            return self.store.entities().iter().collect();
        }
        if settings.storage_page_ids.is_empty() {
            tracing::debug!("Query has an empty storage page scope");
        }
        self.store.entities_in_pages(&settings.storage_page_ids)
    }
}
