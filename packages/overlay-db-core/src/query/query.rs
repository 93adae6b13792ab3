//! Query object bound to a store snapshot.

use std::sync::Arc;

use crate::config::QuerySettings;
use crate::store::RecordStore;

use super::engine::QueryEngine;
use super::ordering::Ordering;
use super::result_set::ResultSet;

/// Query settings, orderings and an optional result window.
#[derive(Debug, Clone)]
pub struct Query {
    store: Arc<RecordStore>,
    settings: QuerySettings,
    orderings: Vec<Ordering>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl Query {
    pub fn new(store: Arc<RecordStore>, settings: QuerySettings) -> Self {
        Self {
            store,
            settings,
            orderings: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut QuerySettings {
        &mut self.settings
    }

    pub fn orderings(&self) -> &[Ordering] {
        &self.orderings
    }

    /// Replaces the orderings; earlier entries take precedence.
    pub fn set_orderings(&mut self, orderings: impl IntoIterator<Item = Ordering>) -> &mut Self {
        self.orderings = orderings.into_iter().collect();
        self
    }

    pub fn set_limit(&mut self, limit: usize) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn set_offset(&mut self, offset: usize) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// Executes against the snapshot the query was created with.
    pub fn execute(&self) -> ResultSet {
        let result = QueryEngine::new(&self.store).execute(&self.settings, &self.orderings);
        if self.limit.is_none() && self.offset.is_none() {
            return result;
        }
        result.paginate(self.offset, self.limit)
    }

    /// Counts matching records, honoring the result window.
    pub fn count(&self) -> usize {
        let total = QueryEngine::new(&self.store).count(&self.settings);
        let after_offset = total.saturating_sub(self.offset.unwrap_or(0));
        match self.limit {
            Some(limit) => after_offset.min(limit),
            None => after_offset,
        }
    }
}
