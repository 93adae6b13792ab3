//! Core of the translation-aware record store.
//!
//! Provides the immutable record store with per-language overlays, the
//! language resolver, the query engine, attachment resolution, dataset
//! import and the database/repository facade.

pub mod config;
pub mod database;
pub mod dataset;
pub mod error;
pub mod language;
pub mod query;
pub mod relation;
pub mod repository;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use database::{Database, ImportOutcome};
pub use error::DbError;
pub use types::{FileId, LanguageId, PageId, RecordUid};
