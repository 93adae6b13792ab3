//! Shared fixtures for integration tests.
//!
//! Posts dataset:
//!
//! ```text
//! Post1
//!   -> EN: Post1
//!   -> GR: Post1
//! Post2
//!   -> EN: Post2
//! Post3
//! ```
//!
//! An extra post lives on page 2 so page scoping has something to drop.

use std::path::PathBuf;

use overlay_db_core::config::DbConfig;
use overlay_db_core::dataset::Dataset;
use overlay_db_core::{Database, LanguageId};

pub const DEFAULT: LanguageId = LanguageId::DEFAULT;
pub const ENGLISH: LanguageId = LanguageId(1);
pub const GREEK: LanguageId = LanguageId(2);

pub const FIXTURES: [&str; 3] = ["pages.json", "translated_posts.json", "files.json"];

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// All fixture files merged into one dataset.
pub fn blog_dataset() -> Dataset {
    FIXTURES
        .iter()
        .map(|name| Dataset::from_path(&fixture_path(name), u64::MAX).unwrap())
        .fold(Dataset::default(), Dataset::merge)
}

/// Database with the blog dataset loaded, scoped to page 1.
pub fn blog_database() -> Database {
    let config = DbConfig {
        storage_page_ids: [1].into_iter().collect(),
        ..Default::default()
    };
    let db = Database::new(config);
    db.import(blog_dataset()).unwrap();
    db
}
