//! Dataset import through the database.

use std::io::Write;
use std::sync::Arc;

use ntest::timeout;
use tempfile::tempdir;

use overlay_db_core::config::DbConfig;
use overlay_db_core::dataset::Dataset;
use overlay_db_core::{Database, DbError, ImportOutcome};

use super::helpers::{blog_dataset, fixture_path, DEFAULT, ENGLISH};

#[timeout(1000)]
#[test]
fn test_import_merged_fixtures() {
    let db = Database::default();
    let outcome = db.import(blog_dataset()).unwrap();

    assert!(matches!(outcome, ImportOutcome::Loaded { records: 4, .. }));
    let store = db.store();
    assert_eq!(store.localization_count(), 3);
    assert_eq!(store.pages().count(), 2);
}

#[timeout(1000)]
#[test]
fn test_reimport_is_a_no_op() {
    let db = Database::default();
    db.import(blog_dataset()).unwrap();
    let snapshot = db.store();

    let outcome = db.import(blog_dataset()).unwrap();
    assert!(matches!(outcome, ImportOutcome::Unchanged { .. }));
    assert!(Arc::ptr_eq(&snapshot, &db.store()));
}

#[timeout(3000)]
#[test]
fn test_import_from_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("blog.json");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(serde_json::to_string_pretty(&blog_dataset())?.as_bytes())?;
    drop(file);

    let config = DbConfig {
        storage_page_ids: [1].into_iter().collect(),
        ..Default::default()
    };
    let db = Database::new(config);
    db.import_path(&path)?;

    let repository = db.repository();
    assert_eq!(repository.find_all(ENGLISH).titles(), vec!["B EN:Post1", "A EN:Post2", "Post3"]);
    assert_eq!(repository.find_by_uid(7, DEFAULT).map(|p| p.pid), Some(2));
    Ok(())
}

#[timeout(1000)]
#[test]
fn test_oversized_dataset_rejected() {
    let config = DbConfig {
        max_dataset_size: 16,
        ..Default::default()
    };
    let db = Database::new(config);

    let err = db.import_path(&fixture_path("translated_posts.json")).unwrap_err();
    assert!(matches!(err, DbError::DatasetTooLarge { limit: 16, .. }));
    assert!(db.store().is_empty());
}

#[timeout(1000)]
#[test]
fn test_partial_fixture_fails_validation() {
    // Attachments without the records they belong to
    let files = Dataset::from_path(&fixture_path("files.json"), u64::MAX).unwrap();
    let db = Database::default();

    let err = db.import(files).unwrap_err();
    assert_eq!(err, DbError::RecordNotFound { uid: 1 });
    assert!(db.store().is_empty());
}

#[timeout(1000)]
#[test]
fn test_posts_without_pages_fail_validation() {
    let posts = Dataset::from_path(&fixture_path("translated_posts.json"), u64::MAX).unwrap();
    let err = Database::default().import(posts).unwrap_err();
    assert_eq!(err, DbError::PageNotFound { uid: 1, pid: 1 });
}
