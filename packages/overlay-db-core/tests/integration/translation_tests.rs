//! Translated record queries over the blog dataset.

use ntest::timeout;
use overlay_db_core::language::LanguageMode;
use overlay_db_core::query::{OrderField, Ordering};
use overlay_db_core::LanguageId;

use super::helpers::{blog_database, DEFAULT, ENGLISH, GREEK};

#[timeout(1000)]
#[test]
fn test_count_posts_in_default_language() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query
        .settings_mut()
        .set_storage_page_ids([1])
        .set_respect_sys_language(true)
        .set_language_uid(DEFAULT);

    assert_eq!(query.execute().count(), 3);
}

#[timeout(1000)]
#[test]
fn test_count_posts_in_english() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query
        .settings_mut()
        .set_storage_page_ids([1])
        .set_respect_sys_language(true)
        .set_language_uid(ENGLISH);

    assert_eq!(query.execute().count(), 3);
}

#[timeout(1000)]
#[test]
fn test_count_posts_in_greek() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query
        .settings_mut()
        .set_storage_page_ids([1])
        .set_respect_sys_language(true)
        .set_language_uid(GREEK);

    // Only Post1 has a Greek overlay, the others fall back
    assert_eq!(query.execute().count(), 3);
    assert_eq!(query.count(), 3);
}

#[timeout(1000)]
#[test]
fn test_count_matches_scope_for_any_language() {
    let db = blog_database();
    let repository = db.repository();

    for language in (-1..=5).map(LanguageId) {
        assert_eq!(repository.count_all(language), 3, "language {}", language);
    }
}

#[timeout(1000)]
#[test]
fn test_fetch_english_posts_with_fallback() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query.settings_mut().set_storage_page_ids([1]).set_language_uid(ENGLISH);

    let posts = query.execute().to_array();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].title(), "B EN:Post1");
    assert_eq!(posts[1].title(), "A EN:Post2");
    assert_eq!(posts[2].title(), "Post3");
}

#[timeout(1000)]
#[test]
fn test_fetch_greek_posts_with_fallback() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query.settings_mut().set_storage_page_ids([1]).set_language_uid(GREEK);

    let posts = query.execute().to_array();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].title(), "GR:Post1");
    assert_eq!(posts[1].title(), "Post2");
    assert_eq!(posts[2].title(), "Post3");
}

#[timeout(1000)]
#[test]
fn test_ordering_by_title_respects_english_titles() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query.settings_mut().set_storage_page_ids([1]).set_language_uid(ENGLISH);
    query.set_orderings([Ordering::ascending(OrderField::Title)]);

    let posts = query.execute().to_array();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].title(), "A EN:Post2");
    assert_eq!(posts[1].title(), "B EN:Post1");
    assert_eq!(posts[2].title(), "Post3");
}

#[timeout(1000)]
#[test]
fn test_images_in_default_language() {
    let db = blog_database();
    let post = db.repository().find_by_uid(1, DEFAULT).unwrap();

    assert_eq!(post.title(), "Post1");
    assert_eq!(post.images().len(), 1);
    for image in post.images() {
        assert_eq!(image.title.as_deref(), Some("my test image"));
    }
}

#[timeout(1000)]
#[test]
fn test_images_in_english() {
    let db = blog_database();
    let post = db.repository().find_by_uid(2, ENGLISH).unwrap();

    assert_eq!(post.title(), "B EN:Post1");
    assert_eq!(post.images().len(), 2);
    assert_eq!(post.images()[0].title.as_deref(), Some("EN my test image"));
    assert_eq!(post.images()[1].title, None);
}

#[timeout(1000)]
#[test]
fn test_images_follow_the_effective_record_in_queries() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query.settings_mut().set_language_uid(ENGLISH);

    let result = query.execute();
    let image_counts: Vec<_> = result.iter().map(|post| post.images().len()).collect();
    assert_eq!(image_counts, vec![2, 0, 0]);

    query.settings_mut().set_language_uid(GREEK);
    let result = query.execute();
    let image_counts: Vec<_> = result.iter().map(|post| post.images().len()).collect();
    // The Greek overlay carries no images of its own
    assert_eq!(image_counts, vec![0, 0, 0]);
}

#[timeout(1000)]
#[test]
fn test_overlay_content_is_not_inherited() {
    let db = blog_database();
    let repository = db.repository();

    assert_eq!(
        repository.find_by_uid(1, DEFAULT).unwrap().content.as_deref(),
        Some("Content of post 1")
    );
    assert_eq!(repository.find_by_uid(1, ENGLISH).unwrap().content, None);
}

#[timeout(1000)]
#[test]
fn test_strict_mode_omits_untranslated_posts() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query
        .settings_mut()
        .set_language_uid(GREEK)
        .set_language_mode(LanguageMode::Strict);

    assert_eq!(query.execute().titles(), vec!["GR:Post1"]);

    query.settings_mut().set_language_uid(ENGLISH);
    assert_eq!(query.execute().titles(), vec!["B EN:Post1", "A EN:Post2"]);
}

#[timeout(1000)]
#[test]
fn test_storage_page_scope() {
    let db = blog_database();
    let mut query = db.repository().create_query();

    query.settings_mut().set_storage_page_ids([2]);
    assert_eq!(query.execute().titles(), vec!["Archived post"]);

    query.settings_mut().set_storage_page_ids(std::iter::empty());
    assert!(query.execute().is_empty());

    query.settings_mut().set_respect_storage_page(false);
    assert_eq!(query.count(), 4);
}

#[timeout(1000)]
#[test]
fn test_disabling_sys_language_returns_default_titles() {
    let db = blog_database();
    let mut query = db.repository().create_query();
    query
        .settings_mut()
        .set_language_uid(ENGLISH)
        .set_respect_sys_language(false);

    assert_eq!(query.execute().titles(), vec!["Post1", "Post2", "Post3"]);
}
