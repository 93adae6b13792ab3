//! Integration test suite.
//!
//! Tests are organized by area:
//! 1. Translated record queries (counts, fallback, ordering, images)
//! 2. Dataset import through the database

pub mod dataset_tests;
pub mod helpers;
pub mod translation_tests;
