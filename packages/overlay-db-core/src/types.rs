//! Identifier types shared by every record kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Uid of an entity or a localization overlay. Both share one namespace.
pub type RecordUid = u64;

/// Uid of a storage page.
pub type PageId = u64;

/// Uid of a file resource.
pub type FileId = u64;

/// Language of a record or of a query.
///
/// `0` is the default language, `-1` marks records shown in every language,
/// positive values are configured site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageId(pub i32);

impl LanguageId {
    /// Default (original) language.
    pub const DEFAULT: LanguageId = LanguageId(0);
    /// "All languages" marker.
    pub const ALL: LanguageId = LanguageId(-1);

    /// True for the default language and the "all languages" marker.
    pub fn is_default(self) -> bool {
        self.0 <= 0
    }

    /// True for a configured translation language.
    pub fn is_translation(self) -> bool {
        self.0 > 0
    }
}

impl From<i32> for LanguageId {
    fn from(value: i32) -> Self {
        LanguageId(value)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_classification() {
        assert!(LanguageId::DEFAULT.is_default());
        assert!(LanguageId::ALL.is_default());
        assert!(!LanguageId(2).is_default());
        assert!(LanguageId(2).is_translation());
        assert!(!LanguageId::ALL.is_translation());
    }

    #[test]
    fn test_language_serializes_as_integer() {
        let json = serde_json::to_string(&LanguageId(1)).unwrap();
        assert_eq!(json, "1");
        let parsed: LanguageId = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed, LanguageId::ALL);
    }
}
