//! Language overlay resolution.
//!
//! Picks the effective variant of each entity for a requested language:
//! the overlay in that language when one exists, otherwise the default
//! record. Overlays are never merged with their parent.

use serde::{Deserialize, Serialize};

use crate::config::QuerySettings;
use crate::store::{Entity, Localization, RecordStore};
use crate::types::{LanguageId, PageId, RecordUid};

/// Handling of entities without an overlay in the requested language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageMode {
    /// Fall back to the default-language record
    #[default]
    ContentFallback,
    /// Omit the entity
    Strict,
}

/// Requested language plus fallback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePolicy {
    pub language: LanguageId,
    pub respect_sys_language: bool,
    pub mode: LanguageMode,
}

impl LanguagePolicy {
    /// Overlay-respecting policy with default-language fallback.
    pub fn fallback(language: LanguageId) -> Self {
        Self {
            language,
            respect_sys_language: true,
            mode: LanguageMode::ContentFallback,
        }
    }

    /// True when no overlay can ever be selected.
    fn selects_default_only(&self) -> bool {
        !self.respect_sys_language || self.language.is_default()
    }
}

impl From<&QuerySettings> for LanguagePolicy {
    fn from(settings: &QuerySettings) -> Self {
        Self {
            language: settings.language_uid,
            respect_sys_language: settings.respect_sys_language,
            mode: settings.language_mode,
        }
    }
}

/// The variant of an entity selected for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveRecord<'a> {
    /// Default-language record, either requested or fallen back to
    Default(&'a Entity),
    /// Overlay in the requested language
    Overlay {
        entity: &'a Entity,
        overlay: &'a Localization,
    },
}

impl<'a> EffectiveRecord<'a> {
    /// Logical entity behind this variant.
    pub fn entity(&self) -> &'a Entity {
        match *self {
            EffectiveRecord::Default(entity) => entity,
            EffectiveRecord::Overlay { entity, .. } => entity,
        }
    }

    pub fn entity_uid(&self) -> RecordUid {
        self.entity().uid
    }

    /// Uid of the selected variant. Attachments hang off this uid.
    pub fn uid(&self) -> RecordUid {
        match *self {
            EffectiveRecord::Default(entity) => entity.uid,
            EffectiveRecord::Overlay { overlay, .. } => overlay.uid,
        }
    }

    /// Overlays are stored on the page of their parent.
    pub fn pid(&self) -> PageId {
        self.entity().pid
    }

    pub fn language(&self) -> LanguageId {
        match *self {
            EffectiveRecord::Default(entity) => entity.language,
            EffectiveRecord::Overlay { overlay, .. } => overlay.language,
        }
    }

    pub fn title(&self) -> &'a str {
        match *self {
            EffectiveRecord::Default(entity) => &entity.title,
            EffectiveRecord::Overlay { overlay, .. } => &overlay.title,
        }
    }

    pub fn content(&self) -> Option<&'a str> {
        match *self {
            EffectiveRecord::Default(entity) => entity.content.as_deref(),
            EffectiveRecord::Overlay { overlay, .. } => overlay.content.as_deref(),
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, EffectiveRecord::Overlay { .. })
    }
}

/// Resolves entities against one language policy.
#[derive(Debug, Clone, Copy)]
pub struct LanguageResolver<'a> {
    store: &'a RecordStore,
    policy: LanguagePolicy,
}

impl<'a> LanguageResolver<'a> {
    pub fn new(store: &'a RecordStore, policy: LanguagePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> LanguagePolicy {
        self.policy
    }

    /// Selects the effective record for `entity`.
    ///
    /// Returns `None` only in strict mode, for an entity without an overlay
    /// in the requested language.
    pub fn resolve(&self, entity: &'a Entity) -> Option<EffectiveRecord<'a>> {
        if self.policy.selects_default_only() || entity.language == LanguageId::ALL {
            return Some(EffectiveRecord::Default(entity));
        }

        match self.store.localization_of(entity.uid, self.policy.language) {
            Some(overlay) => Some(EffectiveRecord::Overlay { entity, overlay }),
            None => match self.policy.mode {
                LanguageMode::ContentFallback => Some(EffectiveRecord::Default(entity)),
                LanguageMode::Strict => None,
            },
        }
    }

    /// Resolves a sequence of entities, preserving their order.
    pub fn resolve_all<I>(&self, entities: I) -> Vec<EffectiveRecord<'a>>
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        let resolved: Vec<_> = entities
            .into_iter()
            .filter_map(|entity| self.resolve(entity))
            .collect();
        tracing::debug!(
            "Resolved {} records for language {} ({} overlays)",
            resolved.len(),
            self.policy.language,
            resolved.iter().filter(|r| r.is_overlay()).count()
        );
        resolved
    }
}
