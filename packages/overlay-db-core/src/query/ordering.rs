//! Orderings over effective (post-resolution) record fields.

use std::cmp::Ordering as CmpOrdering;
use std::fmt;
use std::str::FromStr;

use crate::error::DbError;
use crate::language::EffectiveRecord;

/// Field a query can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    /// Logical entity uid
    Uid,
    Pid,
    Title,
    /// Unset content sorts before any value
    Content,
}

impl FromStr for OrderField {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uid" => Ok(OrderField::Uid),
            "pid" => Ok(OrderField::Pid),
            "title" => Ok(OrderField::Title),
            "content" => Ok(OrderField::Content),
            other => Err(DbError::FieldNotFound {
                field: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderField::Uid => "uid",
            OrderField::Pid => "pid",
            OrderField::Title => "title",
            OrderField::Content => "content",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for OrderDirection {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(OrderDirection::Ascending),
            "desc" | "descending" => Ok(OrderDirection::Descending),
            other => Err(DbError::InvalidOrdering(format!(
                "unknown direction '{}'",
                other
            ))),
        }
    }
}

/// One `(field, direction)` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub field: OrderField,
    pub direction: OrderDirection,
}

impl Ordering {
    pub fn ascending(field: OrderField) -> Self {
        Self {
            field,
            direction: OrderDirection::Ascending,
        }
    }

    pub fn descending(field: OrderField) -> Self {
        Self {
            field,
            direction: OrderDirection::Descending,
        }
    }

    /// Compares two effective records on this ordering's field.
    ///
    /// Strings compare byte-wise, so the comparison is case-sensitive.
    pub fn compare(&self, a: &EffectiveRecord<'_>, b: &EffectiveRecord<'_>) -> CmpOrdering {
        let ordering = match self.field {
            OrderField::Uid => a.entity_uid().cmp(&b.entity_uid()),
            OrderField::Pid => a.pid().cmp(&b.pid()),
            OrderField::Title => a.title().cmp(b.title()),
            OrderField::Content => a.content().cmp(&b.content()),
        };
        match self.direction {
            OrderDirection::Ascending => ordering,
            OrderDirection::Descending => ordering.reverse(),
        }
    }

    /// Compares on each ordering in turn until one differs.
    pub fn compare_all(
        orderings: &[Ordering],
        a: &EffectiveRecord<'_>,
        b: &EffectiveRecord<'_>,
    ) -> CmpOrdering {
        orderings
            .iter()
            .map(|ordering| ordering.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(CmpOrdering::Equal)
    }
}

/// Parses `field` or `field:direction`, e.g. `title:desc`.
impl FromStr for Ordering {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(':') {
            Some((field, direction)) => (field, direction.parse()?),
            None => (s, OrderDirection::Ascending),
        };
        if field.is_empty() {
            return Err(DbError::InvalidOrdering(format!("missing field in '{}'", s)));
        }
        Ok(Self {
            field: field.parse()?,
            direction,
        })
    }
}
