//! Query engine: storage-page scoping, language resolution, ordering and
//! counting.

mod engine;
mod ordering;
#[allow(clippy::module_inception)]
mod query;
mod result_set;

pub use engine::QueryEngine;
pub use ordering::{OrderDirection, OrderField, Ordering};
pub use query::Query;
pub use result_set::{ResolvedRecord, ResultSet};
