//! Entity catalogue.
//!
//! An immutable, externally supplied ordered set of entities (teams). The
//! catalogue never changes during a session; the engine consults it to
//! validate ids and to sort alphabetical containers.
//!
//! Sorting is case-insensitive on the display name, with ties broken by
//! catalogue position, so every alphabetical container has exactly one
//! canonical order.

mod ingest;
mod registry;
mod types;

pub use ingest::{normalize_records, parse_listing, slugify, write_artifact, RawRecord};
pub use registry::{Catalogue, ALL_CATEGORIES, DEFAULT_CATEGORY};
pub use types::{Entity, EntityId, PoolFilter};
