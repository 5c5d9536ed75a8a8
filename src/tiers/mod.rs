//! Tier table and board configuration.
//!
//! The tiers are a fixed enumerated set, most favored first. Two of them
//! (`favorite`, `always_lose`) hold a single entity; the other four are
//! unbounded and may switch between manual order and alphabetical order.
//! The pool is not a tier: it is derived as everything no tier holds.

mod config;
mod types;

pub use config::{BoardConfig, DEFAULT_STORAGE_KEY};
pub use types::{validate_descriptors, Capacity, Container, TierDescriptor, TierId, POOL_ID};
