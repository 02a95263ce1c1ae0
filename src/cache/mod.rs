//! Response caching for the DexPaprika client.
//!
//! This module provides a time-based cache with per-entry TTL, deterministic
//! key construction from path and parameters, and the per-resource TTL table.

pub mod key;
pub mod policy;
pub mod timed_cache;

pub use key::cache_key;
pub use policy::{ResourceKind, TtlPolicy};
pub use timed_cache::TimedCache;
