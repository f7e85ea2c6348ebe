//! Bounded caches with recency-based eviction
//!
//! This module provides [`LruMap`], a fixed-capacity map that evicts the
//! least-recently-used entry when full. Lookups go through a
//! [`SwissMap`](crate::SwissMap) index; recency is an intrusive
//! doubly-linked list threaded through a dense node arena, and evicted
//! nodes are recycled in place rather than reallocated.
//!
//! ## Examples
//!
//! ```rust
//! use strata::LruMap;
//!
//! let mut cache = LruMap::new(128);
//! cache.put("page:1", vec![0u8; 64]).unwrap();
//! assert!(cache.get(&"page:1").is_some());
//! ```

mod lru_map;

pub use lru_map::{LruMap, LruMapStats};
