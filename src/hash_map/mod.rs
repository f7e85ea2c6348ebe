//! Open-addressed hash map with SIMD metadata probing
//!
//! This module provides [`SwissMap`], the crate's foundational hash table.
//! It keeps per-slot metadata in a flat control-byte array scanned 16 bytes
//! at a time, so probing resolves most lookups with a single vector
//! comparison before any key is touched.
//!
//! ## Examples
//!
//! ```rust
//! use strata::SwissMap;
//!
//! let mut map: SwissMap<&str, i32> = SwissMap::new();
//! map.insert("answer", 42).unwrap();
//! assert_eq!(map.get("answer"), Some(&42));
//! assert_eq!(map.remove("answer"), Some(42));
//! assert_eq!(map.get("answer"), None);
//! ```

mod group;
mod swiss_map;

pub use swiss_map::{Iter, Keys, SwissMap, Values};
