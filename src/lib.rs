//! # Strata: Cache-Conscious In-Memory Containers
//!
//! This crate provides five generic containers engineered around memory
//! layout: flat metadata arrays scanned with SIMD, index-linked arenas
//! instead of pointer-chasing node allocations, and threaded lists that
//! make ordered iteration a pointer hop instead of a tree walk.
//!
//! ## Containers
//!
//! - **[`SwissMap`]**: open-addressed hash map probing 16 control bytes
//!   per step with a single vector comparison
//! - **[`OrderMap`]**: red-black tree augmented with subtree sizes,
//!   subtree extremes, and a threaded in-order list
//! - **[`RadixMap`]**: prefix-compressed trie over byte-string keys with
//!   per-subtree leaf counts and a global ordered leaf chain
//! - **[`LruMap`]**: bounded map fusing a [`SwissMap`] index with an
//!   intrusive recency list that recycles nodes at eviction
//! - **[`BTreeIndex`]**: bounded-fanout B-tree of configurable minimum
//!   degree
//!
//! Every container is a single-threaded value type: it owns its storage,
//! frees it on drop, and relies on Rust's borrow rules for the external
//! synchronisation its contract requires. Growth paths are fallible and
//! surface allocation failure as [`StrataError::OutOfMemory`] instead of
//! aborting.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::{BTreeIndex, LruMap, OrderMap, RadixMap, SwissMap};
//!
//! // SIMD-probed hash map
//! let mut map: SwissMap<&str, i32> = SwissMap::new();
//! map.insert("key", 1).unwrap();
//! assert_eq!(map.get("key"), Some(&1));
//!
//! // Ordered map with order statistics
//! let mut ordered = OrderMap::new();
//! for k in [7, 3, 18] {
//!     ordered.insert(k, ());
//! }
//! assert_eq!(ordered.find_kth_largest(1).map(|(k, _)| *k), Some(18));
//!
//! // Prefix-compressed trie
//! let mut trie = RadixMap::new();
//! trie.insert(b"foo", 1);
//! trie.insert(b"foobar", 2);
//! assert_eq!(trie.longest_prefix(b"foobaz"), Some(&1));
//!
//! // Bounded LRU cache
//! let mut cache = LruMap::new(2);
//! cache.put(1, "one").unwrap();
//!
//! // B-tree of minimum degree 2
//! let mut tree = BTreeIndex::new(2).unwrap();
//! tree.insert(5, "five");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod cache;
pub mod error;
pub mod hash_map;
pub mod ordered;
pub mod trie;

pub use cache::{LruMap, LruMapStats};
pub use error::{Result, StrataError};
pub use hash_map::SwissMap;
pub use ordered::{BTreeIndex, Comparator, NaturalOrder, OrderMap, ReverseOrder};
pub use trie::RadixMap;
