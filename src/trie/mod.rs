//! Prefix-compressed trie over byte-string keys
//!
//! This module provides [`RadixMap`], a compressed radix trie whose
//! per-node edge maps are [`OrderMap`](crate::OrderMap) instances, so
//! children are always enumerable in label order. Leaves thread into a
//! global doubly-linked chain and every subtree tracks its leaf count,
//! which buys lexicographic iteration and order-statistic selection on
//! top of O(|key|) point operations.
//!
//! ## Examples
//!
//! ```rust
//! use strata::RadixMap;
//!
//! let mut map = RadixMap::new();
//! map.insert(b"lexeme", 1);
//! map.insert(b"lexicon", 2);
//! map.insert(b"lemma", 3);
//!
//! let keys: Vec<&[u8]> = map.iter().map(|(k, _)| k).collect();
//! assert_eq!(keys, vec![&b"lemma"[..], &b"lexeme"[..], &b"lexicon"[..]]);
//! ```

mod radix_map;

pub use radix_map::{Iter as RadixMapIter, RadixMap};
