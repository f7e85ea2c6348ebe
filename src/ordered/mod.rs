//! Ordered map containers
//!
//! Two balanced search trees over comparator-ordered keys:
//!
//! - **[`OrderMap`]** - red-black tree augmented with subtree sizes,
//!   subtree extremes, and a threaded in-order list, giving order
//!   statistics and O(1) iteration stepping on top of the usual map
//!   surface
//! - **[`BTreeIndex`]** - bounded-fanout B-tree of configurable minimum
//!   degree with an explicit-stack in-order iterator
//!
//! Both are generic over a [`Comparator`]; [`NaturalOrder`] (the key
//! type's own `Ord`) is the default.
//!
//! ## Examples
//!
//! ```rust
//! use strata::OrderMap;
//!
//! let mut map = OrderMap::new();
//! for k in [13, 2, 26, 8] {
//!     map.insert(k, ());
//! }
//! assert_eq!(map.ceiling(&9).map(|(k, _)| *k), Some(13));
//! assert_eq!(map.find_kth_largest(2).map(|(k, _)| *k), Some(13));
//! ```

mod btree;
mod comparator;
mod order_map;

pub use btree::{BTreeIndex, BTreeIter};
pub use comparator::{Comparator, NaturalOrder, ReverseOrder};
pub use order_map::{Iter as OrderMapIter, IterRev as OrderMapIterRev, OrderMap};
