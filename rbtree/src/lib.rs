//! Red-black tree ordered map with dict-like API.
//!
//! This crate provides [`RBTreeMap`], an ordered associative container
//! backed by a red-black tree: unique keys map to mutable values, sorted by
//! a caller-supplied [`Comparator`] (the natural `Ord` ordering by default),
//! with bidirectional, owner-checked [`Cursor`]s for traversal.
//!
//! Nodes live in an index-addressed arena, so the parent/child link graph
//! carries no ownership cycles and cursor misuse degrades into a reported
//! error instead of undefined behavior.
//!
//! # Examples
//!
//! ```
//! use rbtree::RBTreeMap;
//!
//! let mut map = RBTreeMap::new();
//! for key in [5, 3, 8] {
//!     map.insert(key, key * 10);
//! }
//!
//! assert_eq!(map.get(&3), Some(&30));
//!
//! let mut cursor = map.begin();
//! assert_eq!(map.key_at(cursor), Ok(&3));
//! cursor = map.next(cursor).unwrap();
//! assert_eq!(map.key_at(cursor), Ok(&5));
//! ```

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod traversal;
mod types;
mod validation;

pub use error::{CursorResult, KeyResult, RBTreeError, TreeResult};
pub use iteration::{Cursor, Iter, Keys, Values};
pub use types::{Comparator, NaturalOrder, OrderBy, RBTreeMap};
