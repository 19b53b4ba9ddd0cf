#![warn(missing_docs)]

//! This crate provides [`Tree`], an in-memory ordered set implemented as a
//! red-black tree. Values double as their own keys: every stored value must
//! be [`Ord`], and no two stored values compare equal.
//!
//! Nodes live in an arena owned by the tree and are addressed through stable
//! [`NodeId`] handles, so parent back-references never dangle. The tree keeps
//! a sentinel ([`NodeId::HEADER`]) that anchors the root and marks the end of
//! in-order iteration.
//!
//! Lookup and insertion are split in two steps, so that the position found by
//! a failed search can be reused for the insertion:
//!
//! ```rust
//! use redwood_tree::{Lookup, Tree};
//!
//! let mut tree = Tree::new();
//! for value in [5, 3, 8, 1, 4] {
//!     if let Lookup::Vacant(position) = tree.find(&value, None) {
//!         tree.insert(position, value);
//!     }
//! }
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//!
//! tree.remove(&3);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 4, 5, 8]);
//! assert!(tree.validate().is_ok());
//! ```
//!
//! Values that implement [`Combine`] can additionally be folded one tier
//! (structural depth) at a time:
//!
//! ```rust
//! use redwood_tree::Tree;
//!
//! let tree: Tree<i64> = (1..=7).collect();
//! assert_eq!(tree.sum_one_tier(0), *tree.root_value().unwrap());
//! assert_eq!(tree.sum_one_tier(tree.height()), 0);
//! ```

mod arena;

mod node;
pub use node::*;

mod value;
pub use value::*;

mod error;
pub use error::*;

mod tree;
pub use tree::*;

mod search;
pub use search::*;

mod rotation;

mod insert;

mod remove;

mod navigate;

mod cursor;
pub use cursor::*;

mod iter;
pub use iter::*;

mod traversal;
pub use traversal::*;

mod tier;
pub use tier::*;

mod builder;
pub use builder::*;

mod outline;
pub use outline::*;

mod check;

/// Deterministic data generators for tests and benchmarks.
#[cfg(feature = "helpers")]
mod helpers;
#[cfg(feature = "helpers")]
pub use helpers::*;
