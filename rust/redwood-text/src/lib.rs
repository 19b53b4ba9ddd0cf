#![warn(missing_docs)]

//! This crate reads and writes [`redwood_tree::Tree`]s in an indented,
//! line-oriented text format.
//!
//! Every node occupies one line holding its value and color; every absent
//! child occupies one line holding `null`. Lines appear in pre-order (a node,
//! then its left subtree, then its right subtree) and are indented by four
//! spaces per level of depth:
//!
//! ```text
//! 10 black
//!     5 red
//!         null
//!         7 black
//!             null
//!             null
//!     15 black
//!         null
//!         null
//! ```
//!
//! The format is structural: reading back a written tree reproduces its
//! shape and colors exactly, not only its values.
//!
//! ```rust
//! use redwood_tree::Tree;
//!
//! let tree: Tree<u32> = [2, 1, 3].into_iter().collect();
//! let text = redwood_text::render(&tree)?;
//! assert_eq!(text.lines().next(), Some("2 black"));
//!
//! let copy: Tree<u32> = redwood_text::parse(&text)?;
//! assert_eq!(redwood_text::render(&copy)?, text);
//! # Ok::<(), redwood_text::RedwoodTextError>(())
//! ```

mod error;
pub use error::*;

mod line;

mod read;
pub use read::*;

mod write;
pub use write::*;
