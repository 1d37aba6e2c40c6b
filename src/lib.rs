//! This crate indexes procurement bids in a Binary Search Tree keyed by the
//! bid's string id, and wraps it in a small console program.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores records in `Node`s. Each `Node` has up to two
//! children and the tree keeps this invariant:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key less
//!    than or equal to its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than or equal to its own key.
//!
//! Equal keys are always inserted to the right, which is why both bounds are
//! inclusive. Searching takes `O(height)`. The [`Tree`] here never
//! rebalances, so a file sorted by id turns the tree into a list and every
//! operation becomes `O(N)`.
//!
//! Removal follows a particular lossy algorithm rather than textbook BST
//! deletion; [`Tree::remove`] documents exactly what it does.
//!
//! ## The program
//!
//! [`loader`] reads a comma separated bid export into a tree, [`menu`] drives
//! it from stdin, and [`cli`] turns command line arguments into
//! [`config::Settings`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod bid;
pub mod cli;
pub mod config;
mod error;
pub mod loader;
pub mod logging;
pub mod menu;
pub mod timer;
mod tree;

pub use bid::{Bid, Detail};
pub use error::{Error, Result};
pub use tree::{Removal, Tree};
