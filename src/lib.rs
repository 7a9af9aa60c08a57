//! This crate exposes a Binary Search Tree (BST) whose balance is checked
//! and restored on demand instead of being maintained on every mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`), and visiting the
//! left subtree, then the subtree root, then the right subtree yields the
//! keys in sorted order.
//!
//! ## Balancing on demand
//!
//! Unlike an AVL or red-black tree, this tree does not rotate on every
//! insert or delete. [`Tree::build`] produces a height-balanced shape up
//! front; afterwards point mutations may degrade the shape, and callers
//! decide when to pay for a fix by checking [`Tree::is_balanced`] and
//! calling [`Tree::rebalance`].
//!
//! ```
//! use relaxed_bst::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
//! assert!(tree.is_balanced());
//!
//! // A run of ascending inserts grows a long right spine.
//! for key in [100, 101, 102, 103, 104] {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
mod pretty;
pub mod tree;

#[cfg(test)]
mod test;

pub use crate::tree::{Node, Tree};
