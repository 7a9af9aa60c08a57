//! The tree engine: [`Node`], [`Tree`], and every operation over them.
//!
//! Mutating operations rebuild ownership along the descent path: each
//! recursive helper takes an owned subtree link and returns the (possibly
//! new) subtree to be stored back into the parent. No parent pointers are
//! kept, so the structure stays a strict ownership tree.

use std::cmp::Ordering;
use std::iter::FromIterator;

use crate::iter::{InOrder, IntoIter, LevelOrder, PostOrder, PreOrder};

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A node in the tree, holding one key and owning up to two children.
///
/// References to nodes are handed out by [`Tree::find`] and [`Tree::root`];
/// the `(key, left, right)` accessors expose the shape read-only, which is
/// all a renderer or other external consumer needs.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// The height of the subtree rooted at this node: the number of edges
    /// on the longest downward path. A leaf has height `0`.
    pub fn height(&self) -> isize {
        subtree_height(Some(self))
    }
}

/// A Binary Search Tree over a totally ordered key type, balanced on
/// demand. Keys are unique; inserting a present key or deleting an absent
/// one is a defined no-op rather than an error.
///
/// [`Tree::build`] constructs a height-balanced tree from any input
/// collection. Point mutations ([`insert`](Tree::insert),
/// [`delete`](Tree::delete)) preserve the search invariant but not the
/// shape; [`is_balanced`](Tree::is_balanced) and
/// [`rebalance`](Tree::rebalance) check and restore it explicitly.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Tree { root: None, len: 0 }
    }

    /// Builds a height-balanced tree from a sequence of keys. The input
    /// may be unsorted and may contain duplicates; the tree holds the
    /// deduplicated keys.
    ///
    /// The shape is deterministic: the sorted keys are split at the
    /// midpoint (the lower of the two central elements when the slice
    /// length is even), which becomes the subtree root, and the halves are
    /// built the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use relaxed_bst::Tree;
    ///
    /// let tree = Tree::build([5, 3, 8, 1, 4, 7, 9, 3]);
    ///
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();
        Self::from_sorted(keys)
    }

    /// Builds from keys that are already sorted and deduplicated.
    fn from_sorted(keys: Vec<K>) -> Self {
        let len = keys.len();
        Tree {
            root: build_balanced(keys),
            len,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every key. Unlinks iteratively so that dropping a
    /// degenerate (unrebalanced) tree cannot exhaust the call stack.
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Inserts the given key. Returns `true` if the key was absent and is
    /// now present; inserting a duplicate returns `false` and leaves the
    /// tree untouched.
    ///
    /// The new node lands wherever the search for it bottoms out; no
    /// rebalancing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use relaxed_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(tree.find(&1).is_some());
    ///
    /// // Inserting the same key again is a no-op.
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut inserted = false;
        self.root = insert_node(self.root.take(), key, &mut inserted);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Deletes the given key. Returns `true` if the key was present;
    /// deleting an absent key returns `false` and leaves the tree
    /// untouched.
    ///
    /// A node with two children is replaced by its in-order successor (the
    /// smallest key in its right subtree), so the remaining keys keep
    /// their sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use relaxed_bst::Tree;
    ///
    /// let mut tree = Tree::build([2, 1, 3]);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(tree.find(&2).is_none());
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut deleted = false;
        self.root = delete_node(self.root.take(), key, &mut deleted);
        if deleted {
            self.len -= 1;
        }
        deleted
    }

    /// Finds the node holding the given key, or `None` if the key is
    /// absent. Runs in `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use relaxed_bst::Tree;
    ///
    /// let tree = Tree::build([2, 1, 3]);
    ///
    /// assert_eq!(tree.find(&1).map(|node| node.key()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Whether the given key is present.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// The height of the tree: `-1` when empty, `0` for a single node,
    /// otherwise one more than the taller child subtree of the root.
    pub fn height(&self) -> isize {
        subtree_height(self.root.as_deref())
    }

    /// The depth of the node holding the given key: the number of edges
    /// from the root down to it, so `depth` of the root key is `0`.
    /// Returns `None` if the key is absent.
    ///
    /// Since the tree keeps no parent links, the depth is recomputed by
    /// descending from the root and counting steps; for a valid search
    /// tree this walks exactly the node's access path.
    pub fn depth(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => current = node.right.as_deref(),
            }
            depth += 1;
        }
        None
    }

    /// Whether every node's child subtrees differ in height by at most
    /// one. This is the strict per-node check, not merely a comparison of
    /// leaf depths; an empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use relaxed_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_balanced());
    ///
    /// for key in [1, 2, 3, 4, 5] {
    ///     tree.insert(key);
    /// }
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root.as_deref()).is_some()
    }

    /// Rebuilds the tree into a height-balanced shape holding the exact
    /// same key set.
    ///
    /// The keys are drained in sorted order (an in-order walk of the old
    /// structure) and rebuilt with the same midpoint split as
    /// [`Tree::build`], so rebalancing an already-balanced tree is a
    /// no-op on the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use relaxed_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [1, 2, 3, 4, 5, 6, 7] {
    ///     tree.insert(key);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn rebalance(&mut self) {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<K>>> = Vec::new();
        let mut current = self.root.take();
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let mut node = match stack.pop() {
                Some(node) => node,
                None => break,
            };
            current = node.right.take();
            keys.push(node.key);
        }
        // Keys drained in order are already sorted and unique.
        self.root = build_balanced(keys);
    }

    /// Visits the keys breadth-first: the root, then each deeper level
    /// left to right.
    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root.as_deref())
    }

    /// Visits the keys in sorted (ascending) order: left subtree, node,
    /// right subtree.
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref())
    }

    /// Visits each node before either of its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root.as_deref())
    }

    /// Visits each node after both of its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root.as_deref())
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> InOrder<'a, K> {
        self.in_order()
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> IntoIter<K> {
        IntoIter::new(self.root.take())
    }
}

/// Builds a balanced subtree from sorted, deduplicated keys: the midpoint
/// becomes the root and the halves recurse. An even-length slice takes the
/// lower of its two central elements, which pins the shape for a given key
/// set.
fn build_balanced<K>(mut keys: Vec<K>) -> Link<K> {
    if keys.is_empty() {
        return None;
    }
    let mid = (keys.len() - 1) / 2;
    let upper = keys.split_off(mid + 1);
    let key = keys.pop().expect("splitting above mid leaves the midpoint behind");
    Some(Box::new(Node {
        key,
        left: build_balanced(keys),
        right: build_balanced(upper),
    }))
}

fn insert_node<K: Ord>(node: Link<K>, key: K, inserted: &mut bool) -> Link<K> {
    let mut node = match node {
        None => {
            *inserted = true;
            return Some(Box::new(Node::new(key)));
        }
        Some(node) => node,
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert_node(node.left.take(), key, inserted),
        // An equal key is already present; set semantics reject it silently.
        Ordering::Equal => {}
        Ordering::Greater => node.right = insert_node(node.right.take(), key, inserted),
    }

    if cfg!(debug_assertions) {
        if let Some(left) = node.left.as_deref() {
            assert!(left.key < node.key);
        }
        if let Some(right) = node.right.as_deref() {
            assert!(node.key < right.key);
        }
    }
    Some(node)
}

fn delete_node<K: Ord>(node: Link<K>, key: &K, deleted: &mut bool) -> Link<K> {
    let mut node = match node {
        None => return None,
        Some(node) => node,
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete_node(node.left.take(), key, deleted),
        Ordering::Greater => node.right = delete_node(node.right.take(), key, deleted),
        Ordering::Equal => {
            *deleted = true;
            return match (node.left.take(), node.right.take()) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(left), Some(right)) => {
                    // Two children: the in-order successor (smallest key of
                    // the right subtree) takes over this node's slot. Its
                    // own right child, if any, moves up into its old place.
                    let (right, successor) = detach_min(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = right;
                    Some(node)
                }
            };
        }
    }
    Some(node)
}

/// Unlinks the smallest node of the given subtree, returning the remaining
/// subtree and the detached key.
fn detach_min<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        None => (node.right.take(), node.key),
        Some(left) => {
            let (rest, min) = detach_min(left);
            node.left = rest;
            (Some(node), min)
        }
    }
}

fn subtree_height<K>(node: Option<&Node<K>>) -> isize {
    match node {
        None => -1,
        Some(node) => {
            1 + subtree_height(node.left.as_deref()).max(subtree_height(node.right.as_deref()))
        }
    }
}

/// The subtree's height if every node in it satisfies the balance
/// condition, `None` otherwise. Folding the two questions into one walk
/// keeps the check linear in the node count.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
    let node = match node {
        None => return Some(-1),
        Some(node) => node,
    };
    let left = balanced_height(node.left.as_deref())?;
    let right = balanced_height(node.right.as_deref())?;
    if (left - right).abs() <= 1 {
        Some(1 + left.max(right))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tree: &Tree<i32>) -> Vec<i32> {
        tree.in_order().copied().collect()
    }

    #[test]
    fn build_empty() {
        let tree: Tree<i32> = Tree::build([]);

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert!(tree.is_balanced());
        assert!(tree.root().is_none());
        assert!(tree.find(&1).is_none());
    }

    #[test]
    fn build_single() {
        let tree = Tree::build([7]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.min(), Some(&7));
        assert_eq!(tree.max(), Some(&7));
    }

    #[test]
    fn build_sorts_and_deduplicates() {
        let tree = Tree::build([9, 1, 5, 1, 9, 3]);

        assert_eq!(keys(&tree), [1, 3, 5, 9]);
        assert_eq!(tree.len(), 4);
        assert!(tree.is_balanced());
    }

    #[test]
    fn build_shape_is_deterministic() {
        let tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);

        // Midpoint splits put 5 at the root, 3 and 8 below it.
        let level: Vec<i32> = tree.level_order().copied().collect();
        assert_eq!(level, [5, 3, 8, 1, 4, 7, 9]);
        assert_eq!(tree.height(), 2);

        // An even-length key set roots at the lower central element.
        let tree = Tree::build([1, 2, 3, 4]);
        let level: Vec<i32> = tree.level_order().copied().collect();
        assert_eq!(level, [2, 1, 3, 4]);
    }

    #[test]
    fn insert_into_empty_sets_root() {
        let mut tree = Tree::new();

        assert!(tree.insert(1));
        assert_eq!(tree.root().map(|node| node.key()), Some(&1));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn insert_duplicate_is_a_noop() {
        let mut tree = Tree::build([2, 1, 3]);

        assert!(!tree.insert(2));
        assert_eq!(tree.len(), 3);
        assert_eq!(keys(&tree), [1, 2, 3]);
    }

    #[test]
    fn insert_does_not_rebalance() {
        let mut tree = Tree::new();
        for key in [1, 2, 3, 4, 5] {
            assert!(tree.insert(key));
        }

        // Ascending inserts build a right spine of height n - 1.
        assert_eq!(tree.height(), 4);
        assert!(!tree.is_balanced());
        assert_eq!(keys(&tree), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn delete_from_empty() {
        let mut tree: Tree<i32> = Tree::new();

        assert!(!tree.delete(&1));
        assert!(tree.is_empty());
    }

    #[test]
    fn delete_absent_key_is_a_noop() {
        let mut tree = Tree::build([2, 1, 3]);

        assert!(!tree.delete(&42));
        assert_eq!(tree.len(), 3);
        assert_eq!(keys(&tree), [1, 2, 3]);
    }

    #[test]
    fn delete_leaf() {
        let mut tree = Tree::build([2, 1, 3]);

        assert!(tree.delete(&1));
        assert!(tree.find(&1).is_none());
        assert_eq!(keys(&tree), [2, 3]);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn delete_node_with_only_left_child() {
        let mut tree = Tree::new();
        tree.insert(5);
        tree.insert(3);
        tree.insert(2);

        assert!(tree.delete(&3));
        assert_eq!(keys(&tree), [2, 5]);
        // 2 was spliced into 3's slot under 5.
        assert_eq!(tree.root().and_then(|n| n.left()).map(|n| n.key()), Some(&2));
    }

    #[test]
    fn delete_node_with_only_right_child() {
        let mut tree = Tree::new();
        tree.insert(5);
        tree.insert(7);
        tree.insert(9);

        assert!(tree.delete(&7));
        assert_eq!(keys(&tree), [5, 9]);
        assert_eq!(tree.root().and_then(|n| n.right()).map(|n| n.key()), Some(&9));
    }

    #[test]
    fn delete_node_with_two_children_promotes_successor() {
        let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);

        assert!(tree.delete(&5));
        // 7 is the smallest key of the old right subtree.
        assert_eq!(tree.root().map(|node| node.key()), Some(&7));
        assert_eq!(keys(&tree), [1, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn delete_when_successor_has_a_right_child() {
        let mut tree = Tree::new();
        for key in [5, 3, 10, 7, 12, 8] {
            tree.insert(key);
        }

        assert!(tree.delete(&5));
        // Successor 7 moves to the root and its child 8 moves up under 10.
        assert_eq!(tree.root().map(|node| node.key()), Some(&7));
        let ten = tree.find(&10).expect("10 stays in the tree");
        assert_eq!(ten.left().map(|node| node.key()), Some(&8));
        assert_eq!(keys(&tree), [3, 7, 8, 10, 12]);
    }

    #[test]
    fn delete_root_of_single_node_tree() {
        let mut tree = Tree::build([5]);

        assert!(tree.delete(&5));
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn find_returns_the_matching_node() {
        let tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);

        let node = tree.find(&3).expect("3 is present");
        assert_eq!(node.key(), &3);
        assert_eq!(node.left().map(|n| n.key()), Some(&1));
        assert_eq!(node.right().map(|n| n.key()), Some(&4));
        assert!(tree.find(&6).is_none());
    }

    #[test]
    fn node_height_counts_edges() {
        let tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(tree.find(&5).map(Node::height), Some(2));
        assert_eq!(tree.find(&3).map(Node::height), Some(1));
        assert_eq!(tree.find(&1).map(Node::height), Some(0));
    }

    #[test]
    fn depth_counts_edges_from_the_root() {
        let tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(tree.depth(&5), Some(0));
        assert_eq!(tree.depth(&3), Some(1));
        assert_eq!(tree.depth(&8), Some(1));
        assert_eq!(tree.depth(&1), Some(2));
        assert_eq!(tree.depth(&42), None);
    }

    #[test]
    fn min_and_max() {
        let tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);

        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&9));
        assert_eq!(Tree::<i32>::new().min(), None);
    }

    #[test]
    fn unbalance_then_rebalance() {
        let mut tree = Tree::build([5, 3, 8, 1, 4, 7, 9]);
        assert!(tree.is_balanced());

        for key in [100, 101, 102, 103, 104] {
            assert!(tree.insert(key));
        }
        assert!(!tree.is_balanced());

        tree.rebalance();
        assert!(tree.is_balanced());
        assert_eq!(keys(&tree), [1, 3, 4, 5, 7, 8, 9, 100, 101, 102, 103, 104]);
        assert_eq!(tree.len(), 12);
    }

    #[test]
    fn rebalance_is_idempotent() {
        let mut tree = Tree::new();
        for key in [1, 2, 3, 4, 5, 6, 7, 8] {
            tree.insert(key);
        }

        tree.rebalance();
        let once = keys(&tree);
        let height = tree.height();

        tree.rebalance();
        assert_eq!(keys(&tree), once);
        assert_eq!(tree.height(), height);
        assert!(tree.is_balanced());
    }

    #[test]
    fn rebalance_empty_tree() {
        let mut tree: Tree<i32> = Tree::new();

        tree.rebalance();
        assert!(tree.is_empty());
        assert!(tree.is_balanced());
    }

    #[test]
    fn clear_empties_the_tree() {
        let mut tree = Tree::build([1, 2, 3]);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
    }

    #[test]
    fn extend_inserts_without_rebalancing() {
        let mut tree = Tree::build([2, 1, 3]);

        tree.extend([4, 5, 6]);
        assert_eq!(keys(&tree), [1, 2, 3, 4, 5, 6]);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn from_iterator_builds_balanced() {
        let tree: Tree<i32> = (1..=15).collect();

        assert!(tree.is_balanced());
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn drop_survives_a_degenerate_tree() {
        // A right spine thousands of nodes deep, dropped without
        // rebalancing first.
        let mut tree = Tree::new();
        for key in 0..5_000 {
            tree.insert(key);
        }
        drop(tree);
    }
}
