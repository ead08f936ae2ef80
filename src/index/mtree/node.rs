//! Node layout, routing, and point operations.

use log::{debug, trace};

use crate::common::config::MIN_ORDER;
use crate::common::{Error, Result, TreeConfig};

/// An M-way search tree node. Every node is also a complete tree.
///
/// # Layout
/// ```text
///                 keys:      [ s0 | s1 ]
///                 children:  [ c0 | c1 | c2 ]
///
///   c0 holds keys <= s0,  c1 holds s0 < keys <= s1,  c2 holds keys > s1
/// ```
///
/// Leaves store the tree's keys. Internal nodes store separators only:
/// `keys[i]` is the largest key that was under `children[i]` when the node
/// was split or built. Removal leaves separators in place, so a separator may
/// outlive the key it was copied from.
///
/// # Invariants
/// - `order >= 2`, identical in every node
/// - leaf: `children.is_empty()`; internal: `children.len() == keys.len() + 1`
/// - `keys` strictly ascending
/// - every key under `children[i]` is `<= keys[i]` and `> keys[i - 1]`
/// - a leaf never holds `order` keys once an operation returns
///
/// # Example
/// ```
/// use mwaytree::MTree;
///
/// let mut tree = MTree::new(3).unwrap();
/// tree.bulk_build(vec![5, 1, 9, 3]);
/// tree.insert(7).unwrap();
///
/// assert!(tree.search(&7));
/// assert_eq!(tree.collect_values(), vec![1, 3, 5, 7, 9]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MTree<K> {
    /// Branching factor `M`; also the leaf size that triggers a split.
    pub(super) order: usize,

    /// Stored keys (leaf) or separators (internal), strictly ascending.
    pub(super) keys: Vec<K>,

    /// Owned subtrees. Empty iff this node is a leaf.
    pub(super) children: Vec<MTree<K>>,
}

impl<K> MTree<K> {
    /// Create an empty tree.
    ///
    /// # Errors
    /// `Error::InvalidOrder` if `order < 2`.
    pub fn new(order: usize) -> Result<Self> {
        if order < MIN_ORDER {
            return Err(Error::InvalidOrder { order });
        }
        Ok(Self::empty_leaf(order))
    }

    /// Create an empty tree from an already validated config.
    pub fn with_config(config: TreeConfig) -> Self {
        Self::empty_leaf(config.order())
    }

    /// Leaf constructor for nodes created by split and bulk build.
    pub(super) fn empty_leaf(order: usize) -> Self {
        Self {
            order,
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The branching factor `M`.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Keys held directly by this node (separators if internal).
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub fn children(&self) -> &[MTree<K>] {
        &self.children
    }

    /// Number of keys stored in the tree. Separators are not counted.
    pub fn len(&self) -> usize {
        let mut total = 0;
        self.walk(|_, node| {
            if node.is_leaf() {
                total += node.keys.len();
            }
        });
        total
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels on the longest root-to-leaf path. A lone leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        self.walk(|depth, _| height = height.max(depth + 1));
        height
    }

    /// Visit every node in pre-order, left to right, with its depth (root = 0).
    ///
    /// Uses an explicit stack: inserts that keep landing in the same leaf
    /// deepen the tree by a level each split, so depth is not bounded by
    /// `log_M n`.
    pub(super) fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(usize, &'a MTree<K>),
    {
        let mut stack = vec![(0, self)];
        while let Some((depth, node)) = stack.pop() {
            visit(depth, node);
            stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        }
    }
}

impl<K> Drop for MTree<K> {
    // Tear down iteratively; the derived drop would recurse once per level.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl<K: Ord + Clone> MTree<K> {
    /// Index of the child responsible for `key`.
    ///
    /// Returns the first `i` with `key <= keys[i]`, or the last child if
    /// `key` is larger than every separator. Search, insert and remove all
    /// route through here so that a key equal to a separator always goes
    /// to the lower-indexed child.
    ///
    /// Only meaningful on internal nodes.
    #[inline]
    pub(super) fn find_child(&self, key: &K) -> usize {
        debug_assert!(!self.is_leaf(), "find_child called on a leaf");
        self.keys.partition_point(|sep| sep < key)
    }

    /// Whether `key` is stored in the tree.
    ///
    /// Descends to the responsible leaf and looks for an exact match there.
    /// Separators are not consulted, since one may be left over from a
    /// removed key.
    pub fn search(&self, key: &K) -> bool {
        let mut node = self;
        while !node.is_leaf() {
            node = &node.children[node.find_child(key)];
        }
        node.keys.binary_search(key).is_ok()
    }

    /// The leaf responsible for `key`.
    fn leaf_for_mut(&mut self, key: &K) -> &mut MTree<K> {
        let mut node = self;
        while !node.is_leaf() {
            let idx = node.find_child(key);
            trace!("routing to child {} of {}", idx, node.children.len());
            node = &mut node.children[idx];
        }
        node
    }

    /// Insert a new key, splitting the receiving leaf if it fills up.
    ///
    /// # Errors
    /// `Error::DuplicateKey` if `key` is already stored. The tree is not
    /// modified in that case.
    pub fn insert(&mut self, key: K) -> Result<()> {
        if self.search(&key) {
            return Err(Error::DuplicateKey);
        }

        let leaf = self.leaf_for_mut(&key);
        let pos = leaf.keys.partition_point(|k| k < &key);
        leaf.keys.insert(pos, key);
        trace!("inserted at leaf position {} ({} keys)", pos, leaf.keys.len());

        if leaf.keys.len() >= leaf.order {
            leaf.split_node();
        }
        Ok(())
    }

    /// Turn this overflowing leaf into an internal node with `order` leaf
    /// children of balanced size.
    ///
    /// The node is rewritten in place; nothing above it changes.
    pub(super) fn split_node(&mut self) {
        debug_assert!(self.is_leaf());
        debug_assert!(self.keys.len() >= self.order);

        let keys = std::mem::take(&mut self.keys);
        debug!("splitting leaf of {} keys into {} leaves", keys.len(), self.order);

        let slices = super::build::partition(keys, self.order);
        self.keys = super::build::separators(&slices);
        self.children = slices
            .into_iter()
            .map(|slice| MTree {
                order: self.order,
                keys: slice,
                children: Vec::new(),
            })
            .collect();
    }

    /// Remove a key.
    ///
    /// No merging happens: the leaf may be left short or empty and
    /// separators above it are left as they are. Call
    /// [`rebuild`](Self::rebuild) to rebalance.
    ///
    /// # Errors
    /// `Error::KeyNotFound` if `key` is not stored. The tree is not
    /// modified in that case.
    pub fn remove(&mut self, key: &K) -> Result<()> {
        let leaf = self.leaf_for_mut(key);
        match leaf.keys.binary_search(key) {
            Ok(pos) => {
                leaf.keys.remove(pos);
                trace!("removed from leaf position {} ({} keys left)", pos, leaf.keys.len());
                Ok(())
            }
            Err(_) => Err(Error::KeyNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(order: usize, keys: Vec<i32>) -> MTree<i32> {
        MTree {
            order,
            keys,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_new_rejects_small_orders() {
        assert_eq!(MTree::<i32>::new(0), Err(Error::InvalidOrder { order: 0 }));
        assert_eq!(MTree::<i32>::new(1), Err(Error::InvalidOrder { order: 1 }));

        let tree = MTree::<i32>::new(2).unwrap();
        assert!(tree.is_leaf());
        assert!(tree.is_empty());
        assert_eq!(tree.order(), 2);
    }

    #[test]
    fn test_find_child_equal_goes_left() {
        let node = MTree {
            order: 3,
            keys: vec![3, 5],
            children: vec![leaf(3, vec![1, 3]), leaf(3, vec![5]), leaf(3, vec![9])],
        };

        assert_eq!(node.find_child(&0), 0);
        assert_eq!(node.find_child(&3), 0);
        assert_eq!(node.find_child(&4), 1);
        assert_eq!(node.find_child(&5), 1);
        assert_eq!(node.find_child(&6), 2);
        assert_eq!(node.find_child(&100), 2);
    }

    #[test]
    fn test_insert_keeps_leaf_sorted() {
        let mut tree = MTree::new(5).unwrap();
        for k in [4, 1, 3, 2] {
            tree.insert(k).unwrap();
        }
        assert!(tree.is_leaf());
        assert_eq!(tree.keys(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_splits_at_order() {
        let mut tree = MTree::new(3).unwrap();
        tree.insert(1).unwrap();
        tree.insert(2).unwrap();
        assert!(tree.is_leaf());

        // Third key reaches the threshold: three leaves of one key each.
        tree.insert(3).unwrap();
        assert!(!tree.is_leaf());
        assert_eq!(tree.keys(), &[1, 2]);
        let leaves: Vec<&[i32]> = tree.children().iter().map(|c| c.keys()).collect();
        assert_eq!(leaves, vec![&[1][..], &[2][..], &[3][..]]);
    }

    #[test]
    fn test_split_in_child_deepens_only_that_child() {
        let mut tree = MTree::new(2).unwrap();
        tree.insert(10).unwrap();
        tree.insert(20).unwrap();
        assert_eq!(tree.keys(), &[10]);

        tree.insert(30).unwrap();
        assert_eq!(tree.height(), 3);
        assert!(tree.children()[0].is_leaf());
        assert!(!tree.children()[1].is_leaf());
        assert_eq!(tree.children()[1].keys(), &[20]);
    }

    #[test]
    fn test_duplicate_insert_is_rejected_without_mutation() {
        let mut tree = MTree::new(3).unwrap();
        for k in [1, 2, 3, 4] {
            tree.insert(k).unwrap();
        }
        let before = tree.clone();

        assert_eq!(tree.insert(3), Err(Error::DuplicateKey));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_remove_missing_is_rejected_without_mutation() {
        let mut tree = MTree::new(3).unwrap();
        for k in [1, 2, 3] {
            tree.insert(k).unwrap();
        }
        let before = tree.clone();

        assert_eq!(tree.remove(&7), Err(Error::KeyNotFound));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_search_ignores_stale_separator() {
        let mut tree = MTree::new(3).unwrap();
        for k in [1, 2, 3] {
            tree.insert(k).unwrap();
        }
        tree.remove(&1).unwrap();

        // Separator 1 survives in the root but the key itself is gone.
        assert_eq!(tree.keys(), &[1, 2]);
        assert!(!tree.search(&1));
        assert!(tree.search(&2));
        assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = MTree::from_keys(3, 1..=9).unwrap();
        let mut seen = Vec::new();
        tree.walk(|depth, node| seen.push((depth, node.keys().to_vec())));

        assert_eq!(seen[0], (0, vec![3, 6]));
        assert_eq!(seen[1], (1, vec![1, 2]));
        assert_eq!(seen[2], (2, vec![1]));
        assert_eq!(seen.len(), 13);
    }

    /// Right spine of order 2: `keys = [i]`, `children = [leaf [i], next]`.
    fn spine(depth: i32) -> MTree<i32> {
        let mut node = leaf(2, vec![depth]);
        for i in (0..depth).rev() {
            node = MTree {
                order: 2,
                keys: vec![i],
                children: vec![leaf(2, vec![i]), node],
            };
        }
        node
    }

    #[test]
    fn test_deep_spine_traversals_and_drop() {
        let mut tree = spine(100_000);
        assert_eq!(tree.height(), 100_001);
        assert_eq!(tree.len(), 100_001);
        assert!(tree.check_invariants().is_empty());
        assert_eq!(tree.stats().leaves, 100_001);

        let values = tree.collect_values();
        assert_eq!(values.len(), 100_001);
        assert!(values.windows(2).all(|w| w[0] < w[1]));

        // Lands in the bottom leaf, which then splits one level deeper.
        tree.insert(100_001).unwrap();
        assert_eq!(tree.height(), 100_002);
        assert!(tree.search(&100_001));
        tree.remove(&100_000).unwrap();
        assert!(!tree.search(&100_000));
        assert_eq!(tree.remove(&100_000), Err(Error::KeyNotFound));

        drop(tree);
    }

    #[test]
    fn test_len_and_height() {
        let mut tree = MTree::new(3).unwrap();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 1);

        for k in 0..10 {
            tree.insert(k).unwrap();
        }
        assert_eq!(tree.len(), 10);
        assert!(tree.height() > 1);
    }
}
