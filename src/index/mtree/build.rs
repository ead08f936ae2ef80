//! Bulk construction, rebuild, and key collection.

use log::debug;

use super::MTree;
use crate::common::Result;

/// Sizes of the `parts` contiguous slices that `n` keys are cut into.
///
/// The first `n % parts` slices get one extra key, so sizes never increase
/// from left to right and differ by at most one.
pub(super) fn slice_sizes(n: usize, parts: usize) -> impl Iterator<Item = usize> {
    let base = n / parts;
    let remainder = n % parts;
    (0..parts).map(move |i| if i < remainder { base + 1 } else { base })
}

/// Cut `keys` into `parts` contiguous slices sized by [`slice_sizes`].
pub(super) fn partition<K>(keys: Vec<K>, parts: usize) -> Vec<Vec<K>> {
    let n = keys.len();
    let mut rest = keys.into_iter();
    slice_sizes(n, parts)
        .map(|size| rest.by_ref().take(size).collect())
        .collect()
}

/// Separator list for a node whose children hold `slices`: the last key of
/// every slice but the final one.
pub(super) fn separators<K: Clone>(slices: &[Vec<K>]) -> Vec<K> {
    let inner = slices.len().saturating_sub(1);
    slices[..inner]
        .iter()
        .filter_map(|slice| slice.last().cloned())
        .collect()
}

impl<K: Ord + Clone> MTree<K> {
    /// Create a tree of the given order holding `keys`.
    ///
    /// # Errors
    /// `Error::InvalidOrder` if `order < 2`.
    pub fn from_keys<I>(order: usize, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new(order)?;
        tree.bulk_build(keys);
        Ok(tree)
    }

    /// Replace the whole content of this tree with `keys`.
    ///
    /// Input may be unsorted and contain duplicates. Sibling subtrees differ
    /// in size by at most one key, so the result has depth `O(log_M n)`
    /// regardless of the order keys arrived in.
    pub fn bulk_build<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.children.clear();
        self.keys.clear();

        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort();
        keys.dedup();

        debug!("bulk building {} keys with order {}", keys.len(), self.order);
        self.build_sorted(keys);
    }

    fn build_sorted(&mut self, keys: Vec<K>) {
        if keys.len() < self.order {
            self.keys = keys;
            return;
        }

        let slices = partition(keys, self.order);
        let seps = separators(&slices);
        let order = self.order;

        self.children = slices
            .into_iter()
            .map(|slice| {
                let mut child = MTree::empty_leaf(order);
                child.build_sorted(slice);
                child
            })
            .collect();
        self.keys = seps;
    }

    /// Every stored key in ascending order.
    ///
    /// Returns a fresh vector. Separators are not included.
    pub fn collect_values(&self) -> Vec<K> {
        let mut out = Vec::new();
        self.walk(|_, node| {
            if node.is_leaf() {
                out.extend_from_slice(&node.keys);
            }
        });
        out
    }

    /// Rebuild the tree from its own keys.
    ///
    /// Drops stale separators and empty leaves left behind by removals.
    /// Rebuilding twice in a row gives the same tree.
    pub fn rebuild(&mut self) {
        let keys = self.collect_values();
        self.bulk_build(keys);
    }
}
