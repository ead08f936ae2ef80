//! Shape statistics and invariant checking.

use std::fmt;

use super::MTree;
use crate::common::config::MIN_ORDER;

/// A point-in-time summary of a tree's shape.
///
/// # Example
/// ```
/// use mwaytree::MTree;
///
/// let tree = MTree::from_keys(3, vec![5, 1, 9, 3]).unwrap();
/// let stats = tree.stats();
/// assert_eq!(stats.keys, 4);
/// assert_eq!(stats.leaves, 3);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Keys stored in leaves.
    pub keys: usize,

    /// Every node, leaves included.
    pub nodes: usize,

    pub leaves: usize,

    /// Leaves emptied by removals. Zero right after a rebuild (unless the
    /// whole tree is empty).
    pub empty_leaves: usize,

    /// Levels on the longest root-to-leaf path.
    pub height: usize,
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TreeStats {{ keys: {}, nodes: {}, leaves: {}, empty_leaves: {}, height: {} }}",
            self.keys, self.nodes, self.leaves, self.empty_leaves, self.height
        )
    }
}

/// A broken structural invariant found by [`MTree::check_invariants`].
///
/// `depth` is 0 at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Order below the minimum of 2.
    InvalidOrder { order: usize },

    /// A node whose order differs from the root's.
    OrderMismatch { depth: usize, expected: usize, found: usize },

    /// Internal node without exactly one more child than keys.
    ChildCount { depth: usize, keys: usize, children: usize },

    /// Keys within a node not strictly ascending.
    UnsortedKeys { depth: usize },

    /// A key outside the range its parent's separators assign to it.
    OutOfRange { depth: usize },

    /// A leaf left holding `order` keys or more.
    OverfullLeaf { depth: usize, keys: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::InvalidOrder { order } => write!(f, "order {} is below 2", order),
            Violation::OrderMismatch {
                depth,
                expected,
                found,
            } => write!(f, "depth {}: order {} differs from root order {}", depth, found, expected),
            Violation::ChildCount {
                depth,
                keys,
                children,
            } => write!(f, "depth {}: {} keys but {} children", depth, keys, children),
            Violation::UnsortedKeys { depth } => write!(f, "depth {}: keys not strictly ascending", depth),
            Violation::OutOfRange { depth } => write!(f, "depth {}: key outside separator range", depth),
            Violation::OverfullLeaf { depth, keys } => write!(f, "depth {}: leaf holds {} keys", depth, keys),
        }
    }
}

impl<K: Ord> MTree<K> {
    /// Walk the whole tree and summarize its shape.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.walk(|depth, node| {
            stats.nodes += 1;
            stats.height = stats.height.max(depth + 1);
            if node.is_leaf() {
                stats.leaves += 1;
                stats.keys += node.keys.len();
                if node.keys.is_empty() {
                    stats.empty_leaves += 1;
                }
            }
        });
        stats
    }

    /// Every structural invariant violation in the tree. Empty when healthy.
    ///
    /// Nodes are visited in pre-order. Every key under a node must lie in the
    /// `(lower, upper]` range its ancestors' separators assign to it.
    pub fn check_invariants(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        let order = self.order;
        if order < MIN_ORDER {
            out.push(Violation::InvalidOrder { order });
        }

        let mut stack: Vec<(usize, &MTree<K>, Option<&K>, Option<&K>)> = vec![(0, self, None, None)];
        while let Some((depth, node, lower, upper)) = stack.pop() {
            if node.order != order {
                out.push(Violation::OrderMismatch {
                    depth,
                    expected: order,
                    found: node.order,
                });
            }
            if node.keys.windows(2).any(|w| w[0] >= w[1]) {
                out.push(Violation::UnsortedKeys { depth });
            }
            let out_of_range = node.keys.iter().any(|k| {
                lower.is_some_and(|lo| k <= lo) || upper.is_some_and(|hi| k > hi)
            });
            if out_of_range {
                out.push(Violation::OutOfRange { depth });
            }

            if node.is_leaf() {
                if node.keys.len() >= order {
                    out.push(Violation::OverfullLeaf {
                        depth,
                        keys: node.keys.len(),
                    });
                }
                continue;
            }

            if node.children.len() != node.keys.len() + 1 {
                out.push(Violation::ChildCount {
                    depth,
                    keys: node.keys.len(),
                    children: node.children.len(),
                });
                continue;
            }

            // Reversed so the leftmost child is checked first.
            for (i, child) in node.children.iter().enumerate().rev() {
                let lo = if i == 0 { lower } else { Some(&node.keys[i - 1]) };
                let hi = node.keys.get(i).or(upper);
                stack.push((depth + 1, child, lo, hi));
            }
        }
        out
    }
}
