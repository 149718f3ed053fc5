//! A self-balanced binary search tree keyed by coordinate [`Code`]s.
//!
//! The tree is bulk-loaded from a sorted key list using the
//! recursive-middle algorithm (§4.2): the root is the middle element,
//! and the left/right subtrees are built recursively from the two
//! halves. This guarantees height `ceil(log2(n + 1))` without any
//! rotations — the domain never needs AVL/red-black machinery because
//! every board's coordinate set (at most `board_size^2 <= 400` codes)
//! is known in full before the tree is queried.
//!
//! `insert` is also provided for the rare incremental case (§4.2 allows
//! it to skew the tree, as long as `contains`/`get` stay correct).

use crate::coord::Code;

struct Node<V> {
    code: Code,
    value: V,
    left: Option<Box<Node<V>>>,
    right: Option<Box<Node<V>>>,
}

/// An ordered map from coordinate code to `V`, used both as a plain set
/// (`V = ()`) for "has this cell been shot at" queries and as a lookup
/// (`V = usize`, a ship index) for "which ship occupies this cell".
pub struct BalancedTree<V> {
    root: Option<Box<Node<V>>>,
    size: usize,
}

impl<V> Default for BalancedTree<V> {
    fn default() -> Self {
        Self { root: None, size: 0 }
    }
}

impl<V> BalancedTree<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a balanced tree from `entries`, which must already be
    /// sorted by code and contain no duplicate codes. Height of the
    /// result is `ceil(log2(entries.len() + 1))`.
    pub fn build_sorted(entries: Vec<(Code, V)>) -> Self {
        let size = entries.len();
        let mut slots: Vec<Option<(Code, V)>> = entries.into_iter().map(Some).collect();
        let root = build_balanced(&mut slots);
        Self { root, size }
    }

    /// Inserts or overwrites `code -> value`. Does not rebalance, so a
    /// long run of incremental inserts can skew the tree; `contains`
    /// and `get` remain correct regardless.
    pub fn insert(&mut self, code: Code, value: V) {
        let inserted = insert(&mut self.root, code, value);
        if inserted {
            self.size += 1;
        }
    }

    pub fn contains(&self, code: Code) -> bool {
        self.get(code).is_some()
    }

    pub fn get(&self, code: Code) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match code.cmp(&node.code) {
                std::cmp::Ordering::Equal => return Some(&node.value),
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn get_mut(&mut self, code: Code) -> Option<&mut V> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            cur = match code.cmp(&node.code) {
                std::cmp::Ordering::Equal => return Some(&mut node.value),
                std::cmp::Ordering::Less => node.left.as_deref_mut(),
                std::cmp::Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// In-order traversal of the codes (ascending).
    pub fn in_order(&self) -> Vec<Code> {
        let mut out = Vec::with_capacity(self.size);
        in_order(self.root.as_deref(), &mut out);
        out
    }

    /// Height of the tree (0 for an empty tree, 1 for a single node).
    pub fn height(&self) -> usize {
        height(self.root.as_deref())
    }
}

fn build_balanced<V>(slots: &mut [Option<(Code, V)>]) -> Option<Box<Node<V>>> {
    if slots.is_empty() {
        return None;
    }
    let mid = slots.len() / 2;
    let (left_slots, rest) = slots.split_at_mut(mid);
    let (mid_slot, right_slots) = rest.split_first_mut().expect("mid index is in bounds");

    let left = build_balanced(left_slots);
    let right = build_balanced(right_slots);
    let (code, value) = mid_slot.take().expect("slot visited exactly once");

    Some(Box::new(Node { code, value, left, right }))
}

fn insert<V>(slot: &mut Option<Box<Node<V>>>, code: Code, value: V) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(Node { code, value, left: None, right: None }));
            true
        }
        Some(node) => match code.cmp(&node.code) {
            std::cmp::Ordering::Equal => {
                node.value = value;
                false
            }
            std::cmp::Ordering::Less => insert(&mut node.left, code, value),
            std::cmp::Ordering::Greater => insert(&mut node.right, code, value),
        },
    }
}

fn in_order<V>(node: Option<&Node<V>>, out: &mut Vec<Code>) {
    if let Some(node) = node {
        in_order(node.left.as_deref(), out);
        out.push(node.code);
        in_order(node.right.as_deref(), out);
    }
}

fn height<V>(node: Option<&Node<V>>) -> usize {
    match node {
        None => 0,
        Some(node) => 1 + height(node.left.as_deref()).max(height(node.right.as_deref())),
    }
}
