use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Node of the search tree.
///
/// Child links are indices into the owning arena, `None` when the child is
/// absent. Nodes never hold references to each other, so teardown is a
/// single arena drop with no traversal and no double-free hazard.
#[derive(Debug)]
pub struct TreeNode {
    /// Key this node was inserted with
    pub key: i64,
    /// Index of the left child (all keys strictly smaller)
    pub left: Option<Index>,
    /// Index of the right child (all keys strictly greater)
    pub right: Option<Index>,
}

impl TreeNode {
    fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree that also records insertion order.
///
/// All nodes live in one generational arena; the tree proper stores child
/// indices and `insertion` stores node indices in the order their keys first
/// arrived. The two views share nodes without sharing ownership, and the
/// insertion sequence is independent of tree shape.
///
/// Duplicate keys are silently discarded: a key equal to one already present
/// mutates neither the tree nor the insertion sequence.
#[derive(Debug)]
pub struct OrderedTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
    /// Node indices in first-insertion order
    insertion: Vec<Index>,
}

impl Default for OrderedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            insertion: Vec::new(),
        }
    }

    /// Insert `key`, keeping the BST ordering invariant.
    ///
    /// Returns `true` if the key was new. A duplicate returns `false` and
    /// leaves both the tree and the insertion sequence untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: i64) -> bool {
        let mut current = match self.root {
            Some(idx) => idx,
            None => {
                let idx = self.attach(key);
                self.root = Some(idx);
                return true;
            }
        };

        loop {
            // Indices never dangle: nodes are only removed wholesale via clear().
            let (node_key, left, right) = match self.arena.get(current) {
                Some(node) => (node.key, node.left, node.right),
                None => return false,
            };

            match key.cmp(&node_key) {
                Ordering::Equal => return false,
                Ordering::Less => match left {
                    Some(child) => current = child,
                    None => {
                        let idx = self.attach(key);
                        if let Some(node) = self.arena.get_mut(current) {
                            node.left = Some(idx);
                        }
                        return true;
                    }
                },
                Ordering::Greater => match right {
                    Some(child) => current = child,
                    None => {
                        let idx = self.attach(key);
                        if let Some(node) = self.arena.get_mut(current) {
                            node.right = Some(idx);
                        }
                        return true;
                    }
                },
            }
        }
    }

    fn attach(&mut self, key: i64) -> Index {
        let idx = self.arena.insert(TreeNode::new(key));
        self.insertion.push(idx);
        idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root;
        while let Some(idx) = current {
            match self.arena.get(idx) {
                Some(node) => {
                    current = match key.cmp(&node.key) {
                        Ordering::Equal => return true,
                        Ordering::Less => node.left,
                        Ordering::Greater => node.right,
                    };
                }
                None => return false,
            }
        }
        false
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of distinct keys held.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Keys in node-before-children order.
    pub fn iter_preorder(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }

    /// Keys in ascending order (left subtree, node, right subtree).
    pub fn iter_inorder(&self) -> InOrderIter {
        InOrderIter::new(self)
    }

    /// Keys in children-before-node order.
    pub fn iter_postorder(&self) -> PostOrderIter {
        PostOrderIter::new(self)
    }

    /// Keys in the order they were first inserted.
    pub fn iter_insertion(&self) -> InsertionOrderIter {
        InsertionOrderIter::new(self)
    }

    /// Longest root-to-leaf node count; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.node_depth(root)
        } else {
            0
        }
    }

    fn node_depth(&self, idx: Index) -> usize {
        if let Some(node) = self.arena.get(idx) {
            let left = node.left.map(|child| self.node_depth(child)).unwrap_or(0);
            let right = node.right.map(|child| self.node_depth(child)).unwrap_or(0);
            1 + left.max(right)
        } else {
            0
        }
    }

    /// Release every node in one pass; the tree and the insertion sequence
    /// are both empty afterwards.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.insertion.clear();
    }
}

/// Explicit-stack pre-order traversal.
pub struct PreOrderIter<'a> {
    tree: &'a OrderedTree,
    stack: Vec<Index>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a OrderedTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(idx) {
                // Right pushed first so the left subtree pops first
                if let Some(right) = node.right {
                    self.stack.push(right);
                }
                if let Some(left) = node.left {
                    self.stack.push(left);
                }
                return Some(node.key);
            }
        }
        None
    }
}

/// Explicit-stack in-order traversal; yields keys in ascending order.
pub struct InOrderIter<'a> {
    tree: &'a OrderedTree,
    stack: Vec<Index>,
    descent: Option<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(tree: &'a OrderedTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            descent: tree.root(),
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        // Walk the left spine from the pending node, then emit the stack top
        // and continue into its right subtree.
        while let Some(idx) = self.descent {
            self.stack.push(idx);
            self.descent = self.tree.get_node(idx).and_then(|node| node.left);
        }
        let idx = self.stack.pop()?;
        let node = self.tree.get_node(idx)?;
        self.descent = node.right;
        Some(node.key)
    }
}

/// Explicit-stack post-order traversal using a visited flag per frame.
pub struct PostOrderIter<'a> {
    tree: &'a OrderedTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a OrderedTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(idx) {
                if !visited {
                    self.stack.push((idx, true));
                    if let Some(right) = node.right {
                        self.stack.push((right, false));
                    }
                    if let Some(left) = node.left {
                        self.stack.push((left, false));
                    }
                } else {
                    return Some(node.key);
                }
            }
        }
        None
    }
}

/// Walks the recorded insertion sequence head to tail.
pub struct InsertionOrderIter<'a> {
    tree: &'a OrderedTree,
    inner: std::slice::Iter<'a, Index>,
}

impl<'a> InsertionOrderIter<'a> {
    fn new(tree: &'a OrderedTree) -> Self {
        Self {
            tree,
            inner: tree.insertion.iter(),
        }
    }
}

impl<'a> Iterator for InsertionOrderIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = *self.inner.next()?;
        self.tree.get_node(idx).map(|node| node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //        5
    //       / \
    //      3   8
    //     /
    //    1
    fn sample_tree() -> OrderedTree {
        let mut tree = OrderedTree::new();
        for key in [5, 3, 8, 1] {
            assert!(tree.insert(key));
        }
        tree
    }

    #[test]
    fn test_insert_links_nodes_by_comparison() {
        let tree = sample_tree();
        let root = tree.get_node(tree.root().unwrap()).unwrap();
        assert_eq!(root.key, 5);

        let left = tree.get_node(root.left.unwrap()).unwrap();
        let right = tree.get_node(root.right.unwrap()).unwrap();
        assert_eq!(left.key, 3);
        assert_eq!(right.key, 8);
        assert_eq!(tree.get_node(left.left.unwrap()).unwrap().key, 1);
        assert!(left.right.is_none());
    }

    #[test]
    fn test_traversal_orders() {
        let tree = sample_tree();
        assert_eq!(tree.iter_preorder().collect::<Vec<_>>(), vec![5, 3, 1, 8]);
        assert_eq!(tree.iter_inorder().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
        assert_eq!(tree.iter_postorder().collect::<Vec<_>>(), vec![1, 3, 8, 5]);
        assert_eq!(tree.iter_insertion().collect::<Vec<_>>(), vec![5, 3, 8, 1]);
    }

    #[test]
    fn test_empty_tree_iterators_yield_nothing() {
        let tree = OrderedTree::new();
        assert_eq!(tree.iter_preorder().count(), 0);
        assert_eq!(tree.iter_inorder().count(), 0);
        assert_eq!(tree.iter_postorder().count(), 0);
        assert_eq!(tree.iter_insertion().count(), 0);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_duplicate_insert_is_dropped() {
        let mut tree = sample_tree();
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.iter_insertion().collect::<Vec<_>>(), vec![5, 3, 8, 1]);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut tree = sample_tree();
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.iter_insertion().count(), 0);
    }
}
