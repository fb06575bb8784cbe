//! Plain-text reports over trees and rosters.
//!
//! A header line per section, one value per line below it.

use std::fmt::Display;

use generational_arena::Index;
use itertools::Itertools;
use termtree::Tree;

use crate::roster::Roster;
use crate::tree::OrderedTree;

fn block<T: Display>(header: &str, mut items: impl Iterator<Item = T>) -> String {
    let body = items.join("\n");
    if body.is_empty() {
        header.to_string()
    } else {
        format!("{}\n{}", header, body)
    }
}

/// All four key orderings of a tree, two blank lines between sections.
pub fn render_traversals(tree: &OrderedTree) -> String {
    [
        block("In order:", tree.iter_inorder()),
        block("Pre-order:", tree.iter_preorder()),
        block("Post-order:", tree.iter_postorder()),
        block("Insertion order:", tree.iter_insertion()),
    ]
    .join("\n\n\n")
}

/// Roster names walked both ways, one blank line between sections.
pub fn render_roster(roster: &Roster) -> String {
    format!(
        "{}\n\n{}",
        block("Alphabetical order (head to tail):", roster.iter_forward()),
        block(
            "Reverse alphabetical order (tail to head):",
            roster.iter_backward()
        ),
    )
}

/// Key count, depth and value range of a tree.
pub fn render_stats(tree: &OrderedTree) -> String {
    let mut lines = vec![
        format!("keys: {}", tree.len()),
        format!("depth: {}", tree.depth()),
    ];
    if let Some(min) = tree.iter_inorder().next() {
        lines.push(format!("min: {}", min));
    }
    if let Some(max) = tree.iter_inorder().last() {
        lines.push(format!("max: {}", max));
    }
    lines.join("\n")
}

/// Conversion into a printable tree sketch.
pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeRender for OrderedTree {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => subtree(self, root),
            None => Tree::new("(empty)".to_string()),
        }
    }
}

fn subtree(tree: &OrderedTree, idx: Index) -> Tree<String> {
    match tree.get_node(idx) {
        Some(node) => {
            let mut view = Tree::new(node.key.to_string());
            if let Some(left) = node.left {
                view.push(subtree(tree, left));
            }
            if let Some(right) = node.right {
                view.push(subtree(tree, right));
            }
            view
        }
        None => Tree::new("?".to_string()),
    }
}
