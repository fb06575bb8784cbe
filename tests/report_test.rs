//! Tests for transcript-style report rendering

use ordtree::report::{render_roster, render_stats, render_traversals};
use ordtree::{OrderedTree, Roster, TreeRender};

fn tree_of(keys: &[i64]) -> OrderedTree {
    let mut tree = OrderedTree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

fn roster_of(names: &[&str]) -> Roster {
    let mut roster = Roster::new();
    for name in names {
        roster.add(name);
    }
    roster
}

// ============================================================
// Traversal Report Tests
// ============================================================

#[test]
fn given_example_tree_when_rendering_then_matches_transcript() {
    let tree = tree_of(&[5, 3, 8, 3, 1]);

    // Four sections, one key per line, two blank lines between sections
    let expected = "\
In order:
1
3
5
8


Pre-order:
5
3
1
8


Post-order:
1
3
8
5


Insertion order:
5
3
8
1";

    assert_eq!(render_traversals(&tree), expected);
}

#[test]
fn given_empty_tree_when_rendering_then_headers_only() {
    let tree = OrderedTree::new();

    let rendered = render_traversals(&tree);

    assert!(rendered.starts_with("In order:"));
    assert!(rendered.contains("Pre-order:"));
    assert!(rendered.contains("Post-order:"));
    assert!(rendered.ends_with("Insertion order:"));
}

#[test]
fn given_single_key_when_rendering_then_same_key_in_every_section() {
    let tree = tree_of(&[7]);

    let expected = "\
In order:
7


Pre-order:
7


Post-order:
7


Insertion order:
7";

    assert_eq!(render_traversals(&tree), expected);
}

// ============================================================
// Stats Report Tests
// ============================================================

#[test]
fn given_tree_when_rendering_stats_then_reports_count_depth_range() {
    let tree = tree_of(&[5, 3, 8, 1]);

    let stats = render_stats(&tree);

    assert_eq!(stats, "keys: 4\ndepth: 3\nmin: 1\nmax: 8");
}

#[test]
fn given_empty_tree_when_rendering_stats_then_omits_range() {
    let tree = OrderedTree::new();

    let stats = render_stats(&tree);

    assert_eq!(stats, "keys: 0\ndepth: 0");
}

// ============================================================
// Roster Report Tests
// ============================================================

#[test]
fn given_roster_when_rendering_then_lists_both_directions() {
    let roster = roster_of(&["Tara", "Alice", "Mick"]);

    let expected = "\
Alphabetical order (head to tail):
Alice
Mick
Tara

Reverse alphabetical order (tail to head):
Tara
Mick
Alice";

    assert_eq!(render_roster(&roster), expected);
}

#[test]
fn given_empty_roster_when_rendering_then_headers_only() {
    let roster = Roster::new();

    let rendered = render_roster(&roster);

    assert!(rendered.starts_with("Alphabetical order (head to tail):"));
    assert!(rendered.ends_with("Reverse alphabetical order (tail to head):"));
}

// ============================================================
// Tree Sketch Tests
// ============================================================

#[test]
fn given_tree_when_sketching_then_root_is_first_line() {
    let tree = tree_of(&[5, 3, 8, 1]);

    let sketch = tree.to_tree_string().to_string();
    let mut lines = sketch.lines();

    assert_eq!(lines.next(), Some("5"));
    // All four keys appear somewhere in the sketch
    for key in ["1", "3", "8"] {
        assert!(sketch.contains(key), "sketch should contain {}: {}", key, sketch);
    }
}

#[test]
fn given_empty_tree_when_sketching_then_placeholder() {
    let tree = OrderedTree::new();

    assert_eq!(tree.to_tree_string().to_string().trim_end(), "(empty)");
}
